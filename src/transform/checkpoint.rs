/// Short code from a checkpoint citation: the text between the last `(` and
/// the last `)`. None when either is missing or they are out of order.
pub fn format_checkpoint(checkpoint: &str) -> Option<&str> {
    let start = checkpoint.rfind('(')? + 1;
    let end = checkpoint.rfind(')')?;
    checkpoint.get(start..end)
}
