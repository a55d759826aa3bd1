/// Prefix every line of `text` with `> `.
pub fn blockquote(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Swap double quotes for single quotes so the snippet survives CSV quoting
/// on the Linear side.
pub fn single_quoted(code: &str) -> String {
    code.replace('"', "'")
}
