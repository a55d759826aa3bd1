use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("Usage: a11y-import <inputPath> <outputPath>\nExample: a11y-import deque.csv linear.csv")]
    MissingArguments,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ImportArgs {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Parse `a11y-import <inputPath> <outputPath>`. Anything after the two paths is ignored.
pub fn parse_args(args: &[String]) -> Result<ImportArgs, UsageError> {
    match args {
        [input, output, rest @ ..] if !input.is_empty() && !output.is_empty() => {
            if !rest.is_empty() {
                debug!(ignored = ?rest, "Ignoring extra arguments");
            }
            Ok(ImportArgs {
                input: PathBuf::from(input),
                output: PathBuf::from(output),
            })
        }
        _ => Err(UsageError::MissingArguments),
    }
}
