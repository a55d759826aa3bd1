mod cli;
mod config;
mod model;
mod pipeline;
mod transform;
mod util;

use std::io::{self, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use config::ImportConfig;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout only carries the status markers.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = match cli::parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    };

    let config = ImportConfig::default();
    let result = pipeline::run(&args.input, &args.output, &config);
    let status = report(&result, &mut io::stdout().lock()).unwrap_or(FAILURE);
    ExitCode::from(status)
}

const FAILURE: u8 = 2;

/// Print the outcome markers and pick the exit status. `[COMPLETE]` is
/// printed whether or not the run failed.
fn report(result: &anyhow::Result<usize>, out: &mut impl Write) -> io::Result<u8> {
    if let Err(e) = result {
        writeln!(out, "[ERROR] {e:#}")?;
    }
    writeln!(out, "[COMPLETE]")?;
    out.flush()?;
    Ok(if result.is_ok() { 0 } else { FAILURE })
}
