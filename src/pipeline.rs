use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::ImportConfig;
use crate::model::deque::DequeRecord;
use crate::model::issue::{LinearIssue, LINEAR_COLUMNS};
use crate::transform::to_linear_issue;

/// Lazily decode a Deque CSV export. The header row is read up front; each
/// data row is decoded only when the iterator is advanced.
pub fn read_records<R: Read>(reader: R) -> Result<impl Iterator<Item = Result<DequeRecord>>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr
        .headers()
        .context("Failed to read CSV header row")?
        .clone();

    let records = rdr.into_records().enumerate().map(move |(i, row)| -> Result<DequeRecord> {
        let row = row.with_context(|| format!("Failed to parse record {}", i + 1))?;
        Ok(DequeRecord::from_row(headers.iter(), row.iter()))
    });
    Ok(records)
}

/// Write a Linear import CSV, one row per issue as it arrives. Returns the
/// number of rows written. Rows written before an error are flushed.
pub fn write_issues<W: Write>(
    writer: W,
    mut issues: impl Iterator<Item = Result<LinearIssue>>,
) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(LINEAR_COLUMNS)
        .context("Failed to write CSV header row")?;

    let mut written = 0;
    let result = issues.try_for_each(|issue| -> Result<()> {
        wtr.serialize(issue?)
            .with_context(|| format!("Failed to write record {}", written + 1))?;
        written += 1;
        Ok(())
    });
    let flushed = wtr.flush().context("Failed to flush output");
    result?;
    flushed?;
    Ok(written)
}

/// Stream `reader` through the transformer into `writer`.
pub fn convert<R: Read, W: Write>(reader: R, writer: W, config: &ImportConfig) -> Result<usize> {
    let issues = read_records(reader)?.map(|record| -> Result<LinearIssue> {
        Ok(to_linear_issue(&record?, config))
    });
    write_issues(writer, issues)
}

/// Convert the Deque export at `input` into a Linear import at `output`.
pub fn run(input: &Path, output: &Path, config: &ImportConfig) -> Result<usize> {
    info!(input = %input.display(), output = %output.display(), "Converting Deque export");

    let reader = File::open(input)
        .with_context(|| format!("Failed to open input {}", input.display()))?;
    let writer = File::create(output)
        .with_context(|| format!("Failed to create output {}", output.display()))?;

    let count = convert(reader, writer, config)?;
    info!(count, "Wrote Linear import");
    Ok(count)
}
