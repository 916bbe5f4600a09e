// ============================================================
// Layer 4 — JSONL Loader
// ============================================================
// Reads newline-delimited JSON: one object per line, UTF-8.
//
// The same line parser is used for the input dataset and for
// the output file read back on resume, so both sides agree on
// what a valid line is:
//   - blank (whitespace-only) lines are skipped
//   - every other line must parse as JSON ...
//   - ... and must be a JSON object
//
// Any bad line is fatal. There is no "skip and continue":
// a half-loaded dataset or label history would silently
// change which records are offered for review.

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::domain::record::Record;
use crate::domain::traits::RecordSource;

/// Loads the whole dataset from a .jsonl file.
pub struct JsonlLoader {
    path: PathBuf,
}

impl JsonlLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonlLoader {
    fn load_all(&self) -> Result<Vec<Record>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open input file '{}'", self.path.display()))?;

        let records = read_records(BufReader::new(file), &self.path)?;
        tracing::info!(
            "Loaded {} records from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Parse every non-blank line of `reader` as a JSON object.
/// `origin` only labels error messages.
pub fn read_records<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| {
            format!("Cannot read line {} of '{}'", line_no, origin.display())
        })?;

        if line.trim().is_empty() {
            tracing::warn!("Skipping blank line {} of '{}'", line_no, origin.display());
            continue;
        }

        let value: serde_json::Value = serde_json::from_str(&line).with_context(|| {
            format!("Malformed JSON on line {} of '{}'", line_no, origin.display())
        })?;

        let record = Record::from_value(value, line_no)
            .with_context(|| format!("Bad record in '{}'", origin.display()))?;
        records.push(record);
    }

    Ok(records)
}
