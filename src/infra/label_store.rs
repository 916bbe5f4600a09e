// ============================================================
// Layer 6 — Label Store
// ============================================================
// The output file is both the session's only side effect and
// its resume point.
//
// Startup:
//   - if the file exists, every line is parsed back into a
//     Record (a prior label assignment); a malformed line is
//     fatal, since guessing would risk re-showing records
//   - the file is then opened in append mode (created if new)
//
// Each label:
//   - serialised to one line of compact JSON
//   - written with a single write call
//   - flushed immediately
//
// Example file after two labels:
//   {"id":7,"text":"storm warning","label":"weather"}
//   {"id":3,"text":"cup final","label":"sport"}

use anyhow::{Context, Result};
use std::{
    fs::{self, File, OpenOptions},
    io::{Cursor, Write},
    path::{Path, PathBuf},
};

use crate::data::loader::read_records;
use crate::domain::record::Record;

/// Open handle on the output file for the session's lifetime.
pub struct LabelStore {
    path: PathBuf,
    file: File,
}

impl LabelStore {
    /// Load any previously committed labels, then open for appending.
    ///
    /// Returns the store and the prior assignments in file order.
    pub fn open(path: impl Into<PathBuf>) -> Result<(Self, Vec<Record>)> {
        let path = path.into();

        let mut needs_newline = false;
        let previous = if path.is_file() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Cannot read output file '{}'", path.display()))?;
            needs_newline = !content.is_empty() && !content.ends_with('\n');
            read_records(Cursor::new(content.as_bytes()), &path)?
        } else {
            Vec::new()
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Cannot open output file '{}' for appending", path.display()))?;

        // A previous run killed mid-line must not glue our first
        // record onto its last one
        if needs_newline {
            file.write_all(b"\n")?;
            file.flush()?;
        }

        tracing::info!(
            "Resumed {} labeled records from '{}'",
            previous.len(),
            path.display()
        );

        Ok((Self { path, file }, previous))
    }

    /// Append one label assignment and flush it to the OS.
    pub fn append(&mut self, record: &Record) -> Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        self.file
            .write_all(line.as_bytes())
            .and_then(|_| self.file.flush())
            .with_context(|| format!("Cannot write label to '{}'", self.path.display()))?;

        tracing::debug!("Appended label line to '{}'", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
