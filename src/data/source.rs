// ============================================================
// Layer 4 — CSV Source
// ============================================================
// Opens the input dataset for reading. The splitter reads the
// file twice (count, then split), so a CsvSource is just the
// path plus the reader settings, and `open` can be called once
// per pass.
//
// Reader settings:
//   - first row is the header
//   - every row must have as many fields as the header
//   - blank lines are skipped (csv crate default)
//
// Reference: csv crate documentation (ReaderBuilder)

use csv::{Reader, ReaderBuilder, StringRecord};
use std::{fs::File, io::Read, path::PathBuf};

use crate::domain::error::StratifyError;

#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open a fresh reader positioned at the start of the file.
    pub fn open(&self) -> Result<Reader<File>, StratifyError> {
        tracing::debug!("Opening '{}'", self.path.display());
        Ok(builder().from_path(&self.path)?)
    }
}

/// Wrap any byte stream with the same settings as a file source.
pub fn reader_from<R: Read>(rdr: R) -> Reader<R> {
    builder().from_reader(rdr)
}

/// Position of `column` in the header row.
pub fn column_index(headers: &StringRecord, column: &str) -> Result<usize, StratifyError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| StratifyError::MissingColumn {
            column: column.to_string(),
        })
}

fn builder() -> ReaderBuilder {
    let mut b = ReaderBuilder::new();
    b.has_headers(true).flexible(false);
    b
}
