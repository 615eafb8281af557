// ============================================================
// Layer 4 — Subset Writer
// ============================================================
// Persists routed rows to the train and test outputs.
//
//   RowSink       — what the split pass writes into
//   SubsetWriter  — RowSink over two csv::Writer<W>; W can be a
//                   file or an in-memory Vec<u8> in tests
//   SubsetFiles   — the two output paths: creates the writers
//                   and removes a side the ratio left empty
//
// Both outputs get the input header exactly once, before any row.

use csv::{StringRecord, Terminator, Writer, WriterBuilder};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::error::StratifyError;
use crate::domain::ratio::TestRatio;
use crate::domain::subset::Subset;

/// Destination for rows after they have been assigned a side.
pub trait RowSink {
    fn append(&mut self, subset: Subset, row: &StringRecord) -> Result<(), StratifyError>;
}

pub struct SubsetWriter<W: Write> {
    train:      Writer<W>,
    test:       Writer<W>,
    train_rows: usize,
    test_rows:  usize,
}

impl<W: Write> SubsetWriter<W> {
    /// Wrap two byte sinks and write `columns` as the header of each.
    pub fn new(train: W, test: W, columns: &StringRecord) -> Result<Self, StratifyError> {
        let mut train = csv_writer(train);
        let mut test  = csv_writer(test);
        train.write_record(columns)?;
        test.write_record(columns)?;
        Ok(Self { train, test, train_rows: 0, test_rows: 0 })
    }

    pub fn rows_written(&self, subset: Subset) -> usize {
        match subset {
            Subset::Train => self.train_rows,
            Subset::Test => self.test_rows,
        }
    }

    /// Flush both outputs and hand back the underlying sinks.
    pub fn finish(self) -> Result<(W, W), StratifyError> {
        let train = self.train.into_inner().map_err(|e| e.into_error())?;
        let test  = self.test.into_inner().map_err(|e| e.into_error())?;
        Ok((train, test))
    }
}

impl<W: Write> RowSink for SubsetWriter<W> {
    fn append(&mut self, subset: Subset, row: &StringRecord) -> Result<(), StratifyError> {
        match subset {
            Subset::Train => {
                self.train.write_record(row)?;
                self.train_rows += 1;
            }
            Subset::Test => {
                self.test.write_record(row)?;
                self.test_rows += 1;
            }
        }
        Ok(())
    }
}

/// Both outputs end lines with `\n`, whatever the input used.
fn csv_writer<W: Write>(w: W) -> Writer<W> {
    WriterBuilder::new()
        .delimiter(b',')
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w)
}

/// Paths of the two output files.
#[derive(Debug, Clone)]
pub struct SubsetFiles {
    train: PathBuf,
    test:  PathBuf,
}

impl SubsetFiles {
    pub fn new(train: impl Into<PathBuf>, test: impl Into<PathBuf>) -> Self {
        Self { train: train.into(), test: test.into() }
    }

    pub fn path(&self, subset: Subset) -> &Path {
        match subset {
            Subset::Train => &self.train,
            Subset::Test => &self.test,
        }
    }

    /// Create (or truncate) both files and write their headers.
    pub fn create(
        &self,
        columns: &StringRecord,
    ) -> Result<SubsetWriter<BufWriter<File>>, StratifyError> {
        let train = BufWriter::new(File::create(&self.train)?);
        let test  = BufWriter::new(File::create(&self.test)?);
        tracing::debug!(
            "Writing splits to '{}' and '{}'",
            self.train.display(),
            self.test.display()
        );
        SubsetWriter::new(train, test, columns)
    }

    /// Remove the output a ratio of 0 or 1 leaves without rows.
    ///
    /// Decided from the ratio alone, not from what was written.
    /// Returns the path that was removed, if any.
    pub fn discard_empty(&self, ratio: TestRatio) -> Result<Option<PathBuf>, StratifyError> {
        let empty = if ratio.is_all_train() {
            Subset::Test
        } else if ratio.is_all_test() {
            Subset::Train
        } else {
            return Ok(None);
        };

        let path = self.path(empty);
        if !path.exists() {
            return Ok(None);
        }
        fs::remove_file(path)?;
        tracing::info!("Removed empty {} split '{}'", empty, path.display());
        Ok(Some(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> StringRecord {
        StringRecord::from(vec!["id", "cat"])
    }

    #[test]
    fn test_headers_written_once_then_rows() {
        let mut w = SubsetWriter::new(Vec::new(), Vec::new(), &header()).unwrap();
        w.append(Subset::Train, &StringRecord::from(vec!["1", "a"])).unwrap();
        w.append(Subset::Test, &StringRecord::from(vec!["2", "a"])).unwrap();
        w.append(Subset::Train, &StringRecord::from(vec!["3", "b"])).unwrap();
        assert_eq!(w.rows_written(Subset::Train), 2);
        assert_eq!(w.rows_written(Subset::Test), 1);

        let (train, test) = w.finish().unwrap();
        assert_eq!(String::from_utf8(train).unwrap(), "id,cat\n1,a\n3,b\n");
        assert_eq!(String::from_utf8(test).unwrap(), "id,cat\n2,a\n");
    }

    #[test]
    fn test_fields_needing_quotes_survive() {
        let mut w = SubsetWriter::new(Vec::new(), Vec::new(), &header()).unwrap();
        w.append(Subset::Test, &StringRecord::from(vec!["1", "x,y"])).unwrap();
        let (_, test) = w.finish().unwrap();
        assert_eq!(String::from_utf8(test).unwrap(), "id,cat\n1,\"x,y\"\n");
    }

    #[test]
    fn test_discard_empty_follows_ratio() {
        let dir   = tempfile::tempdir().unwrap();
        let files = SubsetFiles::new(dir.path().join("train.csv"), dir.path().join("test.csv"));
        files.create(&header()).unwrap().finish().unwrap();

        let kept = files.discard_empty(TestRatio::new(0.5).unwrap()).unwrap();
        assert!(kept.is_none());
        assert!(files.path(Subset::Train).exists());
        assert!(files.path(Subset::Test).exists());

        let removed = files.discard_empty(TestRatio::new(0.0).unwrap()).unwrap();
        assert_eq!(removed.as_deref(), Some(files.path(Subset::Test)));
        assert!(!files.path(Subset::Test).exists());
        assert!(files.path(Subset::Train).exists());

        let removed = files.discard_empty(TestRatio::new(1.0).unwrap()).unwrap();
        assert_eq!(removed.as_deref(), Some(files.path(Subset::Train)));
        assert!(!files.path(Subset::Train).exists());
    }
}
