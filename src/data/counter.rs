// ============================================================
// Layer 4 — Category Counter (first pass)
// ============================================================
// Streams the whole source once and counts how often each value
// of the stratify column appears. Only the counts are kept, never
// the rows, so memory grows with the number of categories and
// not with the size of the file.
//
// Also returns the header row; both output files reuse it so the
// column order never changes.

use csv::{Reader, StringRecord};
use std::io::Read;

use crate::data::source::column_index;
use crate::domain::error::StratifyError;
use crate::domain::frequency::FrequencyMap;
use crate::infra::progress;

/// Everything the first pass learns about the source.
#[derive(Debug, Clone)]
pub struct CategoryCount {
    /// Header row, in input order
    pub columns: StringRecord,

    /// Position of the stratify column within `columns`
    pub column_index: usize,

    pub frequencies: FrequencyMap,
}

impl CategoryCount {
    pub fn rows(&self) -> usize {
        self.frequencies.total()
    }
}

pub struct CategoryCounter {
    column: String,
}

impl CategoryCounter {
    pub fn new(column: impl Into<String>) -> Self {
        Self { column: column.into() }
    }

    pub fn count<R: Read>(&self, reader: &mut Reader<R>) -> Result<CategoryCount, StratifyError> {
        let columns = reader.headers()?.clone();
        let index   = column_index(&columns, &self.column)?;

        let mut frequencies = FrequencyMap::new();
        let mut record      = StringRecord::new();
        let pb              = progress::row_spinner("Counting");

        while reader.read_record(&mut record)? {
            let category = record.get(index).ok_or_else(|| StratifyError::MissingColumn {
                column: self.column.clone(),
            })?;
            frequencies.observe(category);
            pb.inc(1);
        }
        pb.finish_and_clear();

        if frequencies.is_empty() {
            return Err(StratifyError::EmptySource);
        }

        tracing::info!(
            "Counted {} rows across {} categories of '{}'",
            frequencies.total(),
            frequencies.len(),
            self.column,
        );

        Ok(CategoryCount {
            columns,
            column_index: index,
            frequencies,
        })
    }
}
