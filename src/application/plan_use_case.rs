// ============================================================
// Layer 2 — PlanUseCase
// ============================================================
// Dry run of a split: counts the categories and allocates the
// quotas, then reports how many rows of each category would go
// to train and to test. No output file is created.
//
// Runs the same validation and the same single-entry check as a
// real split, so a plan that succeeds means the split will too.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::application::validation::validate_source;
use crate::data::{counter::CategoryCounter, source::CsvSource};
use crate::domain::{
    quota::{PlanLine, QuotaPlan},
    ratio::TestRatio,
    subset::Subset,
};

#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    pub rows:       usize,
    pub train_rows: usize,
    pub test_rows:  usize,
    pub lines:      Vec<PlanLine>,
}

pub struct PlanUseCase {
    input:           PathBuf,
    stratify_column: String,
    test_ratio:      f64,
}

impl PlanUseCase {
    pub fn new(input: impl Into<PathBuf>, stratify_column: impl Into<String>, test_ratio: f64) -> Self {
        Self {
            input:           input.into(),
            stratify_column: stratify_column.into(),
            test_ratio,
        }
    }

    pub fn execute(&self) -> Result<PlanSummary> {
        let ratio = TestRatio::new(self.test_ratio)?;
        validate_source(&self.input, &self.stratify_column)?;

        let count = CategoryCounter::new(&self.stratify_column)
            .count(&mut CsvSource::new(&self.input).open()?)
            .with_context(|| format!("Failed counting categories in '{}'", self.input.display()))?;
        let plan = QuotaPlan::allocate(&count.frequencies, ratio)?;

        Ok(PlanSummary {
            rows:       count.rows(),
            train_rows: plan.total(Subset::Train),
            test_rows:  plan.total(Subset::Test),
            lines:      plan.lines(),
        })
    }
}
