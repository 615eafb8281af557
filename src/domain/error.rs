// ============================================================
// Layer 3 — Stratification Errors
// ============================================================
// Every failure the core can produce. Components below the
// application layer return these as values and never print;
// the CLI decides how to present them.
//
// All of them are fatal: a run either writes both subsets
// completely or is reported as failed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StratifyError {
    /// One or more categories occur exactly once and cannot be split.
    /// Detected before any output file is opened.
    #[error("cannot stratify categories with only 1 entry: {}", categories.join(", "))]
    SingleEntryCategory { categories: Vec<String> },

    /// The stratify column is not in the header, or a row is too short
    /// to contain it.
    #[error("stratify column '{column}' is not in the file")]
    MissingColumn { column: String },

    /// The source has a header but no data rows.
    #[error("CSV file got no entries")]
    EmptySource,

    /// Ratio outside [0, 1] or not a number.
    #[error("invalid ratio {0}: must be between 0 and 1")]
    InvalidRatio(f64),

    /// A category appeared in the split pass that the counting pass
    /// never saw. Only possible if the source changed between passes.
    #[error("category '{category}' was not seen while counting")]
    UnknownCategory { category: String },

    /// Both quotas of a category were already zero when another row of
    /// it arrived. Unreachable while the counting pass and the split pass
    /// read the same rows.
    #[error("train and test quotas for category '{category}' are both exhausted")]
    QuotaExhausted { category: String },

    /// The split pass reached the end of the source with quota left over.
    #[error("source ended with {remaining} rows still unassigned; did the file change?")]
    IncompletePass { remaining: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
