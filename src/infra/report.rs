// ============================================================
// Layer 6 — Run Report
// ============================================================
// Saves a JSON summary of a finished split: the configuration
// it ran with and how many rows of each category went where.
//
// Example output:
//   {
//     "config": { "input": "data.csv", "test_ratio": 0.25, ... },
//     "mode": "deterministic",
//     "rows": 12,
//     "train_rows": 9,
//     "test_rows": 3,
//     "written": { "categories": { "A": { "train": 6, "test": 2 }, ... } },
//     ...
//   }
//
// Reference: serde_json documentation

use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};

/// Write `value` as pretty-printed JSON to `path`.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
    }

    fs::write(path, json)
        .with_context(|| format!("Cannot write report to '{}'", path.display()))?;

    tracing::debug!("Saved report to '{}'", path.display());
    Ok(())
}
