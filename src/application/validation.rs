// ============================================================
// Layer 2 — Input Validation
// ============================================================
// Checks run before any pass touches the data, so the core can
// assume a readable, non-empty CSV that has the stratify column.
//
// Checks, in order:
//   1. file exists and can be opened
//   2. file name ends in .csv
//   3. file is not zero bytes
//   4. file has at least one row after the header
//   5. stratify column is in the header
//
// Output paths are checked separately: the two outputs must be
// different files and neither may be the input, which the split
// pass still has to read after the outputs are created.
//
// Each failure gets its own message so the user knows what to fix.

use anyhow::{bail, Context, Result};
use csv::StringRecord;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::source::{column_index, CsvSource};

/// Validate the source file and the stratify column name.
pub fn validate_source(path: &Path, stratify_column: &str) -> Result<()> {
    let meta = fs::metadata(path)
        .with_context(|| format!("File {} not found", path.display()))?;
    fs::File::open(path)
        .with_context(|| format!("OS error occurred trying to open {}", path.display()))?;

    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "csv")
        .unwrap_or(false);
    if !is_csv {
        bail!("invalid format, '{}' needs to be a csv file", path.display());
    }

    if meta.len() == 0 {
        bail!("File {} is empty", path.display());
    }

    let source  = CsvSource::new(path);
    let mut rdr = source.open()?;
    let headers = rdr.headers()?.clone();

    let mut first = StringRecord::new();
    if !rdr.read_record(&mut first)? {
        bail!("CSV file {} got no entries", path.display());
    }

    if column_index(&headers, stratify_column).is_err() {
        bail!(
            "stratify column name is invalid, the input column name: {} is not in the file",
            stratify_column
        );
    }

    tracing::debug!("Validated '{}' ({} columns)", path.display(), headers.len());
    Ok(())
}

/// Reject output paths that would clobber the input or each other.
pub fn validate_outputs(input: &Path, train: &Path, test: &Path) -> Result<()> {
    if same_file(train, test) {
        bail!("train and test outputs are the same file '{}'", train.display());
    }
    for out in [train, test] {
        if same_file(input, out) {
            bail!("output '{}' would overwrite the input file", out.display());
        }
    }
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    resolve(a) == resolve(b)
}

/// Absolute form of `path`. An output that does not exist yet is
/// resolved through its parent directory, so `sub/../out.csv` and
/// `out.csv` compare equal before either file is created.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(full) = fs::canonicalize(path) {
        return full;
    }
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}
