// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Orchestrates a full stratified split:
//
//   Step 1: Validate ratio, source and output paths
//   Step 2: Count categories               (Layer 4 - data, pass 1)
//   Step 3: Allocate train/test quotas     (Layer 3 - domain)
//   Step 4: Create output files + headers  (Layer 4 - data)
//   Step 5: Route every row                (Layer 4 - data, pass 2)
//   Step 6: Remove a side left empty       (Layer 4 - data)
//   Step 7: Save the JSON report           (Layer 6 - infra)
//
// Nothing is written before step 4, so a category with a single
// entry (step 3) aborts with no output files at all.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::validation::{validate_outputs, validate_source};
use crate::data::{
    counter::CategoryCounter,
    source::CsvSource,
    splitter::split_stratified,
    writer::SubsetFiles,
};
use crate::domain::{
    assigner::{AssignMode, RowAssigner},
    quota::QuotaPlan,
    ratio::TestRatio,
    subset::{Subset, SubsetTally},
};
use crate::infra::report::save_json;

// ─── Split Configuration ─────────────────────────────────────────────────────
// Everything one run needs. Serialisable so the report can
// record exactly what produced the output files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub input:           PathBuf,
    pub stratify_column: String,
    pub test_ratio:      f64,
    pub shuffle:         bool,
    pub seed:            Option<u64>,
    pub train_out:       PathBuf,
    pub test_out:        PathBuf,
    pub report:          Option<PathBuf>,
}

// ─── Split Report ─────────────────────────────────────────────────────────────
/// Outcome of a finished split.
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub config:     SplitConfig,
    pub mode:       AssignMode,
    pub rows:       usize,
    pub train_rows: usize,
    pub test_rows:  usize,
    pub written:    SubsetTally,

    /// Output the ratio left empty and that was removed, if any
    pub discarded:  Option<PathBuf>,
}

pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<SplitReport> {
        let cfg = &self.config;

        // ── Step 1: Validate ──────────────────────────────────────────────────
        let ratio = TestRatio::new(cfg.test_ratio)?;
        validate_source(&cfg.input, &cfg.stratify_column)?;
        validate_outputs(&cfg.input, &cfg.train_out, &cfg.test_out)?;

        // ── Step 2: First pass ────────────────────────────────────────────────
        tracing::info!("Opening '{}'", cfg.input.display());
        let source = CsvSource::new(&cfg.input);
        let count  = CategoryCounter::new(&cfg.stratify_column)
            .count(&mut source.open()?)
            .with_context(|| format!("Failed counting categories in '{}'", cfg.input.display()))?;

        // ── Step 3: Quotas ────────────────────────────────────────────────────
        tracing::debug!("Allocating quotas at test ratio {}", ratio);
        let plan = QuotaPlan::allocate(&count.frequencies, ratio)?;
        tracing::info!(
            "Finished reading the file: {} rows planned for train, {} for test",
            plan.total(Subset::Train),
            plan.total(Subset::Test),
        );

        // ── Step 4: Outputs ───────────────────────────────────────────────────
        let files      = SubsetFiles::new(&cfg.train_out, &cfg.test_out);
        let mut writer = files.create(&count.columns)?;

        // ── Step 5: Second pass ───────────────────────────────────────────────
        let mode         = AssignMode::from(cfg.shuffle);
        let mut assigner = RowAssigner::new(plan, mode);
        let mut rng      = build_rng(cfg.seed);
        if mode == AssignMode::Shuffle {
            tracing::info!("Shuffling the splits");
        }

        let written = split_stratified(
            &mut source.open()?,
            count.column_index,
            &mut assigner,
            &mut writer,
            &mut rng,
        )
        .with_context(|| format!("Failed splitting '{}'", cfg.input.display()))?;
        tracing::debug!(
            "Wrote {} train rows and {} test rows",
            writer.rows_written(Subset::Train),
            writer.rows_written(Subset::Test),
        );
        writer.finish()?;

        // ── Step 6: Cleanup ───────────────────────────────────────────────────
        let discarded = files.discard_empty(ratio)?;
        tracing::info!("Finished, splits created as files");

        let report = SplitReport {
            config: cfg.clone(),
            mode,
            rows: count.rows(),
            train_rows: written.train_rows(),
            test_rows: written.test_rows(),
            written,
            discarded,
        };

        // ── Step 7: Report ────────────────────────────────────────────────────
        if let Some(path) = &cfg.report {
            save_json(path, &report)?;
        }

        Ok(report)
    }
}

/// Seeded when a seed is given, otherwise from OS entropy.
fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    struct Fixture {
        dir: tempfile::TempDir,
    }

    impl Fixture {
        fn new(rows: &[&str]) -> Self {
            let dir = tempfile::tempdir().unwrap();
            let mut body = String::from("id,device,value\n");
            for (i, d) in rows.iter().enumerate() {
                body.push_str(&format!("{i},{d},{}\n", i * 10));
            }
            fs::write(dir.path().join("data.csv"), body).unwrap();
            Self { dir }
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn config(&self, ratio: f64, shuffle: bool) -> SplitConfig {
            SplitConfig {
                input:           self.path("data.csv"),
                stratify_column: "device".into(),
                test_ratio:      ratio,
                shuffle,
                seed:            Some(7),
                train_out:       self.path("train.csv"),
                test_out:        self.path("test.csv"),
                report:          None,
            }
        }
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    const TWELVE: [&str; 12] = [
        "A", "B", "A", "A", "B", "A", "A", "B", "A", "A", "B", "A",
    ];

    #[test]
    fn test_quarter_split_writes_both_files() {
        let fx     = Fixture::new(&TWELVE);
        let report = SplitUseCase::new(fx.config(0.25, false)).execute().unwrap();

        assert_eq!(report.rows, 12);
        assert_eq!(report.train_rows, 9);
        assert_eq!(report.test_rows, 3);
        assert!(report.discarded.is_none());

        let test = read(&fx.path("test.csv"));
        assert_eq!(test, "id,device,value\n9,A,90\n10,B,100\n11,A,110\n");
        assert!(read(&fx.path("train.csv")).starts_with("id,device,value\n0,A,0\n"));
    }

    #[test]
    fn test_single_entry_aborts_before_any_output() {
        let rows = ["A", "A", "A", "A", "A", "A", "B", "B", "B", "C"];
        let fx   = Fixture::new(&rows);
        let err  = SplitUseCase::new(fx.config(0.5, false)).execute().unwrap_err();

        assert!(err.to_string().contains("only 1 entry"));
        assert!(!fx.path("train.csv").exists());
        assert!(!fx.path("test.csv").exists());
    }

    #[test]
    fn test_ratio_zero_removes_test_file() {
        let fx     = Fixture::new(&TWELVE);
        let report = SplitUseCase::new(fx.config(0.0, true)).execute().unwrap();

        assert_eq!(report.discarded, Some(fx.path("test.csv")));
        assert!(!fx.path("test.csv").exists());
        assert_eq!(read(&fx.path("train.csv")), read(&fx.path("data.csv")));
    }

    #[test]
    fn test_ratio_one_removes_train_file() {
        let fx = Fixture::new(&TWELVE);
        SplitUseCase::new(fx.config(1.0, false)).execute().unwrap();

        assert!(!fx.path("train.csv").exists());
        assert_eq!(read(&fx.path("test.csv")), read(&fx.path("data.csv")));
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let fx = Fixture::new(&TWELVE);
        SplitUseCase::new(fx.config(0.5, true)).execute().unwrap();
        let first = (read(&fx.path("train.csv")), read(&fx.path("test.csv")));

        SplitUseCase::new(fx.config(0.5, true)).execute().unwrap();
        let second = (read(&fx.path("train.csv")), read(&fx.path("test.csv")));
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let fx  = Fixture::new(&TWELVE);
        let err = SplitUseCase::new(fx.config(1.2, false)).execute().unwrap_err();
        assert!(err.to_string().contains("between 0 and 1"));
    }

    #[test]
    fn test_aliased_outputs_rejected_before_writing() {
        let fx = Fixture::new(&TWELVE);
        fs::create_dir(fx.path("sub")).unwrap();

        let mut cfg   = fx.config(0.5, false);
        cfg.train_out = fx.path("out.csv");
        cfg.test_out  = fx.path("sub").join("..").join("out.csv");
        let err = SplitUseCase::new(cfg).execute().unwrap_err();

        assert!(err.to_string().contains("are the same file"));
        assert!(!fx.path("out.csv").exists());
    }

    #[test]
    fn test_report_is_saved() {
        let fx      = Fixture::new(&TWELVE);
        let mut cfg = fx.config(0.25, true);
        cfg.report  = Some(fx.path("report.json"));
        SplitUseCase::new(cfg).execute().unwrap();

        let v: serde_json::Value = serde_json::from_str(&read(&fx.path("report.json"))).unwrap();
        assert_eq!(v["mode"], "shuffle");
        assert_eq!(v["test_rows"], 3);
        assert_eq!(v["written"]["categories"]["A"]["test"], 2);
        assert_eq!(v["written"]["categories"]["B"]["train"], 3);
        assert_eq!(v["config"]["stratify_column"], "device");
    }
}
