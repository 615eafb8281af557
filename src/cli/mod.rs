// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, hands off to Layer 2, and prints the outcome. This is
// the only layer that writes to stdout.
//
// Two commands are supported:
//   1. `split` — writes train.csv and test.csv
//   2. `plan`  — prints per-category sizes, writes nothing
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PlanArgs, SplitArgs};
use std::path::PathBuf;

use crate::application::plan_use_case::PlanSummary;

/// The main CLI struct.
#[derive(Parser, Debug)]
#[command(
    name = "stratify-split",
    version,
    about = "Split a CSV file into train and test sets, stratified on one column."
)]
pub struct Cli {
    /// Write log lines to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// The subcommand to run (split or plan)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Split(args) => run_split(args),
            Commands::Plan(args) => run_plan(args),
        }
    }
}

fn run_split(args: SplitArgs) -> Result<()> {
    use crate::application::split_use_case::SplitUseCase;

    let report = SplitUseCase::new(args.into()).execute()?;

    let cfg = &report.config;
    for (side, path) in [("train", &cfg.train_out), ("test", &cfg.test_out)] {
        if report.discarded.as_ref() == Some(path) {
            println!("{side}: no rows at ratio {}, '{}' removed", cfg.test_ratio, path.display());
        } else {
            let rows = if side == "train" { report.train_rows } else { report.test_rows };
            println!("{side}: {rows} rows → {}", path.display());
        }
    }
    Ok(())
}

fn run_plan(args: PlanArgs) -> Result<()> {
    use crate::application::plan_use_case::PlanUseCase;

    let summary = PlanUseCase::new(args.file_name, args.stratify, args.test_size).execute()?;
    print!("{}", render_plan(&summary));
    Ok(())
}

/// Fixed-width table of a plan, one line per category plus a total.
fn render_plan(summary: &PlanSummary) -> String {
    let width = summary
        .lines
        .iter()
        .map(|l| l.category.chars().count())
        .chain(std::iter::once("category".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<width$}  {:>8}  {:>8}  {:>8}\n", "category", "total", "train", "test");
    for l in &summary.lines {
        out.push_str(&format!(
            "{:<width$}  {:>8}  {:>8}  {:>8}\n",
            l.category, l.total, l.train, l.test
        ));
    }
    out.push_str(&format!(
        "{:<width$}  {:>8}  {:>8}  {:>8}\n",
        "TOTAL", summary.rows, summary.train_rows, summary.test_rows
    ));
    out
}
