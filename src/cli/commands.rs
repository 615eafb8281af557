// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `split` and `plan`, and their
// arguments.
//
// The positional order matches the classic invocation:
//   stratify-split split data.csv 0.3 device true
//                        file     ratio column shuffle
//
// clap's derive macros generate help text, missing-argument
// errors, and the string → f64/u64 conversions.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::split_use_case::SplitConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a CSV file into train and test files, stratified on one column
    Split(SplitArgs),

    /// Show how many rows per category each side would get, without writing
    Plan(PlanArgs),
}

/// All arguments for the `split` command.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// CSV file to split
    pub file_name: PathBuf,

    /// Fraction of every category that goes to the test set, between 0 and 1
    pub test_size: f64,

    /// Column whose value proportions are preserved in both sets
    pub stratify: String,

    /// Shuffle the sets or not (yes/no, true/false, t/f, y/n, 1/0)
    #[arg(default_value = "false", value_parser = parse_bool, action = clap::ArgAction::Set)]
    pub shuffle: bool,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the train set
    #[arg(long, default_value = "train.csv")]
    pub train_out: PathBuf,

    /// Where to write the test set
    #[arg(long, default_value = "test.csv")]
    pub test_out: PathBuf,

    /// Also write a JSON summary of the split to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Convert CLI SplitArgs into the application-layer SplitConfig.
/// The application layer never sees clap types.
impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            input:           a.file_name,
            stratify_column: a.stratify,
            test_ratio:      a.test_size,
            shuffle:         a.shuffle,
            seed:            a.seed,
            train_out:       a.train_out,
            test_out:        a.test_out,
            report:          a.report,
        }
    }
}

/// All arguments for the `plan` command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// CSV file to inspect
    pub file_name: PathBuf,

    /// Fraction of every category that would go to the test set
    pub test_size: f64,

    /// Column to stratify on
    pub stratify: String,
}

/// Lenient boolean parser for the shuffle flag.
pub fn parse_bool(v: &str) -> Result<bool, String> {
    match v.to_lowercase().as_str() {
        "yes" | "true" | "t" | "y" | "1" => Ok(true),
        "no" | "false" | "f" | "n" | "0" => Ok(false),
        _ => Err("Boolean value expected.".to_string()),
    }
}
