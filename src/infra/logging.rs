// ============================================================
// Layer 6 — Logging Setup
// ============================================================
// Installs the global tracing subscriber.
//
// Filter: RUST_LOG if set, plus `stratify_split=info` so the
// pass summaries always show up.
//
// Output goes to stderr by default, keeping stdout free for the
// `plan` table. With --log-file the same lines go to a file that
// is truncated at the start of every run.

use anyhow::{Context, Result};
use std::{fs::File, path::Path, sync::Mutex};
use tracing_subscriber::EnvFilter;

pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("stratify_split=info".parse()?);

    let installed = match log_file {
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create log file '{}'", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| anyhow::anyhow!("Cannot install logger: {e}"))
}
