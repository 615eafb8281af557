// ============================================================
// Layer 6 — Progress Display
// ============================================================
// A spinner with a running row count for each pass over the
// source. Drawn on stderr, next to the log lines, so stdout
// stays clean for the `plan` table.
//
// The spinner is hidden when stderr is not a terminal, or when
// `set_enabled(false)` was called (the CLI does this for
// --log-file runs).

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

static ENABLED: AtomicBool = AtomicBool::new(true);

pub fn set_enabled(on: bool) {
    ENABLED.store(on, Ordering::Relaxed);
}

/// True if spinners would be drawn right now.
pub fn is_visible() -> bool {
    ENABLED.load(Ordering::Relaxed) && std::io::stderr().is_terminal()
}

/// Unbounded spinner counting rows, labelled with `label`.
pub fn row_spinner(label: &str) -> ProgressBar {
    let target = if is_visible() {
        ProgressDrawTarget::stderr()
    } else {
        ProgressDrawTarget::hidden()
    };

    let pb = ProgressBar::with_draw_target(None, target);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} {human_pos} rows [{elapsed_precise}, {per_sec}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(label.to_string());
    pb
}
