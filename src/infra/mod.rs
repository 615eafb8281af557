// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that are not part of the split itself:
//
//   logging.rs — installs the tracing subscriber (stderr or a
//                per-run log file)
//
//   report.rs  — writes the JSON summary of a finished split
//
//   progress.rs — row-count spinners for the two passes
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Tracing subscriber setup
pub mod logging;

/// JSON run report
pub mod report;

/// Terminal progress spinners
pub mod progress;
