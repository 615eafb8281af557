// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// The stratification rules themselves, as plain Rust types.
//
// Rules for this layer:
//   - NO file or CSV reading/writing
//   - NO logging or printing
//   - Randomness only through an RNG handed in by the caller
//
// Everything here can be unit tested with a few string slices
// and a seeded RNG.
//
//   FrequencyMap ──(TestRatio)──▶ QuotaPlan ──▶ RowAssigner ──▶ Subset
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

/// Failure taxonomy shared by every layer below the CLI
pub mod error;

/// Validated test ratio in [0, 1]
pub mod ratio;

/// Train/test tag and per-category written counts
pub mod subset;

/// Category occurrence counts
pub mod frequency;

/// Per-category train/test quota allocation
pub mod quota;

/// Per-row train/test decision
pub mod assigner;
