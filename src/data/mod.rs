// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything that touches CSV bytes. The pipeline reads the
// source twice and never holds more than one row in memory:
//
//   input.csv
//       │
//       ▼
//   CategoryCounter    → pass 1: category frequencies + header
//       │
//       ▼
//   QuotaPlan          → (domain layer) train/test quotas
//       │
//       ▼
//   split_stratified   → pass 2: route each row via RowAssigner
//       │
//       ▼
//   SubsetWriter       → train.csv / test.csv
//
// Each stage is generic over Read/Write so the tests run on
// in-memory byte slices.
//
// Reference: csv crate documentation
//            Rust Book §13 (Iterators and Closures)

/// Opens the input CSV with the shared reader settings
pub mod source;

/// First pass: counts stratify-column values
pub mod counter;

/// Output sinks for the two subsets
pub mod writer;

/// Second pass: streams rows into train/test
pub mod splitter;
