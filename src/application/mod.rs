// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Wires the data, domain and infra layers together for one
// command at a time.
//
// Rules for this layer:
//   - No stratification math here (that's Layer 3)
//   - No CSV parsing here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination and input checks
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Checks on the input file and output paths
pub mod validation;

// The full two-pass split
pub mod split_use_case;

// Count + allocate only, for previewing a split
pub mod plan_use_case;
