// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits that define what the annotator
// works with: records, operator commands, errors, and the two
// seams (where records come from, who reviews them).
//
// Rules for this layer:
//   - NO terminal I/O
//   - NO file I/O
//   - Only plain structs, enums, and traits
//
// Everything here is testable without a terminal or a disk.

// A schema-free JSON record and its field lookups
pub mod record;

// Commands the operator can issue at each prompt
pub mod command;

// Typed failures that travel inside anyhow::Error
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
