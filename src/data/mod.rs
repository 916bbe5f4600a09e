// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the input file and the candidate pool:
//
//   input .jsonl
//       │
//       ▼
//   JsonlLoader      → one Record per line
//       │
//       ▼
//   shuffle_records  → seeded, once per session
//       │
//       ▼
//   MatchFilter      → drops labeled ids, applies include /
//       │              exclude terms via TermMatcher
//       ▼
//   candidate pool
//
// Each module does exactly one step and is tested on its own.

/// Reads newline-delimited JSON into Records
pub mod loader;

/// Case-insensitive substring term matching
pub mod matcher;

/// Builds the candidate pool from the dataset
pub mod filter;

/// Seeded one-time shuffle of the working dataset
pub mod shuffle;
