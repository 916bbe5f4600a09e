// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting persistence that the review loop depends on
// but should not implement itself:
//
//   label_store.rs — The output .jsonl file.
//                    Read once at startup to resume a previous
//                    session, then held open in append mode.
//                    Every label is written as one line and
//                    flushed before the next prompt, so killing
//                    the process never loses a confirmed label.
//
// There is no locking: one operator, one process, one file.

/// Append-only, flushed label output and resume loader
pub mod label_store;
