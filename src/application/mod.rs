// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers into one annotation session.
//
// Rules for this layer:
//   - No terminal code here (that's Layer 1, behind Reviewer)
//   - No file parsing here (that's Layer 4 and 6)
//   - Only workflow coordination: shuffle, filter, prompt,
//     persist, re-filter
//
// Reference: Clean Architecture pattern

// The session: load, shuffle, filter, review, persist
pub mod annotate_use_case;

// Interactive editing of include / exclude term lists
pub mod term_editor;

// Scripted Reviewer used by the session and editor tests
#[cfg(test)]
pub(crate) mod scripted;
