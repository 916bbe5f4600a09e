// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The review loop never touches stdin, stdout, or the input
// file directly. It talks to two traits:
//
//   - RecordSource → where the dataset comes from
//                    (JsonlLoader reads a .jsonl file)
//   - Reviewer     → the human at the other end
//                    (ConsoleReviewer uses the terminal,
//                     tests use a scripted double)
//
// Swapping the Reviewer is what makes the session testable
// without a real terminal.

use anyhow::Result;

use crate::domain::command::{ReviewCommand, TermCommand};
use crate::domain::record::Record;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can load the full dataset up front.
pub trait RecordSource {
    /// Load every record, in source order.
    fn load_all(&self) -> Result<Vec<Record>>;
}

// ─── Reviewer ─────────────────────────────────────────────────────────────────
/// The operator: shown candidates and menus, asked for commands.
///
/// Every `read_*` call blocks until the operator answers.
pub trait Reviewer {
    /// Report the size of a freshly computed candidate pool
    fn show_match_count(&mut self, count: usize) -> Result<()>;

    /// Show one candidate as `field: value` lines
    fn show_record(&mut self, fields: &[(String, String)]) -> Result<()>;

    /// Show progress and the numbered label menu
    fn show_menu(&mut self, labels: &[String], labeled: usize, remaining: usize) -> Result<()>;

    /// Read the next review-prompt command
    fn read_command(&mut self, label_count: usize) -> Result<ReviewCommand>;

    /// Show the numbered term list being edited
    fn show_terms(&mut self, terms: &[String]) -> Result<()>;

    /// Read the next term-editor command
    fn read_term_command(&mut self) -> Result<TermCommand>;

    /// Read the text of a term to add
    fn read_term(&mut self) -> Result<String>;
}
