// ============================================================
// Layer 2 — Term Editor
// ============================================================
// A small line-oriented loop for editing one term list
// (either the includes or the excludes):
//
//   Editing ──<n>──▶ remove term n ──▶ Editing
//   Editing ──a────▶ read a term, append ──▶ Editing
//   Editing ──q────▶ return the list
//   Editing ──other▶ Editing (no-op, re-prompt)
//
// Deleting an index past the end of the list changes nothing.
// The loop blocks on the Reviewer for as long as it takes;
// there is no timeout.

use anyhow::Result;

use crate::domain::command::TermCommand;
use crate::domain::traits::Reviewer;

/// Run the editor until the operator quits; return the edited terms.
pub fn edit_terms<R: Reviewer + ?Sized>(mut terms: Vec<String>, reviewer: &mut R) -> Result<Vec<String>> {
    loop {
        reviewer.show_terms(&terms)?;

        match reviewer.read_term_command()? {
            TermCommand::Remove(n) => {
                if n < terms.len() {
                    let removed = terms.remove(n);
                    tracing::debug!("Removed term {:?}", removed);
                }
            }
            TermCommand::Add => {
                let term = reviewer.read_term()?;
                tracing::debug!("Added term {:?}", term);
                terms.push(term);
            }
            TermCommand::Done => return Ok(terms),
            TermCommand::Invalid(input) => {
                tracing::debug!("Ignoring term-editor input {:?}", input);
            }
        }
    }
}
