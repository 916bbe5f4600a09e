// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction:
//   - `commands.rs` parses the flags (clap)
//   - `terminal.rs` renders records and menus and reads the
//                 operator's answers from the terminal
//
// All session logic is delegated to Layer 2 (application).

pub mod commands;
pub mod terminal;

use anyhow::Result;
use clap::Parser;
use terminal::ConsoleReviewer;
use std::io;

use crate::application::annotate_use_case::{AnnotateUseCase, SessionConfig, SessionEnd};
use commands::AnnotateArgs;

/// Annotate line-delimited JSON records with labels, one at a time.
#[derive(Parser, Debug)]
#[command(
    name = "json-annotate",
    version,
    about = "Annotate line-delimited JSON records with classification labels."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: AnnotateArgs,
}

impl Cli {
    /// Build the session config, load the data, and hand the
    /// terminal to the review loop.
    pub fn run(self) -> Result<()> {
        let config: SessionConfig = self.args.into();
        config.validate()?;

        tracing::info!(
            "Annotating '{}' into '{}' (labels={:?}, seed={})",
            config.input.display(),
            config.output.display(),
            config.labels,
            config.seed
        );

        let use_case = AnnotateUseCase::new(config);
        let dataset = use_case.load()?;
        println!(
            "read {} json objects from {}",
            dataset.len(),
            use_case.config().input.display()
        );

        let stdin = io::stdin();
        let mut reviewer = ConsoleReviewer::new(stdin.lock(), io::stdout());
        let summary = use_case.run(dataset, &mut reviewer)?;

        match summary.end {
            SessionEnd::Exhausted => println!(
                "no more matches. labeled {} this session, {} total",
                summary.labeled_now, summary.labeled_total
            ),
            SessionEnd::Quit => println!(
                "labeled {} this session, {} total",
                summary.labeled_now, summary.labeled_total
            ),
        }
        Ok(())
    }
}
