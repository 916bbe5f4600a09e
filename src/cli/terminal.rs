// ============================================================
// Layer 1 — Terminal Reviewer
// ============================================================
// The terminal implementation of the Reviewer trait.
//
// Screen for one candidate:
//
//   text: Storm expected tonight
//   labeled 12. 40 remain              ← green
//   0: weather                         ← index in blue
//   1: other
//   (q)uit,    edit (i)ncludes,    edit (e)xcludes
//   $:                                 ← blue prompt
//
// Generic over the reader and writer so tests can drive it
// with in-memory buffers. End of input counts as "quit" at
// both prompts.

use anyhow::{bail, Context, Result};
use console::style;
use std::io::{BufRead, Write};

use crate::domain::command::{ReviewCommand, TermCommand};
use crate::domain::traits::Reviewer;

pub struct ConsoleReviewer<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleReviewer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` without a newline and read one line.
    /// Returns None at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Cannot read from stdin")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Reviewer for ConsoleReviewer<R, W> {
    fn show_match_count(&mut self, count: usize) -> Result<()> {
        writeln!(self.output, "found {count} matches")?;
        Ok(())
    }

    fn show_record(&mut self, fields: &[(String, String)]) -> Result<()> {
        for (field, value) in fields {
            writeln!(self.output, "{field}: {value}")?;
        }
        Ok(())
    }

    fn show_menu(&mut self, labels: &[String], labeled: usize, remaining: usize) -> Result<()> {
        writeln!(
            self.output,
            "{}",
            style(format!("labeled {labeled}. {remaining} remain")).green()
        )?;
        for (i, label) in labels.iter().enumerate() {
            writeln!(self.output, "{}: {}", style(i).blue(), label)?;
        }
        writeln!(
            self.output,
            "{}uit,    edit {}ncludes,    edit {}xcludes",
            style("(q)").blue(),
            style("(i)").blue(),
            style("(e)").blue(),
        )?;
        Ok(())
    }

    fn read_command(&mut self, label_count: usize) -> Result<ReviewCommand> {
        let prompt = style("$:").blue().to_string();
        Ok(match self.prompt(&prompt)? {
            Some(line) => ReviewCommand::parse(&line, label_count),
            None => {
                writeln!(self.output)?;
                ReviewCommand::Quit
            }
        })
    }

    fn show_terms(&mut self, terms: &[String]) -> Result<()> {
        for (i, term) in terms.iter().enumerate() {
            writeln!(self.output, "{i}:{term}")?;
        }
        writeln!(self.output, "(a)dd term, or enter number to delete, or (q)uit")?;
        Ok(())
    }

    fn read_term_command(&mut self) -> Result<TermCommand> {
        Ok(match self.prompt("$:")? {
            Some(line) => TermCommand::parse(&line),
            None       => TermCommand::Done,
        })
    }

    fn read_term(&mut self) -> Result<String> {
        match self.prompt("enter term:")? {
            Some(term) => Ok(term),
            None       => bail!("stdin closed while reading a term"),
        }
    }
}
