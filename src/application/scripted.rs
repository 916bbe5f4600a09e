// Test double for the Reviewer trait: answers prompts from a
// fixed script and records everything it was asked to show.
// Running out of script behaves like end of input on stdin.

use std::collections::VecDeque;

use anyhow::{bail, Result};

use crate::domain::command::{ReviewCommand, TermCommand};
use crate::domain::traits::Reviewer;

#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    MatchCount(usize),
    Record(Vec<(String, String)>),
    Menu { labeled: usize, remaining: usize },
    Terms(Vec<String>),
}

pub struct ScriptedReviewer {
    inputs: VecDeque<String>,
    pub shown: Vec<Shown>,
}

impl ScriptedReviewer {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            shown:  Vec::new(),
        }
    }

    pub fn count_shown(&self, kind: &str) -> usize {
        self.shown
            .iter()
            .filter(|s| match s {
                Shown::MatchCount(_) => kind == "match_count",
                Shown::Record(_)     => kind == "record",
                Shown::Menu { .. }   => kind == "menu",
                Shown::Terms(_)      => kind == "terms",
            })
            .count()
    }

    pub fn match_counts(&self) -> Vec<usize> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::MatchCount(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    /// The value of `field` for every record shown, in order.
    pub fn shown_values(&self, field: &str) -> Vec<String> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Record(fields) => fields
                    .iter()
                    .find(|(f, _)| f == field)
                    .map(|(_, v)| v.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Reviewer for ScriptedReviewer {
    fn show_match_count(&mut self, count: usize) -> Result<()> {
        self.shown.push(Shown::MatchCount(count));
        Ok(())
    }

    fn show_record(&mut self, fields: &[(String, String)]) -> Result<()> {
        self.shown.push(Shown::Record(fields.to_vec()));
        Ok(())
    }

    fn show_menu(&mut self, _labels: &[String], labeled: usize, remaining: usize) -> Result<()> {
        self.shown.push(Shown::Menu { labeled, remaining });
        Ok(())
    }

    fn read_command(&mut self, label_count: usize) -> Result<ReviewCommand> {
        Ok(match self.inputs.pop_front() {
            Some(line) => ReviewCommand::parse(&line, label_count),
            None       => ReviewCommand::Quit,
        })
    }

    fn show_terms(&mut self, terms: &[String]) -> Result<()> {
        self.shown.push(Shown::Terms(terms.to_vec()));
        Ok(())
    }

    fn read_term_command(&mut self) -> Result<TermCommand> {
        Ok(match self.inputs.pop_front() {
            Some(line) => TermCommand::parse(&line),
            None       => TermCommand::Done,
        })
    }

    fn read_term(&mut self) -> Result<String> {
        match self.inputs.pop_front() {
            Some(line) => Ok(line),
            None       => bail!("input closed while reading a term"),
        }
    }
}
