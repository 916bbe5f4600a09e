// ============================================================
// Layer 2 — AnnotateUseCase
// ============================================================
// Runs one annotation session end to end:
//
//   Step 1: Load the dataset              (Layer 4 - data)
//   Step 2: Shuffle a working copy once   (Layer 4 - data)
//   Step 3: Resume prior labels           (Layer 6 - infra)
//   Step 4: Build the candidate pool      (Layer 4 - data)
//   Step 5: Review loop until the pool is empty or the
//           operator quits                (Layer 1 via Reviewer)
//
// The pool is consumed from its END, like a stack: the record
// shown next is the last one in shuffled-and-filtered order.
// This changes which record comes next, never which records
// are eventually offered.
//
// After any term edit the pool is rebuilt from scratch from the
// shuffled dataset, skipping every record labeled so far
// (resumed or from this session).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, mem, path::PathBuf};

use crate::application::term_editor::edit_terms;
use crate::data::{
    filter::MatchFilter,
    loader::JsonlLoader,
    shuffle::{seeded_rng, shuffle_records},
};
use crate::domain::{
    command::ReviewCommand,
    error::AnnotateError,
    record::Record,
    traits::{RecordSource, Reviewer},
};
use crate::infra::label_store::LabelStore;

// ─── Session Configuration ───────────────────────────────────────────────────
// Everything a session needs to know, independent of clap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub input:          PathBuf,
    pub output:         PathBuf,
    pub display_fields: Vec<String>,
    pub search_fields:  Vec<String>,
    pub labels:         Vec<String>,
    pub id_field:       String,
    pub include_terms:  Vec<String>,
    pub exclude_terms:  Vec<String>,
    pub label_name:     String,
    pub seed:           u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            input:          PathBuf::new(),
            output:         PathBuf::new(),
            display_fields: Vec::new(),
            search_fields:  Vec::new(),
            labels:         Vec::new(),
            id_field:       String::new(),
            include_terms:  Vec::new(),
            exclude_terms:  Vec::new(),
            label_name:     "label".to_string(),
            seed:           42,
        }
    }
}

impl SessionConfig {
    /// Reject configurations that could never label anything.
    pub fn validate(&self) -> Result<(), AnnotateError> {
        let required = [
            ("--labels", self.labels.is_empty()),
            ("--search-fields", self.search_fields.is_empty()),
            ("--display-fields", self.display_fields.is_empty()),
            ("--id-field", self.id_field.is_empty()),
            ("--label-name", self.label_name.is_empty()),
        ];
        for (flag, missing) in required {
            if missing {
                return Err(AnnotateError::Configuration(format!("{flag} must not be empty")));
            }
        }
        Ok(())
    }
}

// ─── Session Outcome ─────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every matching unlabeled record was offered
    Exhausted,
    /// The operator entered `q`
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub end:               SessionEnd,
    /// Labels written during this session
    pub labeled_now:       usize,
    /// Resumed plus new labels
    pub labeled_total:     usize,
}

// ─── AnnotateUseCase ─────────────────────────────────────────────────────────
pub struct AnnotateUseCase {
    config: SessionConfig,
}

impl AnnotateUseCase {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Load the full dataset from the configured input file.
    pub fn load(&self) -> Result<Vec<Record>> {
        JsonlLoader::new(&self.config.input).load_all()
    }

    /// Run the review loop over `dataset` until exhaustion or quit.
    pub fn run<R: Reviewer + ?Sized>(&self, dataset: Vec<Record>, reviewer: &mut R) -> Result<SessionSummary> {
        Session::start(dataset, &self.config)?.run(reviewer)
    }
}

// ─── Session ─────────────────────────────────────────────────────────────────
// All mutable state of one run lives here; nothing is global.
struct Session<'a> {
    config:      &'a SessionConfig,
    filter:      MatchFilter,
    dataset:     Vec<Record>,
    includes:    Vec<String>,
    excludes:    Vec<String>,
    store:       LabelStore,
    labeled:     Vec<Record>,
    labeled_ids: HashSet<String>,
    labeled_now: usize,
    pool:        Vec<Record>,
}

impl<'a> Session<'a> {
    fn start(mut dataset: Vec<Record>, config: &'a SessionConfig) -> Result<Self> {
        // ── Step 2: Shuffle once ──────────────────────────────────────────────
        shuffle_records(&mut dataset, &mut seeded_rng(config.seed));

        // ── Step 3: Resume from the output file ──────────────────────────────
        let (store, labeled) = LabelStore::open(&config.output)?;
        let filter = MatchFilter::new(config.search_fields.clone(), config.id_field.clone());
        let labeled_ids = filter.labeled_ids(&labeled)?;

        Ok(Self {
            config,
            filter,
            dataset,
            includes: config.include_terms.clone(),
            excludes: config.exclude_terms.clone(),
            store,
            labeled,
            labeled_ids,
            labeled_now: 0,
            pool: Vec::new(),
        })
    }

    fn run<R: Reviewer + ?Sized>(mut self, reviewer: &mut R) -> Result<SessionSummary> {
        // ── Step 4: Initial candidate pool ───────────────────────────────────
        self.refilter(reviewer)?;

        // ── Step 5: Review loop ──────────────────────────────────────────────
        while let Some(record) = self.pool.pop() {
            let display = self.display_lines(&record)?;

            loop {
                reviewer.show_record(&display)?;
                reviewer.show_menu(&self.config.labels, self.labeled.len(), self.pool.len())?;

                match reviewer.read_command(self.config.labels.len())? {
                    ReviewCommand::Label(n) => {
                        self.commit(record, n)?;
                        break;
                    }
                    ReviewCommand::EditIncludes => {
                        self.includes = edit_terms(mem::take(&mut self.includes), reviewer)?;
                        self.refilter(reviewer)?;
                        break;
                    }
                    ReviewCommand::EditExcludes => {
                        self.excludes = edit_terms(mem::take(&mut self.excludes), reviewer)?;
                        self.refilter(reviewer)?;
                        break;
                    }
                    ReviewCommand::Quit => {
                        tracing::info!("Operator quit with {} records remaining", self.pool.len() + 1);
                        return Ok(self.summary(SessionEnd::Quit));
                    }
                    ReviewCommand::Invalid(input) => {
                        tracing::debug!("Ignoring review input {:?}", input);
                    }
                }
            }
        }

        tracing::info!("Candidate pool exhausted");
        Ok(self.summary(SessionEnd::Exhausted))
    }

    /// Rebuild the pool from the shuffled dataset and current terms.
    fn refilter<R: Reviewer + ?Sized>(&mut self, reviewer: &mut R) -> Result<()> {
        self.pool = self.filter.candidates(
            &self.dataset,
            &self.includes,
            &self.excludes,
            &self.labeled_ids,
        )?;
        tracing::info!(
            "Found {} matches (includes={:?}, excludes={:?})",
            self.pool.len(),
            self.includes,
            self.excludes
        );
        reviewer.show_match_count(self.pool.len())
    }

    /// Persist one label, then remember it in memory.
    fn commit(&mut self, record: Record, label_idx: usize) -> Result<()> {
        let label = &self.config.labels[label_idx];
        let id = record.id_key(self.filter.id_field())?;
        let labeled = record.with_label(&self.config.label_name, label);

        // Written and flushed before the in-memory state moves on
        self.store.append(&labeled)?;

        tracing::debug!("Labeled id {} as {:?}", id, label);
        self.labeled_ids.insert(id);
        self.labeled.push(labeled);
        self.labeled_now += 1;
        Ok(())
    }

    fn display_lines(&self, record: &Record) -> Result<Vec<(String, String)>> {
        self.config
            .display_fields
            .iter()
            .map(|f| -> Result<(String, String)> { Ok((f.clone(), record.text(f)?.into_owned())) })
            .collect()
    }

    fn summary(&self, end: SessionEnd) -> SessionSummary {
        SessionSummary {
            end,
            labeled_now:   self.labeled_now,
            labeled_total: self.labeled.len(),
        }
    }
}
