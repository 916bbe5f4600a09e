// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Every flag the annotator accepts. clap's derive macros give
// us --help, --version, missing-flag errors, and the short
// aliases for free.
//
// List-valued flags are comma separated, e.g.
//   --labels sport,weather,other
// An empty optional list (or an absent flag) means no terms.

use clap::Args;
use std::path::PathBuf;

use crate::application::annotate_use_case::SessionConfig;

/// All arguments for an annotation session
#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// The input file: one JSON object per line
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// The output file: labeled records are appended here,
    /// and read back on startup to resume
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    /// Fields to display for each record (comma separated)
    #[arg(short = 'd', long)]
    pub display_fields: String,

    /// Fields searched for include / exclude terms (comma separated)
    #[arg(short = 's', long)]
    pub search_fields: String,

    /// The possible labels, in menu order (comma separated)
    #[arg(short = 'l', long)]
    pub labels: String,

    /// The field holding each record's unique id
    #[arg(short = 'f', long)]
    pub id_field: String,

    /// Initial terms a record must contain (comma separated)
    #[arg(short = 'n', long)]
    pub include_terms: Option<String>,

    /// Initial terms a record must not contain (comma separated)
    #[arg(short = 'e', long)]
    pub exclude_terms: Option<String>,

    /// Name of the field the label is written to
    #[arg(short = 'a', long, default_value = "label")]
    pub label_name: String,

    /// Seed for the one-time shuffle of the dataset
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Convert CLI args into the application-layer SessionConfig.
/// The application layer never sees clap types.
impl From<AnnotateArgs> for SessionConfig {
    fn from(a: AnnotateArgs) -> Self {
        SessionConfig {
            input:          a.input,
            output:         a.output,
            display_fields: split_csv(&a.display_fields),
            search_fields:  split_csv(&a.search_fields),
            labels:         split_csv(&a.labels),
            id_field:       a.id_field,
            include_terms:  a.include_terms.as_deref().map(split_csv).unwrap_or_default(),
            exclude_terms:  a.exclude_terms.as_deref().map(split_csv).unwrap_or_default(),
            label_name:     a.label_name,
            seed:           a.seed,
        }
    }
}

/// Split a comma separated flag value. An empty value is an empty list;
/// otherwise every piece is kept, including empty ones between commas.
pub fn split_csv(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(str::to_string).collect()
}
