use thiserror::Error;

/// Typed failures raised by the annotator's own logic.
///
/// I/O and JSON syntax errors stay as plain `anyhow` errors with
/// context attached; these variants cover the cases callers (and
/// tests) may want to tell apart.
#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("record is missing field '{field}': {record}")]
    MissingField { field: String, record: String },
    #[error("line {line}: expected a JSON object, found {found}")]
    NotAnObject { line: usize, found: &'static str },
    #[error("configuration error: {0}")]
    Configuration(String),
}
