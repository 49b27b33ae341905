use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A single schema violation found while validating a raw document.
///
/// `path` addresses the offending node, e.g. `WorkExperience[2].roles[0].skills[1]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {reason}")]
pub struct SchemaError {
    pub path: String,
    pub reason: String,
}

impl SchemaError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Every schema violation in a document. Never empty when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<SchemaError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[SchemaError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [only] => write!(f, "{only}"),
            [first, rest @ ..] => write!(f, "{first} (and {} more)", rest.len()),
            [] => write!(f, "no schema errors"),
        }
    }
}

impl std::error::Error for ValidationErrors {}

/// Failure to turn a document location into a validated `Document`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Transport error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error (status {status}): {url}")]
    Status { status: u16, url: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Schema(#[from] ValidationErrors),
}

impl LoadError {
    /// True for failures of the fetch itself, as opposed to bad content.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            LoadError::NotFound(_) | LoadError::Io(_) | LoadError::Http(_) | LoadError::Status { .. }
        )
    }
}
