//! Error types for document processing

use std::fmt;

/// Errors that can occur while processing a document tree
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessError {
    /// A route collaborator could not produce a URL
    Route(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Route(msg) => write!(f, "Route resolution failed: {msg}"),
        }
    }
}

impl std::error::Error for ProcessError {}
