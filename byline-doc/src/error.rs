//! Error types for pipeline operations

use std::fmt;

/// Errors that can occur while parsing or projecting documents
#[derive(Debug, Clone, PartialEq)]
pub enum DocError {
    /// Projection not found in registry
    ProjectionNotFound(String),
    /// Input is not valid editor JSON
    Parse(String),
    /// Error while producing projection output
    Serialization(String),
}

impl fmt::Display for DocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocError::ProjectionNotFound(name) => write!(f, "Projection '{name}' not found"),
            DocError::Parse(msg) => write!(f, "Parse error: {msg}"),
            DocError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for DocError {}
