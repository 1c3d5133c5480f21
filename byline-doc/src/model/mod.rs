//! Data shapes shared by every pipeline stage.
//!
//! The editor exports a recursive tree of typed nodes. The type set is open
//! ended (the editor can be extended with new block kinds without touching
//! this crate); the pipeline only special-cases `doc`, `heading`, `paragraph`
//! and `text`.

mod nodes;

pub use nodes::{Content, Document, Mark, Node};

use crate::error::DocError;

/// Parse an editor JSON export into [`Content`].
///
/// Accepts both legal root shapes: a single node object or a bare array of
/// block nodes.
pub fn parse_content(source: &str) -> Result<Content, DocError> {
    serde_json::from_str(source).map_err(|e| DocError::Parse(e.to_string()))
}

/// Parse a stored document.
///
/// Storage only ever holds normalized documents, so the root must be a single
/// node; a non-`doc` root is tolerated and wrapped (the same rule the
/// normalizer applies).
pub fn parse_document(source: &str) -> Result<Document, DocError> {
    serde_json::from_str(source).map_err(|e| DocError::Parse(e.to_string()))
}
