//! Canonical JSON projection
//!
//! The normalized document itself, pretty-printed. This is the storage
//! form; the CLI's `normalize` command is this projection applied to a
//! freshly normalized input.

use crate::error::DocError;
use crate::model::Document;
use crate::projection::Projection;

/// Projection implementation for the canonical document JSON
#[derive(Debug)]
pub struct JsonProjection;

impl Projection for JsonProjection {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Canonical document as pretty-printed JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn project(&self, doc: &Document) -> Result<String, DocError> {
        serde_json::to_string_pretty(doc).map_err(|e| DocError::Serialization(e.to_string()))
    }
}
