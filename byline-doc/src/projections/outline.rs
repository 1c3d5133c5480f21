//! Outline projection
//!
//! The sidebar outline as JSON, for consumers that take the table of
//! contents over the wire rather than through the library API.

use crate::error::DocError;
use crate::model::Document;
use crate::projection::Projection;
use crate::toc::extract_toc;

/// Projection implementation for the outline (table of contents)
#[derive(Debug)]
pub struct OutlineProjection;

impl Projection for OutlineProjection {
    fn name(&self) -> &str {
        "toc"
    }

    fn description(&self) -> &str {
        "Section outline as JSON"
    }

    fn project(&self, doc: &Document) -> Result<String, DocError> {
        serde_json::to_string_pretty(&extract_toc(doc))
            .map_err(|e| DocError::Serialization(e.to_string()))
    }
}
