//! Plain-text projection
//!
//! Flattens a document to readable plain text: one run of text per
//! top-level block, blocks separated by a blank line. Used for excerpts and
//! quick terminal inspection.

use crate::error::DocError;
use crate::extract::extract_text;
use crate::model::Document;
use crate::projection::Projection;

/// Projection implementation for plain text
#[derive(Debug)]
pub struct TextProjection;

impl Projection for TextProjection {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain-text flattening of the document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn project(&self, doc: &Document) -> Result<String, DocError> {
        let blocks: Vec<String> = doc
            .content
            .iter()
            .map(extract_text)
            .filter(|text| !text.is_empty())
            .collect();
        Ok(blocks.join("\n\n"))
    }
}
