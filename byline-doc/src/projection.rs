//! Projection trait definition
//!
//! A projection is a read-only view derived from a canonical document: the
//! rendered article body, the sidebar outline, a plain-text flattening. All
//! projections implement this trait so callers (the CLI, an embedding
//! application) select them uniformly by name.

use crate::error::DocError;
use crate::model::Document;
use std::collections::HashMap;

/// Trait for document projections
///
/// Implementors derive a textual output from a canonical [`Document`].
/// Projections never mutate the document and never re-validate it; callers
/// are expected to hand over normalized documents.
pub trait Projection: Send + Sync + std::fmt::Debug {
    /// The name of this projection (e.g., "html", "toc")
    fn name(&self) -> &str;

    /// Optional description of this projection
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this projection (e.g., ["html", "htm"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used to pick a projection from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Project a document into this view's textual output.
    fn project(&self, doc: &Document) -> Result<String, DocError>;

    /// Project a document, optionally using extra parameters.
    ///
    /// Projections without knobs can rely on the default implementation,
    /// which ignores the options and delegates to [`Projection::project`].
    fn project_with_options(
        &self,
        doc: &Document,
        _options: &HashMap<String, String>,
    ) -> Result<String, DocError> {
        self.project(doc)
    }
}
