//! Projection registry for discovery and selection
//!
//! This module provides a centralized registry for all available
//! projections. Projections can be registered and retrieved by name.

use crate::error::DocError;
use crate::model::Document;
use crate::projection::Projection;
use std::collections::HashMap;

/// Registry of document projections
///
/// # Examples
///
/// ```ignore
/// let registry = ProjectionRegistry::default();
/// let html = registry.project(&doc, "html")?;
/// ```
pub struct ProjectionRegistry {
    projections: HashMap<String, Box<dyn Projection>>,
}

impl ProjectionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ProjectionRegistry {
            projections: HashMap::new(),
        }
    }

    /// Register a projection
    ///
    /// If a projection with the same name already exists, it will be replaced.
    pub fn register<P: Projection + 'static>(&mut self, projection: P) {
        self.projections
            .insert(projection.name().to_string(), Box::new(projection));
    }

    /// Get a projection by name
    pub fn get(&self, name: &str) -> Result<&dyn Projection, DocError> {
        self.projections
            .get(name)
            .map(|p| p.as_ref())
            .ok_or_else(|| DocError::ProjectionNotFound(name.to_string()))
    }

    /// Check if a projection exists
    pub fn has(&self, name: &str) -> bool {
        self.projections.contains_key(name)
    }

    /// List all available projection names (sorted)
    pub fn list_projections(&self) -> Vec<String> {
        let mut names: Vec<_> = self.projections.keys().cloned().collect();
        names.sort();
        names
    }

    /// Pick a projection from an output filename's extension
    ///
    /// Returns the projection name if a matching extension is found, or
    /// None otherwise. `doc.html` → html, `doc.txt` → text.
    pub fn detect_projection_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for projection in self.projections.values() {
            if projection.file_extensions().contains(&extension) {
                return Some(projection.name().to_string());
            }
        }

        None
    }

    /// Project a document using the named projection
    pub fn project(&self, doc: &Document, projection: &str) -> Result<String, DocError> {
        self.get(projection)?.project(doc)
    }

    /// Project a document using the named projection and options
    pub fn project_with_options(
        &self,
        doc: &Document,
        projection: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, DocError> {
        self.get(projection)?.project_with_options(doc, options)
    }

    /// Create a registry with the default projections
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::projections::html::HtmlProjection::default());
        registry.register(crate::projections::outline::OutlineProjection);
        registry.register(crate::projections::text::TextProjection);
        registry.register(crate::projections::json::JsonProjection);

        registry
    }
}

impl Default for ProjectionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
