//! Post input validation.
//!
//! Field-level checks for post create/update payloads. Structural request
//! validation, slug uniqueness against stored posts, and persistence itself
//! are the embedding application's concern; what lives here is everything
//! that can be decided from the payload alone.

use serde::{Deserialize, Serialize};

use crate::model::{Content, Node};
use crate::slug::{slug_format_ok, slugify};

/// A post create/update payload.
///
/// `slug` may be omitted, in which case it is derived from the title. Tags
/// default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostInput {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// One failed check, tagged with the field it concerns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

/// Outcome of validating a payload. Empty errors means valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(ValidationError {
            field,
            message: message.into(),
        });
    }
}

/// Size ceilings applied during validation.
///
/// Defaults match the product rules; deployments can override them through
/// the configuration layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PostLimits {
    pub title_max: usize,
    pub description_max: usize,
    pub tags_max: usize,
    pub slug_max: usize,
    pub featured_tags_max: usize,
}

impl Default for PostLimits {
    fn default() -> Self {
        PostLimits {
            title_max: 200,
            description_max: 500,
            tags_max: 10,
            slug_max: 100,
            featured_tags_max: 4,
        }
    }
}

/// Validate a post payload against the given limits.
///
/// Collects every failed check rather than stopping at the first, so a form
/// can surface all problems at once.
pub fn validate_post_input(input: &PostInput, limits: &PostLimits) -> ValidationResult {
    let mut result = ValidationResult::default();

    if input.title.trim().is_empty() {
        result.push("title", "Title is required");
    } else if input.title.chars().count() > limits.title_max {
        result.push(
            "title",
            format!("Title cannot exceed {} characters", limits.title_max),
        );
    }

    // The effective slug is what storage would receive: the explicit one,
    // or one derived from the title.
    let slug = input
        .slug
        .clone()
        .unwrap_or_else(|| slugify(&input.title));
    if slug.trim().is_empty() {
        result.push("slug", "Slug is required");
    } else if !slug_format_ok(&slug) || slug.len() > limits.slug_max {
        result.push("slug", "Slug must be lowercase alphanumeric with hyphens");
    }

    match &input.content {
        None => result.push("content", "Content is required"),
        Some(content) => {
            if !content_is_well_formed(content) {
                result.push("content", "Invalid content structure");
            }
        }
    }

    if let Some(description) = &input.description {
        if description.chars().count() > limits.description_max {
            result.push(
                "description",
                format!(
                    "Description cannot exceed {} characters",
                    limits.description_max
                ),
            );
        }
    }

    if input.tags.len() > limits.tags_max {
        result.push(
            "tags",
            format!("Cannot have more than {} tags", limits.tags_max),
        );
    } else if input.tags.iter().any(|tag| tag.is_empty()) {
        result.push("tags", "All tags must be non-empty strings");
    }

    result
}

/// Structural well-formedness of an editor export.
///
/// The serde layer already guarantees every node carries a `type`; what
/// remains is that a sequence root must be non-empty and no node kind is
/// blank.
pub fn content_is_well_formed(content: &Content) -> bool {
    match content {
        Content::Sequence(nodes) => !nodes.is_empty() && nodes.iter().all(node_is_well_formed),
        Content::Single(node) => node_is_well_formed(node),
    }
}

fn node_is_well_formed(node: &Node) -> bool {
    !node.kind.is_empty() && node.children().iter().all(node_is_well_formed)
}
