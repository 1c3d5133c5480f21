//! Tag aggregation and featured-tag rules.
//!
//! Tags are free-form strings attached to posts. The admin tag screen shows
//! every tag in use with its post count, and pins up to four of them as
//! "featured" for the public landing page.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::post::{PostLimits, ValidationError, ValidationResult};

/// A tag together with the number of posts carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagWithCount {
    pub tag: String,
    pub count: usize,
}

/// Aggregate the tag lists of a set of posts into unique tags with counts.
///
/// Ordered by count descending, then tag name ascending, which is the order
/// the admin screen displays.
pub fn count_tags<'a, I>(tag_lists: I) -> Vec<TagWithCount>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for tags in tag_lists {
        for tag in tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }

    let mut result: Vec<TagWithCount> = counts
        .into_iter()
        .map(|(tag, count)| TagWithCount {
            tag: tag.to_string(),
            count,
        })
        .collect();
    // BTreeMap iteration already sorted by name; a stable sort on count
    // keeps the name order within equal counts.
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}

/// Validate a featured-tag selection.
///
/// At most `featured_tags_max` tags, each non-empty, no duplicates.
pub fn validate_featured_tags(tags: &[String], limits: &PostLimits) -> ValidationResult {
    let mut result = ValidationResult::default();

    if tags.len() > limits.featured_tags_max {
        result.errors.push(ValidationError {
            field: "tags",
            message: format!(
                "Cannot have more than {} featured tags",
                limits.featured_tags_max
            ),
        });
    }
    if tags.iter().any(|tag| tag.is_empty()) {
        result.errors.push(ValidationError {
            field: "tags",
            message: "All tags must be non-empty strings".to_string(),
        });
    }
    let unique: BTreeSet<&str> = tags.iter().map(String::as_str).collect();
    if unique.len() != tags.len() {
        result.errors.push(ValidationError {
            field: "tags",
            message: "Featured tags must be unique".to_string(),
        });
    }

    result
}
