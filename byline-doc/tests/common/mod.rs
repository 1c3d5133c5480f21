//! Shared helpers for the integration tests.

use byline_doc::model::{parse_content, Content, Document};
use byline_doc::normalize;
use std::fs;
use std::path::PathBuf;

/// Load a fixture file from tests/fixtures.
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

/// Parse and normalize a fixture in one step, the way the write path does.
pub fn fixture_document(name: &str) -> Document {
    normalize(content(&fixture(name)))
}

/// Parse inline editor JSON into [`Content`].
pub fn content(source: &str) -> Content {
    parse_content(source).expect("fixture JSON should parse")
}
