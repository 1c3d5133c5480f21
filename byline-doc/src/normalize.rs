//! Canonicalization of editor exports.
//!
//! Every stored document must be `doc`-rooted (so readers never branch on
//! the root shape) and must carry at least one level-1 heading (the article
//! title the public page renders). `normalize` establishes both before a
//! post is persisted.
//!
//! The title search is global: a level-1 heading buried anywhere in the tree
//! satisfies the invariant and suppresses insertion, even when it is not
//! structurally first. When no title exists, the first top-level block is
//! promoted — a paragraph is replaced by its text, any other block keeps its
//! place behind a freshly minted heading. A document with no text at all
//! gets the literal placeholder title.

use log::debug;

use crate::extract::extract_text;
use crate::model::{Content, Document, Node};

/// Title text used when the input has no extractable text anywhere.
pub const PLACEHOLDER_TITLE: &str = "Untitled";

const TITLE_LEVEL: i64 = 1;

/// Canonicalize an editor export into a stored [`Document`].
///
/// Total: never fails, never rejects. Idempotent on its own output — a
/// normalized document passes through unchanged.
pub fn normalize(input: Content) -> Document {
    match input {
        // A doc root is unwrapped at the boundary so a doc is never nested
        // inside a doc and re-normalizing stored documents is a strict no-op.
        Content::Single(node) if node.kind == "doc" => {
            normalize(Content::Sequence(node.content.unwrap_or_default()))
        }
        Content::Single(node) => {
            if has_title_heading(&node) {
                return Document {
                    content: vec![node],
                };
            }
            Document {
                content: promote_single(node),
            }
        }
        Content::Sequence(blocks) => {
            if blocks.iter().any(has_title_heading) {
                return Document { content: blocks };
            }
            Document {
                content: promote_sequence(blocks),
            }
        }
    }
}

/// Whether the subtree contains a level-1 heading at any depth.
fn has_title_heading(node: &Node) -> bool {
    node.heading_level() == Some(TITLE_LEVEL) || node.children().iter().any(has_title_heading)
}

fn title_from_text(text: String) -> Node {
    Node::heading(TITLE_LEVEL, vec![Node::text(text)])
}

fn placeholder_title() -> Node {
    debug!("no extractable title text; inserting placeholder heading");
    title_from_text(PLACEHOLDER_TITLE.to_string())
}

/// Force an existing heading to level 1, keeping its other attrs and content.
fn force_title_level(mut node: Node) -> Node {
    let attrs = node.attrs.get_or_insert_with(serde_json::Map::new);
    attrs.insert("level".to_string(), serde_json::Value::from(TITLE_LEVEL));
    node
}

/// Promote the first block of a sequence that has no title heading.
fn promote_sequence(mut blocks: Vec<Node>) -> Vec<Node> {
    if blocks.is_empty() {
        return vec![placeholder_title()];
    }
    let first = blocks.remove(0);
    let mut promoted = promote_first_block(first);
    promoted.append(&mut blocks);
    promoted
}

/// The per-case promotion rules for the leading block.
///
/// A paragraph is replaced (its text migrates into the title and the
/// paragraph vanishes); any other block is retained behind a prepended
/// title, so its text intentionally appears twice.
fn promote_first_block(first: Node) -> Vec<Node> {
    if first.kind == "heading" {
        return vec![force_title_level(first)];
    }
    let text = extract_text(&first);
    if first.kind == "paragraph" && !text.is_empty() {
        return vec![title_from_text(text)];
    }
    if !text.is_empty() {
        return vec![title_from_text(text), first];
    }
    vec![placeholder_title(), first]
}

/// Promote a single-node root that has no title heading.
///
/// Same rules as [`promote_first_block`], except the no-text fallback hoists
/// the node's children directly beneath the placeholder title instead of
/// keeping the wrapper.
fn promote_single(node: Node) -> Vec<Node> {
    if node.kind == "heading" {
        return vec![force_title_level(node)];
    }
    let text = extract_text(&node);
    if node.kind == "paragraph" && !text.is_empty() {
        return vec![title_from_text(text)];
    }
    if !text.is_empty() {
        return vec![title_from_text(text), node];
    }
    let mut content = vec![placeholder_title()];
    match node.content {
        Some(children) => content.extend(children),
        None => content.push(node),
    }
    content
}
