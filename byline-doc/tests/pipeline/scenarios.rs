//! End-to-end canonicalization scenarios over raw editor JSON.

use crate::common::content;
use byline_doc::extract_text;
use byline_doc::model::Node;
use byline_doc::normalize;
use serde_json::json;

fn normalized_json(source: &str) -> serde_json::Value {
    let doc = normalize(content(source));
    serde_json::to_value(&doc).unwrap()
}

#[test]
fn single_paragraph_is_promoted_to_title() {
    let result =
        normalized_json(r#"{"type":"paragraph","content":[{"type":"text","text":"Hello World"}]}"#);

    assert_eq!(
        result,
        json!({
            "type": "doc",
            "content": [{
                "type": "heading",
                "attrs": {"level": 1},
                "content": [{"type": "text", "text": "Hello World"}]
            }]
        })
    );
}

#[test]
fn leading_paragraph_replaced_rest_untouched() {
    let result = normalized_json(
        r#"[{"type":"paragraph","content":[{"type":"text","text":"Intro"}]},
            {"type":"paragraph","content":[{"type":"text","text":"Body"}]}]"#,
    );

    assert_eq!(
        result,
        json!({
            "type": "doc",
            "content": [
                {
                    "type": "heading",
                    "attrs": {"level": 1},
                    "content": [{"type": "text", "text": "Intro"}]
                },
                {
                    "type": "paragraph",
                    "content": [{"type": "text", "text": "Body"}]
                }
            ]
        })
    );
}

#[test]
fn empty_export_gets_placeholder_title() {
    let result = normalized_json("[]");

    assert_eq!(
        result,
        json!({
            "type": "doc",
            "content": [{
                "type": "heading",
                "attrs": {"level": 1},
                "content": [{"type": "text", "text": "Untitled"}]
            }]
        })
    );
}

#[test]
fn buried_title_suppresses_promotion() {
    let source = r#"[{"type":"paragraph","content":[{"type":"text","text":"Lead"}]},
        {"type":"blockquote","content":[
            {"type":"heading","attrs":{"level":1},"content":[{"type":"text","text":"Buried"}]}]}]"#;

    let doc = normalize(content(source));
    // Unchanged apart from the doc wrapper: the lead paragraph is still a
    // paragraph and no heading was inserted.
    assert_eq!(doc.content.len(), 2);
    assert_eq!(doc.content[0].kind, "paragraph");
    assert_eq!(extract_text(&doc.content[0]), "Lead");
}

#[test]
fn leading_subheading_is_upgraded() {
    let doc = normalize(content(
        r#"[{"type":"heading","attrs":{"level":2},"content":[{"type":"text","text":"Almost a Title"}]}]"#,
    ));

    assert_eq!(doc.content.len(), 1);
    assert_eq!(doc.content[0].heading_level(), Some(1));
}

#[test]
fn textful_non_paragraph_lead_is_kept_and_titled() {
    let doc = normalize(content(
        r#"[{"type":"blockquote","content":[
            {"type":"paragraph","content":[{"type":"text","text":"Quoted wisdom"}]}]}]"#,
    ));

    assert_eq!(doc.content.len(), 2);
    assert_eq!(doc.content[0].heading_level(), Some(1));
    assert_eq!(extract_text(&doc.content[0]), "Quoted wisdom");
    assert_eq!(doc.content[1].kind, "blockquote");
}

#[test]
fn stored_documents_pass_through() {
    let stored = r#"{"type":"doc","content":[
        {"type":"heading","attrs":{"level":1},"content":[{"type":"text","text":"T"}]},
        {"type":"paragraph","content":[{"type":"text","text":"Body"}]}]}"#;

    let doc = normalize(content(stored));
    let again = normalize(byline_doc::Content::Single(Node::from(doc.clone())));
    assert_eq!(doc, again);
}
