//! Export tests for the HTML projection (Document → HTML)

use crate::common::{content, fixture_document};
use byline_doc::{normalize, render_html, render_html_with_options, HtmlOptions};
use insta::assert_snapshot;

/// Helper to run editor JSON through the full write-then-read path.
fn json_to_html(source: &str) -> String {
    let doc = normalize(content(source));
    render_html(&doc).unwrap()
}

// ============================================================================
// BASIC ELEMENT TESTS
// ============================================================================

#[test]
fn test_paragraph_simple() {
    let html = json_to_html(
        r#"[{"type":"heading","attrs":{"level":1},"content":[{"type":"text","text":"T"}]},
            {"type":"paragraph","content":[{"type":"text","text":"A simple paragraph."}]}]"#,
    );

    assert!(html.contains("<h1>T</h1>"));
    assert!(html.contains("<p>A simple paragraph.</p>"));
}

#[test]
fn test_heading_levels_and_anchors() {
    let doc = fixture_document("kitchensink.json");
    let html = render_html(&doc).unwrap();

    assert!(html.contains("<h1>Shipping a Side Project</h1>"));
    assert!(html.contains(r#"<h2 id="planning">Planning</h2>"#));
    assert!(html.contains(r#"<h3 id="scope-creep">Scope Creep</h3>"#));
    assert!(html.contains(r#"<h2 id="deploying">Deploying</h2>"#));
    assert!(html.contains(r#"<h3 id="rollbacks">Rollbacks</h3>"#));
}

#[test]
fn test_marks() {
    let doc = fixture_document("kitchensink.json");
    let html = render_html(&doc).unwrap();

    assert!(html.contains("<em>weekend hack</em>"));
    assert!(html.contains("<strong>smallest</strong>"));
    assert!(html.contains("<code>hello@example.com</code>"));
}

#[test]
fn test_lists() {
    let doc = fixture_document("kitchensink.json");
    let html = render_html(&doc).unwrap();

    assert!(html.contains("<ul><li><p>Write the README first</p></li>"));
    assert!(html.contains("<ol><li><p>Tag the release</p></li>"));
    // start == 1 adds nothing
    assert!(!html.contains("start="));
}

#[test]
fn test_blockquote_and_rule() {
    let doc = fixture_document("kitchensink.json");
    let html = render_html(&doc).unwrap();

    assert!(html.contains("<blockquote><p>No is a complete sentence.</p></blockquote>"));
    assert!(html.contains("<hr>"));
}

#[test]
fn test_code_block() {
    let doc = fixture_document("kitchensink.json");
    let html = render_html(&doc).unwrap();

    assert!(html.contains(r#"<pre><code class="language-bash">make deploy</code></pre>"#));
}

#[test]
fn test_fragment_has_no_document_chrome() {
    let doc = fixture_document("kitchensink.json");
    let html = render_html(&doc).unwrap();

    assert!(!html.contains("<!DOCTYPE"));
    assert!(!html.contains("<body"));
    assert!(html.starts_with("<h1>"));
}

// ============================================================================
// ANCHOR BEHAVIOR
// ============================================================================

#[test]
fn test_anchor_exact_shape() {
    let html = json_to_html(
        r#"[{"type":"heading","attrs":{"level":1},"content":[{"type":"text","text":"Title"}]},
            {"type":"heading","attrs":{"level":2},"content":[{"type":"text","text":"Section One"}]},
            {"type":"heading","attrs":{"level":3},"content":[{"type":"text","text":"Sub A"}]}]"#,
    );

    assert_snapshot!(html, @r###"<h1>Title</h1><h2 id="section-one">Section One</h2><h3 id="sub-a">Sub A</h3>"###);
}

#[test]
fn test_duplicate_heading_text_collides() {
    let html = json_to_html(
        r#"[{"type":"heading","attrs":{"level":1},"content":[{"type":"text","text":"Title"}]},
            {"type":"heading","attrs":{"level":2},"content":[{"type":"text","text":"Setup"}]},
            {"type":"heading","attrs":{"level":2},"content":[{"type":"text","text":"Setup"}]}]"#,
    );

    assert_eq!(html.matches(r#"id="setup""#).count(), 2);
}

#[test]
fn test_heading_anchor_from_nested_markup() {
    let html = json_to_html(
        r#"[{"type":"heading","attrs":{"level":1},"content":[{"type":"text","text":"Title"}]},
            {"type":"heading","attrs":{"level":2},"content":[
                {"type":"text","text":"The "},
                {"type":"text","marks":[{"type":"code"}],"text":"normalize"},
                {"type":"text","text":" step"}]}]"#,
    );

    assert!(html.contains(r#"<h2 id="the-normalize-step">"#));
    assert!(html.contains("<code>normalize</code>"));
}

// ============================================================================
// STANDALONE OUTPUT
// ============================================================================

#[test]
fn test_standalone_document() {
    let doc = fixture_document("kitchensink.json");
    let html = render_html_with_options(&doc, &HtmlOptions::standalone()).unwrap();

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<title>Shipping a Side Project</title>"));
    assert!(html.contains("<style>"));
    assert!(html.contains(r#"<article class="byline-article">"#));
    assert!(html.contains(r#"<h2 id="planning">Planning</h2>"#));
}
