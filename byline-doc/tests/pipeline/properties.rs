//! Property tests for canonicalization and slug generation.

use byline_doc::model::{Content, Node};
use byline_doc::{extract_toc, is_valid_slug, normalize, render_html, slugify};
use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;

/// The reference pattern URL slugs must match.
static SLUG_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-z0-9]+(-[a-z0-9]+)*$").expect("pattern compiles"));

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        "[a-zA-Z0-9 ]{0,12}".prop_map(Node::text),
        Just(Node::new("horizontalRule")),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            (1..=4i64, prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(level, content)| Node::heading(level, content)),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Node::paragraph),
            prop::collection::vec(inner, 0..4).prop_map(|content| Node {
                content: Some(content),
                ..Node::new("blockquote")
            }),
        ]
    })
}

fn arb_content() -> impl Strategy<Value = Content> {
    prop_oneof![
        arb_node().prop_map(Content::Single),
        prop::collection::vec(arb_node(), 0..4).prop_map(Content::Sequence),
    ]
}

fn contains_title(node: &Node) -> bool {
    node.heading_level() == Some(1) || node.children().iter().any(contains_title)
}

proptest! {
    #[test]
    fn normalization_always_establishes_a_title(input in arb_content()) {
        let doc = normalize(input);
        prop_assert!(doc.content.iter().any(contains_title));
    }

    #[test]
    fn normalization_is_idempotent(input in arb_content()) {
        let once = normalize(input);
        let twice = normalize(Content::Single(Node::from(once.clone())));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_documents_always_render(input in arb_content()) {
        let doc = normalize(input);
        let html = render_html(&doc).unwrap();
        prop_assert!(html.contains("<h1"));
    }

    #[test]
    fn outline_levels_stay_in_range(input in arb_content()) {
        let doc = normalize(input);
        for item in extract_toc(&doc) {
            prop_assert!(item.level == 2 || item.level == 3);
            for child in &item.children {
                prop_assert!(child.level == 3);
            }
        }
    }

    #[test]
    fn outline_anchors_appear_in_rendered_html(input in arb_content()) {
        let doc = normalize(input);
        let html = render_html(&doc).unwrap();
        for item in extract_toc(&doc) {
            if !item.id.is_empty() {
                prop_assert!(
                    html.contains(&format!(r#" id="{}""#, item.id)),
                    "expected id anchor in rendered html"
                );
            }
        }
    }

    #[test]
    fn slugify_is_idempotent(text in ".*") {
        let once = slugify(&text);
        prop_assert_eq!(slugify(&once), once.clone());
    }

    #[test]
    fn slugs_use_the_safe_alphabet(text in ".*") {
        let slug = slugify(&text);
        prop_assert!(slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
    }

    #[test]
    fn slug_validation_agrees_with_the_reference_pattern(candidate in "[a-zA-Z0-9 _-]{0,12}") {
        prop_assert_eq!(is_valid_slug(&candidate), SLUG_FORMAT.is_match(&candidate));
    }
}
