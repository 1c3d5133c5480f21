//! Outline extraction over full documents, and its agreement with the
//! anchors the HTML projection emits.

use crate::common::fixture_document;
use byline_doc::{extract_toc, render_html, OutlineItem};

#[test]
fn kitchensink_outline_shape() {
    let doc = fixture_document("kitchensink.json");
    let toc = extract_toc(&doc);

    assert_eq!(toc.len(), 2);

    assert_eq!(toc[0].id, "planning");
    assert_eq!(toc[0].text, "Planning");
    assert_eq!(toc[0].level, 2);
    assert_eq!(toc[0].children.len(), 1);
    assert_eq!(toc[0].children[0].id, "scope-creep");

    assert_eq!(toc[1].id, "deploying");
    assert_eq!(toc[1].children.len(), 1);
    assert_eq!(toc[1].children[0].id, "rollbacks");
}

#[test]
fn outline_levels_are_sections_and_subsections_only() {
    let doc = fixture_document("kitchensink.json");

    fn check(items: &[OutlineItem]) {
        for item in items {
            assert!(item.level == 2 || item.level == 3, "level {}", item.level);
            check(&item.children);
        }
    }
    check(&extract_toc(&doc));
}

#[test]
fn every_outline_id_is_a_rendered_anchor() {
    let doc = fixture_document("kitchensink.json");
    let html = render_html(&doc).unwrap();

    fn collect_ids(items: &[OutlineItem], out: &mut Vec<String>) {
        for item in items {
            out.push(item.id.clone());
            collect_ids(&item.children, out);
        }
    }

    let mut ids = Vec::new();
    collect_ids(&extract_toc(&doc), &mut ids);
    assert!(!ids.is_empty());

    for id in ids {
        let anchor = format!(r#" id="{id}""#);
        assert!(html.contains(&anchor), "missing anchor for '{id}'");
    }
}
