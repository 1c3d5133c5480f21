//! Text flattening.
//!
//! Both the normalizer (promoting a first block to the document title) and
//! the outline extractor (heading display text) need the plain text of a
//! subtree. Heading display text is defined as exactly this flattening: the
//! in-order concatenation of every descendant text leaf.

use crate::model::Node;

/// Flatten a subtree to its text content.
///
/// A `text` field wins verbatim; otherwise children are concatenated in
/// order with no separator; nodes with neither yield the empty string.
/// Total over any well-typed tree — unrecognized shapes degrade to empty.
pub fn extract_text(node: &Node) -> String {
    if let Some(text) = &node.text {
        return text.clone();
    }
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(node: &Node, out: &mut String) {
    if let Some(text) = &node.text {
        out.push_str(text);
        return;
    }
    for child in node.children() {
        collect_text(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_leaf_is_verbatim() {
        assert_eq!(extract_text(&Node::text("  Hello ")), "  Hello ");
    }

    #[test]
    fn children_concatenate_without_separator() {
        let node = Node::paragraph(vec![Node::text("Hello "), Node::text("World")]);
        assert_eq!(extract_text(&node), "Hello World");
    }

    #[test]
    fn nested_children_flatten_in_document_order() {
        let node = Node::new("blockquote");
        let node = Node {
            content: Some(vec![
                Node::paragraph(vec![Node::text("one")]),
                Node::paragraph(vec![Node::text("two")]),
            ]),
            ..node
        };
        assert_eq!(extract_text(&node), "onetwo");
    }

    #[test]
    fn leaf_without_text_is_empty() {
        assert_eq!(extract_text(&Node::new("horizontalRule")), "");
    }

    #[test]
    fn text_field_wins_over_content() {
        let mut node = Node::text("leaf");
        node.content = Some(vec![Node::text("ignored")]);
        assert_eq!(extract_text(&node), "leaf");
    }
}
