//! HTML serialization (Document → HTML)
//!
//! Pipeline: Document → RcDom (HTML DOM tree) → HTML string. Anchor ids for
//! section headings are attached while the DOM is built, so they go through
//! the same serializer as everything else.

use crate::error::DocError;
use crate::extract::extract_text;
use crate::model::{Document, Node};
use crate::projections::html::HtmlOptions;
use crate::slug::slugify;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use log::debug;
use markup5ever_rcdom::{Handle, Node as DomNode, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Render a document to an HTML fragment.
pub fn render_fragment(doc: &Document) -> Result<String, DocError> {
    let dom = build_dom(doc);
    serialize_fragment(&dom)
}

/// Render a document to HTML, optionally wrapped as a standalone page.
pub fn render_with_options(doc: &Document, options: &HtmlOptions) -> Result<String, DocError> {
    let fragment = render_fragment(doc)?;
    if !options.standalone {
        return Ok(fragment);
    }

    let title = options
        .title
        .clone()
        .or_else(|| title_from_document(doc))
        .unwrap_or_else(|| "Untitled".to_string());
    Ok(wrap_in_document(&fragment, &title, options))
}

/// First heading's text, used as the standalone page title.
fn title_from_document(doc: &Document) -> Option<String> {
    doc.content
        .iter()
        .find(|node| node.kind == "heading")
        .map(extract_text)
        .filter(|text| !text.is_empty())
}

/// Build an HTML DOM tree from the document's blocks.
///
/// The container element exists only to hold the top-level blocks; it is
/// not part of the serialized output.
fn build_dom(doc: &Document) -> RcDom {
    let dom = RcDom::default();
    let container = create_element("div", vec![]);

    for block in &doc.content {
        append_node(&container, block);
    }

    dom.document.children.borrow_mut().push(container);
    dom
}

/// Append one document node (and its subtree) to an HTML parent.
fn append_node(parent: &Handle, node: &Node) {
    match node.kind.as_str() {
        // A nested doc node has no element of its own either.
        "doc" => {
            for child in node.children() {
                append_node(parent, child);
            }
        }

        "paragraph" => append_block(parent, "p", vec![], node),

        "heading" => {
            let level = node.heading_level().unwrap_or(1).clamp(1, 6);
            let tag = format!("h{level}");

            // Section and subsection headings carry the anchor the outline
            // links to. Ids collide for identical heading text; accepted.
            let anchor = if level == 2 || level == 3 {
                Some(slugify(&extract_text(node))).filter(|id| !id.is_empty())
            } else {
                None
            };

            let mut attrs = vec![];
            if let Some(id) = anchor.as_deref() {
                attrs.push(("id", id));
            }
            append_block(parent, &tag, attrs, node);
        }

        "blockquote" => append_block(parent, "blockquote", vec![], node),

        "bulletList" => append_block(parent, "ul", vec![], node),

        "orderedList" => {
            let start_string;
            let mut attrs = vec![];
            if let Some(start) = node.int_attr("start").filter(|start| *start > 1) {
                start_string = start.to_string();
                attrs.push(("start", start_string.as_str()));
            }
            append_block(parent, "ol", attrs, node);
        }

        "listItem" => append_block(parent, "li", vec![], node),

        "codeBlock" => {
            let lang_class;
            let mut code_attrs = vec![];
            if let Some(lang) = node.str_attr("language") {
                lang_class = format!("language-{lang}");
                code_attrs.push(("class", lang_class.as_str()));
            }

            let pre = create_element("pre", vec![]);
            let code = create_element("code", code_attrs);
            for child in node.children() {
                append_node(&code, child);
            }
            pre.children.borrow_mut().push(code);
            parent.children.borrow_mut().push(pre);
        }

        "horizontalRule" => {
            let hr = create_element("hr", vec![]);
            parent.children.borrow_mut().push(hr);
        }

        "hardBreak" => {
            let br = create_element("br", vec![]);
            parent.children.borrow_mut().push(br);
        }

        "text" => append_text(parent, node),

        other => {
            debug!("skipping node type '{other}' with no HTML projection");
        }
    }
}

/// Create an element, append the node's children into it, attach it.
fn append_block(parent: &Handle, tag: &str, attrs: Vec<(&str, &str)>, node: &Node) {
    let element = create_element(tag, attrs);
    for child in node.children() {
        append_node(&element, child);
    }
    parent.children.borrow_mut().push(element);
}

/// Append a text leaf, wrapping it in its mark elements (outermost first).
fn append_text(parent: &Handle, node: &Node) {
    let mut current = parent.clone();
    for mark in node.marks.as_deref().unwrap_or(&[]) {
        match mark_tag(&mark.kind) {
            Some(tag) => {
                let element = create_element(tag, vec![]);
                current.children.borrow_mut().push(element.clone());
                current = element;
            }
            None => debug!("ignoring mark type '{}'", mark.kind),
        }
    }
    let text = create_text(node.text.as_deref().unwrap_or(""));
    current.children.borrow_mut().push(text);
}

fn mark_tag(kind: &str) -> Option<&'static str> {
    match kind {
        "bold" => Some("strong"),
        "italic" => Some("em"),
        "strike" => Some("s"),
        "code" => Some("code"),
        _ => None,
    }
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(DomNode {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(DomNode {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize the DOM's container children to an HTML string.
fn serialize_fragment(dom: &RcDom) -> Result<String, DocError> {
    let mut output = Vec::new();

    let container = dom
        .document
        .children
        .borrow()
        .first()
        .ok_or_else(|| DocError::Serialization("Empty DOM".to_string()))?
        .clone();

    // IncludeNode serializes each block element itself, not just its children.
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone())
            .map_err(|e| DocError::Serialization(format!("HTML serialization failed: {e}")))?;
    }

    String::from_utf8(output)
        .map_err(|e| DocError::Serialization(format!("UTF-8 conversion failed: {e}")))
}

/// Wrap a fragment in a complete HTML document with embedded CSS.
fn wrap_in_document(body_html: &str, title: &str, options: &HtmlOptions) -> String {
    let baseline_css = include_str!("../../../css/baseline.css");
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="byline">
  <title>{escaped_title}</title>
  <style>
{baseline_css}
{custom_css}
  </style>
</head>
<body>
<article class="byline-article">
{body_html}
</article>
</body>
</html>"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
