//! Outline (table of contents) extraction.
//!
//! The public article page shows a sidebar outline of section (level-2) and
//! subsection (level-3) headings, linking to the anchor ids the HTML
//! renderer injects. Level-1 headings are the article title and stay out of
//! the outline; the editor does not produce levels beyond 3, and anything
//! deeper is ignored if it shows up anyway.

use serde::{Deserialize, Serialize};

use crate::extract::extract_text;
use crate::model::{Document, Node};
use crate::slug::slugify;

/// One outline entry; `children` holds the subsections of a section entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineItem {
    pub id: String,
    pub text: String,
    pub level: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineItem>,
}

/// Extract the nested outline of level-2/3 headings from a document.
///
/// Depth-first over the whole tree — headings nested inside other block
/// containers are found too. Pure; recomputed on every read.
pub fn extract_toc(doc: &Document) -> Vec<OutlineItem> {
    let mut outline = Outline::default();
    for block in &doc.content {
        outline.visit(block);
    }
    outline.items
}

/// Accumulator threaded through the traversal.
///
/// `open_section` indexes the entry new subsections attach to. Exactly one
/// section is open at a time, regardless of how deep the headings actually
/// nest in the block tree: each level-2 heading replaces the previous open
/// section, and a level-3 heading met before any section becomes a
/// top-level orphan.
#[derive(Default)]
struct Outline {
    items: Vec<OutlineItem>,
    open_section: Option<usize>,
}

impl Outline {
    fn visit(&mut self, node: &Node) {
        if let Some(level @ (2 | 3)) = node.heading_level() {
            let text = extract_text(node);
            if !text.is_empty() {
                self.push(OutlineItem {
                    id: slugify(&text),
                    text,
                    level: level as u8,
                    children: Vec::new(),
                });
            }
        }
        for child in node.children() {
            self.visit(child);
        }
    }

    fn push(&mut self, item: OutlineItem) {
        if item.level == 2 {
            self.items.push(item);
            self.open_section = Some(self.items.len() - 1);
        } else if let Some(section) = self.open_section {
            self.items[section].children.push(item);
        } else {
            self.items.push(item);
        }
    }
}
