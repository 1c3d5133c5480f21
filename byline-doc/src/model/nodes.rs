//! Core data structures for the document tree.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single typed element of the document tree.
///
/// Mirrors the editor's JSON export: only `type` is mandatory, everything
/// else is present when the node kind needs it. Absent fields stay absent on
/// re-serialization so stored documents round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node kind tag, e.g. `"heading"`, `"paragraph"`, `"text"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Node-specific attributes (`level` on headings, `start` on ordered lists, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
    /// Ordered child nodes; absent on leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Node>>,
    /// Inline formatting applied to a text leaf, outermost first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<Vec<Mark>>,
    /// Literal text, present only on `text` leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// An inline formatting descriptor attached to a text leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
}

/// The two legal root shapes of an editor export.
///
/// The dual shape exists only at this boundary; `normalize` folds both into a
/// [`Document`] so downstream code never branches on it again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Sequence(Vec<Node>),
    Single(Node),
}

/// The canonical stored form: a `doc`-rooted ordered sequence of blocks.
///
/// Serializes as a plain `{"type": "doc", "content": [...]}` node. Reading a
/// non-`doc` root wraps it as the sole content entry, the same rule the
/// normalizer applies on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Node", into = "Node")]
pub struct Document {
    pub content: Vec<Node>,
}

impl From<Node> for Document {
    fn from(node: Node) -> Self {
        if node.kind == "doc" {
            Document {
                content: node.content.unwrap_or_default(),
            }
        } else {
            Document {
                content: vec![node],
            }
        }
    }
}

impl From<Document> for Node {
    fn from(doc: Document) -> Self {
        Node {
            kind: "doc".to_string(),
            attrs: None,
            content: Some(doc.content),
            marks: None,
            text: None,
        }
    }
}

impl Node {
    /// A bare node of the given kind with no attributes or children.
    pub fn new(kind: impl Into<String>) -> Node {
        Node {
            kind: kind.into(),
            attrs: None,
            content: None,
            marks: None,
            text: None,
        }
    }

    /// A text leaf.
    pub fn text(text: impl Into<String>) -> Node {
        Node {
            text: Some(text.into()),
            ..Node::new("text")
        }
    }

    /// A heading at the given level.
    pub fn heading(level: i64, content: Vec<Node>) -> Node {
        let mut attrs = Map::new();
        attrs.insert("level".to_string(), Value::from(level));
        Node {
            attrs: Some(attrs),
            content: Some(content),
            ..Node::new("heading")
        }
    }

    /// A paragraph with the given children.
    pub fn paragraph(content: Vec<Node>) -> Node {
        Node {
            content: Some(content),
            ..Node::new("paragraph")
        }
    }

    /// Child nodes, or an empty slice for leaves.
    pub fn children(&self) -> &[Node] {
        self.content.as_deref().unwrap_or(&[])
    }

    /// Integer attribute lookup (`level`, `start`, ...).
    pub fn int_attr(&self, key: &str) -> Option<i64> {
        self.attrs.as_ref()?.get(key)?.as_i64()
    }

    /// String attribute lookup (`language`, ...).
    pub fn str_attr(&self, key: &str) -> Option<&str> {
        self.attrs.as_ref()?.get(key)?.as_str()
    }

    /// The heading level, when this node is a heading with an integer `level`.
    pub fn heading_level(&self) -> Option<i64> {
        if self.kind == "heading" {
            self.int_attr("level")
        } else {
            None
        }
    }
}
