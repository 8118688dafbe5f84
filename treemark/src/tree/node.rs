//! Core data structures for the document tree.

use serde::Serialize;
use std::collections::BTreeMap;

/// A single node in the document tree.
///
/// Every node carries the same three fields regardless of kind: the kind tag
/// (with per-kind payload), an attribute bag for injected metadata such as
/// `class` and `id`, and its children. Children are exclusively owned by their
/// parent, so the tree is acyclic by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// The closed set of node kinds the processor understands.
///
/// Kinds the passes have no interest in (block quotes, code, breaks rendered
/// as text) still occur in the tree and pass through unannotated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NodeKind {
    Document,
    Heading { level: u8 },
    Paragraph,
    BlockQuote,
    ListBlock { ordered: bool },
    ListItem,
    CodeBlock { info: Option<String>, literal: String },
    ThematicBreak,
    Table,
    TableRow { header: bool },
    TableCell { header: bool, align: CellAlignment },
    Link { url: String },
    Image { url: String, title: Option<String> },
    Emphasis,
    Strong,
    Strikethrough,
    Code(String),
    Text(String),
}

/// Alignment of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CellAlignment {
    None,
    Left,
    Center,
    Right,
}

impl CellAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            CellAlignment::None => "none",
            CellAlignment::Left => "left",
            CellAlignment::Center => "center",
            CellAlignment::Right => "right",
        }
    }
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
            children,
        }
    }

    /// Shorthand for a plain text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(text.into()))
    }

    /// The URL of a web-resource node (link or image).
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Link { url } | NodeKind::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Mutable access to the URL of a web-resource node.
    pub fn url_mut(&mut self) -> Option<&mut String> {
        match &mut self.kind {
            NodeKind::Link { url } | NodeKind::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Sets an attribute, replacing any previous value under the same key.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Concatenates the descendant text of this node.
    ///
    /// Image subtrees are skipped entirely so alt and caption text never leaks
    /// into slugs, titles or TOC entries.
    pub fn flatten_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    /// The flattened text, or `None` when it is empty or whitespace-only, so
    /// callers can tell "no text" apart from a legitimately empty string.
    pub fn text_content(&self) -> Option<String> {
        let text = self.flatten_text();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Image { .. } => {}
            NodeKind::Text(text) | NodeKind::Code(text) => out.push_str(text),
            _ => {
                for child in &self.children {
                    child.collect_text(out);
                }
            }
        }
    }
}
