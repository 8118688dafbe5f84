//! Markdown ingestion (CommonMark → document tree)
//!
//! Pipeline: Markdown string → Comrak AST → Node tree. The processor itself
//! never sees comrak; this adapter is the only place that does, and callers
//! with another parser can build the tree themselves.

use crate::tree::{CellAlignment, Node, NodeKind};
use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parses CommonMark source into a document tree.
pub fn parse_markdown(source: &str) -> Node {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);

    let mut document = Node::new(NodeKind::Document);
    for child in root.children() {
        append_node(child, &mut document.children);
    }
    document
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
}

/// Converts one Comrak node (and its subtree) into tree nodes.
fn append_node<'a>(node: &'a AstNode<'a>, out: &mut Vec<Node>) {
    let data = node.data.borrow();

    match &data.value {
        NodeValue::Document => {
            for child in node.children() {
                append_node(child, out);
            }
        }

        NodeValue::Heading(heading) => out.push(container(
            NodeKind::Heading {
                level: heading.level,
            },
            node,
        )),

        NodeValue::Paragraph => out.push(container(NodeKind::Paragraph, node)),

        NodeValue::BlockQuote => out.push(container(NodeKind::BlockQuote, node)),

        NodeValue::List(list) => out.push(container(
            NodeKind::ListBlock {
                ordered: matches!(list.list_type, ListType::Ordered),
            },
            node,
        )),

        NodeValue::Item(_) => out.push(container(NodeKind::ListItem, node)),

        NodeValue::CodeBlock(code) => {
            let info = if code.info.is_empty() {
                None
            } else {
                Some(code.info.clone())
            };
            out.push(Node::new(NodeKind::CodeBlock {
                info,
                literal: code.literal.clone(),
            }));
        }

        NodeValue::ThematicBreak => out.push(Node::new(NodeKind::ThematicBreak)),

        NodeValue::Table(_) => out.push(container(NodeKind::Table, node)),

        NodeValue::TableRow(header) => {
            out.push(container(NodeKind::TableRow { header: *header }, node))
        }

        NodeValue::TableCell => {
            let (header, align) = table_cell_info(node);
            out.push(container(NodeKind::TableCell { header, align }, node));
        }

        NodeValue::Text(text) => out.push(Node::text(text.clone())),

        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(Node::text(" ")),

        NodeValue::Code(code) => out.push(Node::new(NodeKind::Code(code.literal.clone()))),

        NodeValue::Emph => out.push(container(NodeKind::Emphasis, node)),

        NodeValue::Strong => out.push(container(NodeKind::Strong, node)),

        NodeValue::Strikethrough => out.push(container(NodeKind::Strikethrough, node)),

        NodeValue::Link(link) => out.push(container(
            NodeKind::Link {
                url: link.url.clone(),
            },
            node,
        )),

        NodeValue::Image(link) => {
            let title = if link.title.is_empty() {
                None
            } else {
                Some(link.title.clone())
            };
            out.push(container(
                NodeKind::Image {
                    url: link.url.clone(),
                    title,
                },
                node,
            ));
        }

        // Anything else (raw HTML, front matter, footnotes) has no tree kind;
        // splice its children through so no text content is lost.
        _ => {
            for child in node.children() {
                append_node(child, out);
            }
        }
    }
}

fn container<'a>(kind: NodeKind, node: &'a AstNode<'a>) -> Node {
    let mut children = Vec::new();
    for child in node.children() {
        append_node(child, &mut children);
    }
    Node::with_children(kind, children)
}

/// Recovers a cell's header flag and alignment from its row and table.
fn table_cell_info<'a>(node: &'a AstNode<'a>) -> (bool, CellAlignment) {
    let parent = match node.parent() {
        Some(parent) => parent,
        None => return (false, CellAlignment::None),
    };
    let header = matches!(parent.data.borrow().value, NodeValue::TableRow(true));

    let mut column = 0;
    let mut current = node.previous_sibling();
    while let Some(sibling) = current {
        column += 1;
        current = sibling.previous_sibling();
    }

    let grandparent = match parent.parent() {
        Some(grandparent) => grandparent,
        None => return (header, CellAlignment::None),
    };
    let align = if let NodeValue::Table(table) = &grandparent.data.borrow().value {
        match table.alignments.get(column) {
            Some(TableAlignment::Left) => CellAlignment::Left,
            Some(TableAlignment::Right) => CellAlignment::Right,
            Some(TableAlignment::Center) => CellAlignment::Center,
            _ => CellAlignment::None,
        }
    } else {
        CellAlignment::None
    };

    (header, align)
}
