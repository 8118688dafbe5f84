//! Generic CSS class assignment, keyed on node kind.

use crate::processor::Session;
use crate::routes::SiteRoutes;
use crate::tree::{Node, NodeKind, Phase};

impl<R: SiteRoutes> Session<'_, R> {
    /// Assigns the kind-derived class on Leave.
    ///
    /// Last in the pass order, and a no-op for nodes that already carry a
    /// `class` (figure nodes, reprocessed trees). Kinds outside the map pass
    /// through unannotated.
    pub(crate) fn assign_class(&mut self, node: &mut Node, phase: Phase) {
        if phase != Phase::Leave || node.has_attribute("class") {
            return;
        }

        let class = match &node.kind {
            NodeKind::ListBlock { .. } => self.block_class("list"),
            NodeKind::ListItem => {
                let base = self.block_class("list-item");
                if self.list_level > 1 {
                    format!("{base} {base}--deep")
                } else {
                    base
                }
            }
            NodeKind::Heading { level } => {
                let base = self.block_class("header");
                format!("{base} {base}--{level}")
            }
            NodeKind::Paragraph => self.block_class("paragraph"),
            NodeKind::Image { .. } => self.block_class("image"),
            NodeKind::Link { .. } => self.block_class("link"),
            NodeKind::Table => self.block_class("table"),
            NodeKind::TableCell { header, align } => {
                let base = self.block_class("table-data");
                let mut class = format!("{base} {base}--{}", align.as_str());
                if *header {
                    class.push(' ');
                    class.push_str(&base);
                    class.push_str("--header");
                }
                class
            }
            _ => return,
        };
        node.set_attribute("class", class);
    }
}
