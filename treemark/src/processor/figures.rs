//! Figure detection: a paragraph whose sole child is an image.

use crate::processor::Session;
use crate::routes::SiteRoutes;
use crate::tree::{Node, NodeKind, Phase};

impl<R: SiteRoutes> Session<'_, R> {
    /// Marks single-image paragraphs as figures and appends a caption child
    /// when the image carries a non-blank title.
    ///
    /// The classes land before the generic class pass reaches either node, so
    /// that pass (which skips anything already classed) leaves them alone. The
    /// caption is appended mid-visit; the walk's snapshot keeps it out of the
    /// in-flight traversal.
    pub(crate) fn detect_figure(&mut self, node: &mut Node, phase: Phase) {
        if phase != Phase::Enter
            || !matches!(node.kind, NodeKind::Paragraph)
            || node.children.len() != 1
        {
            return;
        }

        let caption = {
            let image = &mut node.children[0];
            let NodeKind::Image { title, .. } = &image.kind else {
                return;
            };
            let caption = title
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_owned);
            image.set_attribute("class", self.block_class("figure-image"));
            caption
        };

        node.set_attribute("class", self.block_class("figure-container"));

        if let Some(text) = caption {
            let mut emphasis = Node::with_children(NodeKind::Emphasis, vec![Node::text(text)]);
            emphasis.set_attribute("class", self.block_class("figure-caption"));
            node.children.push(emphasis);
        }
    }
}
