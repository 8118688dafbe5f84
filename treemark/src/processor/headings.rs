//! Title extraction and table-of-contents collection.

use crate::processor::{Session, TocEntry};
use crate::routes::SiteRoutes;
use crate::tree::{Node, NodeKind, Phase};

impl<R: SiteRoutes> Session<'_, R> {
    /// Latches the document title from the first heading with text.
    ///
    /// Runs on Leave so the heading's children have already been rewritten;
    /// whitespace-only headings leave the latch open for a later heading.
    pub(crate) fn extract_title(&mut self, node: &mut Node, phase: Phase) {
        if phase != Phase::Leave
            || !self.options.title_from_document
            || self.title.is_some()
            || !matches!(node.kind, NodeKind::Heading { .. })
        {
            return;
        }
        self.title = node.text_content();
    }

    /// Records one TOC entry per qualifying heading and writes the resolved
    /// slug back as the heading's `id` attribute.
    pub(crate) fn collect_toc(&mut self, node: &mut Node, phase: Phase) {
        if phase != Phase::Enter || !self.options.generate_toc {
            return;
        }
        let NodeKind::Heading { level } = &node.kind else {
            return;
        };
        let level = *level;
        if level > 3 {
            return;
        }
        // The title latch is still open when the first heading enters (it only
        // closes on that heading's Leave), so the first heading never records
        // itself. Preserved behavior, covered by tests.
        if self.options.title_from_document && self.title.is_none() {
            return;
        }

        let title = node.flatten_text();
        let slug = self.next_slug(&title);
        node.set_attribute("id", slug.clone());
        self.toc.push(TocEntry { slug, title, level });
    }

    /// Resolves a slug for `title`, disambiguating collisions with a
    /// monotonically increasing per-base counter: `base`, `base.1`, `base.2`.
    fn next_slug(&mut self, title: &str) -> String {
        let base = title.to_lowercase().replace(' ', "-");
        let base = if base.is_empty() {
            "page".to_string()
        } else {
            base
        };

        match self.toc_slugs.get_mut(&base) {
            Some(count) => {
                *count += 1;
                format!("{base}.{count}")
            }
            None => {
                self.toc_slugs.insert(base.clone(), 0);
                base
            }
        }
    }
}
