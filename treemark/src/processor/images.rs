//! Image proxying and first-image recording.

use crate::error::ProcessError;
use crate::processor::Session;
use crate::routes::SiteRoutes;
use crate::tree::{Node, NodeKind, Phase};

impl<R: SiteRoutes> Session<'_, R> {
    /// Routes every non-blank image URL through the media proxy collaborator.
    pub(crate) fn proxy_image(
        &mut self,
        node: &mut Node,
        phase: Phase,
    ) -> Result<(), ProcessError> {
        if phase != Phase::Enter || !matches!(node.kind, NodeKind::Image { .. }) {
            return Ok(());
        }
        let current = match node.url() {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => return Ok(()),
        };

        let proxied = self.routes.proxy_media_url(&current)?;
        if let Some(url) = node.url_mut() {
            *url = proxied;
        }
        Ok(())
    }

    /// Latches the URL of the first image in document order.
    ///
    /// Runs after the proxy pass, so the recorded URL is the proxied one.
    pub(crate) fn record_first_image(&mut self, node: &mut Node, phase: Phase) {
        if phase != Phase::Enter
            || !self.options.record_first_image
            || self.first_image.is_some()
        {
            return;
        }
        if let NodeKind::Image { url, .. } = &node.kind {
            self.first_image = Some(url.clone());
        }
    }
}
