//! Wiki URL resolution.
//!
//! URLs of the shape `(/help)?/wiki/<first>[/<rest>][?query][#fragment]` are
//! resolved against the site's wiki: image asset paths route through the image
//! server, page paths become canonical page URLs, and canonical URLs under the
//! session's wiki base collapse to a document-relative form. The query and
//! fragment of the original URL are carried over verbatim, never re-derived.

use crate::error::ProcessError;
use crate::processor::Session;
use crate::routes::SiteRoutes;
use crate::tree::{Node, Phase};

struct WikiTarget {
    locale: Option<String>,
    path: String,
    /// Original query including the leading `?`, or empty.
    query: String,
    /// Original fragment including the leading `#`, or empty.
    fragment: String,
}

impl<R: SiteRoutes> Session<'_, R> {
    pub(crate) fn resolve_wiki_url(
        &mut self,
        node: &mut Node,
        phase: Phase,
    ) -> Result<(), ProcessError> {
        if phase != Phase::Enter {
            return Ok(());
        }
        let target = match node.url().and_then(|url| split_wiki_url(url, self.routes)) {
            Some(target) => target,
            None => return Ok(()),
        };

        let locale = target
            .locale
            .or_else(|| self.options.wiki_locale.clone())
            .unwrap_or_else(|| self.options.fallback_locale.clone());

        let resolved = if self.routes.is_wiki_image_path(&target.path) {
            self.routes.image_route(&target.path)?
        } else {
            let mut page_url = self.routes.wiki_page_url(&target.path, &locale)?;
            if let (Some(base), Some(relative)) = (&self.wiki_base_path, &self.wiki_relative_path)
            {
                let prefix = format!("{base}/");
                if let Some(suffix) = page_url.strip_prefix(&prefix).map(str::to_owned) {
                    page_url = format!("{relative}{suffix}");
                }
            }
            page_url
        };

        if let Some(url) = node.url_mut() {
            *url = format!("{resolved}{}{}", target.query, target.fragment);
        }
        Ok(())
    }
}

/// Structured match of the wiki URL shape; `None` leaves the URL untouched.
fn split_wiki_url<R: SiteRoutes>(url: &str, routes: &R) -> Option<WikiTarget> {
    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, format!("#{fragment}")),
        None => (url, String::new()),
    };
    let (path_part, query) = match rest.split_once('?') {
        Some((path, query)) => (path, format!("?{query}")),
        None => (rest, String::new()),
    };

    let path_part = path_part.strip_prefix("/help").unwrap_or(path_part);
    let tail = path_part.strip_prefix("/wiki/")?;
    if tail.is_empty() {
        return None;
    }

    // The first segment is the locale only when the site recognizes it;
    // otherwise it is part of the page path.
    let (locale, path) = match tail.split_once('/') {
        Some((first, rest)) if routes.is_valid_locale(first) => {
            (Some(first.to_string()), rest.to_string())
        }
        Some(_) => (None, tail.to_string()),
        None if routes.is_valid_locale(tail) => (Some(tail.to_string()), String::new()),
        None => (None, tail.to_string()),
    };

    Some(WikiTarget {
        locale,
        path,
        query,
        fragment,
    })
}
