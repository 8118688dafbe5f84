//! The per-document processing session.
//!
//! One document gets one session: it owns every piece of state that crosses
//! node boundaries (title and first-image latches, the accumulated TOC and its
//! slug counters, list nesting depth, wiki path geometry) and applies the
//! rewrite passes to every (node, phase) emission of the traversal.
//!
//! Pass order is fixed. For every emission the session runs, in this order:
//!
//! 1. locale-link rewrite          (links.rs)
//! 2. relative-URL fixup           (links.rs)
//! 3. wiki-URL resolution          (wiki.rs)
//! 4. image proxy                  (images.rs)
//! 5. first-image recorder         (images.rs, records the proxied URL)
//! 6. list-depth tracker
//! 7. title extractor              (headings.rs)
//! 8. TOC collector                (headings.rs)
//! 9. figure detection             (figures.rs)
//! 10. CSS class assignment        (classes.rs, always last)
//!
//! Each pass filters on (kind, phase) itself, so the ordering above is the
//! whole scheduling story. The proxy-before-recorder choice is deliberate:
//! the recorded first image is the URL a renderer would actually emit.

mod classes;
mod figures;
mod headings;
mod images;
mod links;
mod wiki;

use crate::error::ProcessError;
use crate::routes::SiteRoutes;
use crate::tree::{walk, Node, NodeKind, Phase};
use serde::Serialize;
use std::collections::HashMap;

/// Options controlling a single processing run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOptions {
    /// CSS block prefix for injected classes, e.g. `md` → `md__paragraph`.
    pub block_name: String,
    /// URL root prepended to relative links and images, without trailing slash.
    pub relative_url_root: Option<String>,
    /// Locale of the wiki tree the document lives in, if any.
    pub wiki_locale: Option<String>,
    /// Locale used when a wiki URL names none and `wiki_locale` is unset.
    pub fallback_locale: String,
    /// Collect a table of contents from headings of level 1-3.
    pub generate_toc: bool,
    /// Record the first image URL encountered in document order.
    pub record_first_image: bool,
    /// Take the document title from the first heading with text.
    pub title_from_document: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            block_name: "md".to_string(),
            relative_url_root: None,
            wiki_locale: None,
            fallback_locale: "en".to_string(),
            generate_toc: true,
            record_first_image: true,
            title_from_document: true,
        }
    }
}

/// One table-of-contents entry, in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocEntry {
    pub slug: String,
    pub title: String,
    pub level: u8,
}

/// Accumulated results of one processing run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessOutput {
    pub title: Option<String>,
    pub toc: Vec<TocEntry>,
    pub first_image: Option<String>,
}

/// Processes one document tree in place and returns the extracted metadata.
///
/// The tree is mutated: URLs rewritten, `class`/`id` attributes injected,
/// figure captions appended. A failing route collaborator aborts processing
/// and leaves the tree partially rewritten; rerun from a fresh parse instead
/// of resuming.
pub fn process<R: SiteRoutes>(
    root: &mut Node,
    options: &ProcessOptions,
    routes: &R,
) -> Result<ProcessOutput, ProcessError> {
    let mut session = Session::new(options, routes)?;
    walk(root, &mut |node, phase| session.apply(node, phase))?;
    Ok(session.into_output())
}

pub(crate) struct Session<'a, R: SiteRoutes> {
    pub(crate) options: &'a ProcessOptions,
    pub(crate) routes: &'a R,
    pub(crate) title: Option<String>,
    pub(crate) toc: Vec<TocEntry>,
    pub(crate) toc_slugs: HashMap<String, u32>,
    pub(crate) first_image: Option<String>,
    pub(crate) list_level: usize,
    pub(crate) wiki_base_path: Option<String>,
    pub(crate) wiki_relative_path: Option<String>,
}

impl<'a, R: SiteRoutes> Session<'a, R> {
    fn new(options: &'a ProcessOptions, routes: &'a R) -> Result<Self, ProcessError> {
        let (wiki_base_path, wiki_relative_path) = match wiki_geometry(options, routes)? {
            Some((base, relative)) => (Some(base), Some(relative)),
            None => (None, None),
        };

        Ok(Self {
            options,
            routes,
            title: None,
            toc: Vec::new(),
            toc_slugs: HashMap::new(),
            first_image: None,
            list_level: 0,
            wiki_base_path,
            wiki_relative_path,
        })
    }

    fn apply(&mut self, node: &mut Node, phase: Phase) -> Result<(), ProcessError> {
        self.rewrite_locale_link(node, phase);
        self.fix_relative_url(node, phase);
        self.resolve_wiki_url(node, phase)?;
        self.proxy_image(node, phase)?;
        self.record_first_image(node, phase);
        self.track_list_level(node, phase);
        self.extract_title(node, phase);
        self.collect_toc(node, phase);
        self.detect_figure(node, phase);
        self.assign_class(node, phase);
        Ok(())
    }

    fn track_list_level(&mut self, node: &Node, phase: Phase) {
        if !matches!(node.kind, NodeKind::ListBlock { .. }) {
            return;
        }
        match phase {
            Phase::Enter => self.list_level += 1,
            Phase::Leave => self.list_level = self.list_level.saturating_sub(1),
        }
    }

    pub(crate) fn block_class(&self, modifier: &str) -> String {
        format!("{}__{modifier}", self.options.block_name)
    }

    fn into_output(self) -> ProcessOutput {
        ProcessOutput {
            title: self.title,
            toc: self.toc,
            first_image: self.first_image,
        }
    }
}

/// Derives the wiki base path and the `./` / `../…` prefix that turns a
/// canonical wiki page URL into one relative to the current document.
///
/// The geometry only exists when the session has a wiki locale and the
/// document's URL root is the wiki base (or nested under it); anything else
/// disables the relative shortcut rather than erroring.
fn wiki_geometry<R: SiteRoutes>(
    options: &ProcessOptions,
    routes: &R,
) -> Result<Option<(String, String)>, ProcessError> {
    let locale = match &options.wiki_locale {
        Some(locale) => locale,
        None => return Ok(None),
    };
    let base = routes.wiki_root_url(locale)?;
    let root = options.relative_url_root.as_deref().unwrap_or("");
    let under_base = root == base
        || root
            .strip_prefix(&base)
            .is_some_and(|rest| rest.starts_with('/'));
    if !under_base {
        return Ok(None);
    }

    let hops = pathdiff::diff_paths(&base, root)
        .map(|path| path.components().count())
        .unwrap_or(0);
    let relative = if hops == 0 {
        "./".to_string()
    } else {
        "../".repeat(hops)
    };
    Ok(Some((base, relative)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::ConfiguredRoutes;

    fn options_with_root(root: &str) -> ProcessOptions {
        ProcessOptions {
            wiki_locale: Some("en".to_string()),
            relative_url_root: Some(root.to_string()),
            ..ProcessOptions::default()
        }
    }

    #[test]
    fn geometry_at_the_wiki_root_is_dot_slash() {
        let routes = ConfiguredRoutes::default();
        let geometry = wiki_geometry(&options_with_root("/wiki/en"), &routes).unwrap();
        assert_eq!(
            geometry,
            Some(("/wiki/en".to_string(), "./".to_string()))
        );
    }

    #[test]
    fn geometry_counts_parent_hops() {
        let routes = ConfiguredRoutes::default();
        let geometry = wiki_geometry(&options_with_root("/wiki/en/Interface"), &routes).unwrap();
        assert_eq!(
            geometry,
            Some(("/wiki/en".to_string(), "../".to_string()))
        );

        let geometry =
            wiki_geometry(&options_with_root("/wiki/en/Client/Interface"), &routes).unwrap();
        assert_eq!(
            geometry,
            Some(("/wiki/en".to_string(), "../../".to_string()))
        );
    }

    #[test]
    fn geometry_requires_a_locale_and_a_nested_root() {
        let routes = ConfiguredRoutes::default();

        let no_locale = ProcessOptions {
            relative_url_root: Some("/wiki/en".to_string()),
            ..ProcessOptions::default()
        };
        assert_eq!(wiki_geometry(&no_locale, &routes).unwrap(), None);

        let elsewhere = options_with_root("/news");
        assert_eq!(wiki_geometry(&elsewhere, &routes).unwrap(), None);

        // "/wiki/enx" shares the string prefix but is not nested under "/wiki/en".
        let lookalike = options_with_root("/wiki/enx");
        assert_eq!(wiki_geometry(&lookalike, &routes).unwrap(), None);
    }
}
