//! Locale-prefixed link rewriting and relative-URL fixup.

use crate::processor::Session;
use crate::routes::SiteRoutes;
use crate::tree::{Node, NodeKind, Phase};

impl<R: SiteRoutes> Session<'_, R> {
    /// Rewrites `xx:rest` and `xx-yy:rest` links to `rest?locale=xx[-yy]`.
    ///
    /// Runs before wiki resolution in the fixed pass order; the two patterns
    /// cannot match the same URL, the ordering is fixed for determinism only.
    pub(crate) fn rewrite_locale_link(&mut self, node: &mut Node, phase: Phase) {
        if phase != Phase::Enter || !matches!(node.kind, NodeKind::Link { .. }) {
            return;
        }
        let Some(url) = node.url_mut() else { return };

        let rewritten =
            split_locale_prefix(url).map(|(locale, rest)| format!("{rest}?locale={locale}"));
        if let Some(new_url) = rewritten {
            *url = new_url;
        }
    }

    /// Prepends the configured URL root to relative links and images.
    ///
    /// Anchors, absolute paths and external/mail links are left untouched; a
    /// leading `./` is dropped before the root goes on.
    pub(crate) fn fix_relative_url(&mut self, node: &mut Node, phase: Phase) {
        if phase != Phase::Enter {
            return;
        }
        let Some(root) = self.options.relative_url_root.as_deref() else {
            return;
        };
        let Some(url) = node.url_mut() else { return };
        if is_absolute_ish(url) {
            return;
        }

        let rebased = {
            let trimmed = url.strip_prefix("./").unwrap_or(url);
            format!("{root}/{trimmed}")
        };
        *url = rebased;
    }
}

fn is_absolute_ish(url: &str) -> bool {
    url.starts_with('#')
        || url.starts_with('/')
        || url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("mailto:")
}

/// Splits a scheme-like locale prefix: two lowercase ASCII letters, an
/// optional `-` plus two more, then `:` and a non-empty remainder.
fn split_locale_prefix(url: &str) -> Option<(&str, &str)> {
    let (prefix, rest) = url.split_once(':')?;
    if rest.is_empty() {
        return None;
    }
    let valid = prefix.is_ascii()
        && match prefix.len() {
            2 => prefix.bytes().all(|b| b.is_ascii_lowercase()),
            5 => {
                prefix.as_bytes()[2] == b'-'
                    && prefix[..2].bytes().all(|b| b.is_ascii_lowercase())
                    && prefix[3..].bytes().all(|b| b.is_ascii_lowercase())
            }
            _ => false,
        };
    valid.then_some((prefix, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_prefixes_match_the_two_letter_shapes() {
        assert_eq!(split_locale_prefix("es:Some/Path"), Some(("es", "Some/Path")));
        assert_eq!(
            split_locale_prefix("pt-br:Page"),
            Some(("pt-br", "Page"))
        );
        assert_eq!(split_locale_prefix("http://example.com"), None);
        assert_eq!(split_locale_prefix("eng:Page"), None);
        assert_eq!(split_locale_prefix("ES:Page"), None);
        assert_eq!(split_locale_prefix("es:"), None);
        assert_eq!(split_locale_prefix("no-colon"), None);
    }

    #[test]
    fn absolute_ish_urls_are_recognized() {
        for url in ["#anchor", "/rooted", "http://x", "https://x", "mailto:a@b"] {
            assert!(is_absolute_ish(url), "{url}");
        }
        for url in ["page", "./page", "../page", "ftp://x"] {
            assert!(!is_absolute_ish(url), "{url}");
        }
    }
}
