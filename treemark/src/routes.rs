//! Site route collaborators consumed by the processor.
//!
//! The engine never knows how a site lays out its wiki pages, image assets or
//! media proxy; it asks a [`SiteRoutes`] implementation. Route builders are
//! fallible: an implementation that cannot resolve a route returns an error and
//! the whole document aborts.

use crate::error::ProcessError;

/// The processor's view of the surrounding site.
pub trait SiteRoutes {
    /// Whether `code` names a locale the site serves.
    fn is_valid_locale(&self, code: &str) -> bool;

    /// Whether a wiki-relative path points at an image asset.
    fn is_wiki_image_path(&self, path: &str) -> bool;

    /// URL serving the image asset at the given wiki-relative path.
    fn image_route(&self, path: &str) -> Result<String, ProcessError>;

    /// Canonical URL of the wiki page at `path` for `locale`.
    fn wiki_page_url(&self, path: &str, locale: &str) -> Result<String, ProcessError>;

    /// Canonical URL of the wiki root for `locale`.
    fn wiki_root_url(&self, locale: &str) -> Result<String, ProcessError>;

    /// Rewrites a media URL to go through the site's proxy.
    fn proxy_media_url(&self, url: &str) -> Result<String, ProcessError>;
}

/// A data-driven [`SiteRoutes`] implementation.
///
/// Suitable for sites whose routes are plain path prefixes. The image route is
/// rooted outside the wiki namespace so a rewritten URL is never re-captured
/// by the wiki matcher on a second run, and the proxy passes already-proxied
/// URLs through unchanged for the same reason.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfiguredRoutes {
    /// Prefix under which wiki pages live, e.g. `/wiki`.
    pub wiki_base: String,
    /// Prefix under which wiki image assets are served, e.g. `/assets/wiki`.
    pub image_root: String,
    /// Media proxy endpoint; an empty string disables proxying.
    pub proxy_root: String,
    /// Locales the site serves.
    pub locales: Vec<String>,
    /// File extensions classified as image assets.
    pub image_extensions: Vec<String>,
}

impl Default for ConfiguredRoutes {
    fn default() -> Self {
        Self {
            wiki_base: "/wiki".to_string(),
            image_root: "/assets/wiki".to_string(),
            proxy_root: String::new(),
            locales: ["en", "es", "fr", "ja", "pt-br", "zh"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            image_extensions: ["gif", "jpeg", "jpg", "png"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl SiteRoutes for ConfiguredRoutes {
    fn is_valid_locale(&self, code: &str) -> bool {
        self.locales.iter().any(|locale| locale == code)
    }

    fn is_wiki_image_path(&self, path: &str) -> bool {
        match path.rsplit_once('.') {
            Some((_, extension)) => self
                .image_extensions
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known)),
            None => false,
        }
    }

    fn image_route(&self, path: &str) -> Result<String, ProcessError> {
        Ok(format!("{}/{path}", self.image_root.trim_end_matches('/')))
    }

    fn wiki_page_url(&self, path: &str, locale: &str) -> Result<String, ProcessError> {
        Ok(format!(
            "{}/{locale}/{path}",
            self.wiki_base.trim_end_matches('/')
        ))
    }

    fn wiki_root_url(&self, locale: &str) -> Result<String, ProcessError> {
        Ok(format!(
            "{}/{locale}",
            self.wiki_base.trim_end_matches('/')
        ))
    }

    fn proxy_media_url(&self, url: &str) -> Result<String, ProcessError> {
        if self.proxy_root.is_empty() || url.starts_with(&self.proxy_root) {
            return Ok(url.to_string());
        }
        let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
        Ok(format!("{}?u={encoded}", self.proxy_root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_image_paths_by_extension() {
        let routes = ConfiguredRoutes::default();

        assert!(routes.is_wiki_image_path("Interface/img/cursor.png"));
        assert!(routes.is_wiki_image_path("shot.JPG"));
        assert!(!routes.is_wiki_image_path("Interface"));
        assert!(!routes.is_wiki_image_path("notes.txt"));
    }

    #[test]
    fn builds_wiki_urls_from_prefixes() {
        let routes = ConfiguredRoutes::default();

        assert_eq!(
            routes.wiki_page_url("Some_Page", "en").unwrap(),
            "/wiki/en/Some_Page"
        );
        assert_eq!(routes.wiki_root_url("fr").unwrap(), "/wiki/fr");
        assert_eq!(
            routes.image_route("img/cursor.png").unwrap(),
            "/assets/wiki/img/cursor.png"
        );
    }

    #[test]
    fn proxy_percent_encodes_the_target() {
        let routes = ConfiguredRoutes {
            proxy_root: "/media/proxy".to_string(),
            ..ConfiguredRoutes::default()
        };

        assert_eq!(
            routes.proxy_media_url("https://a.example/x y.png").unwrap(),
            "/media/proxy?u=https%3A%2F%2Fa.example%2Fx+y.png"
        );
    }

    #[test]
    fn proxy_is_a_pass_through_when_disabled_or_already_proxied() {
        let disabled = ConfiguredRoutes::default();
        assert_eq!(
            disabled.proxy_media_url("https://a.example/x.png").unwrap(),
            "https://a.example/x.png"
        );

        let routes = ConfiguredRoutes {
            proxy_root: "/media/proxy".to_string(),
            ..ConfiguredRoutes::default()
        };
        let once = routes.proxy_media_url("https://a.example/x.png").unwrap();
        assert_eq!(routes.proxy_media_url(&once).unwrap(), once);
    }
}
