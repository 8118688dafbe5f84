//! Shared configuration loader for the treemark toolchain.
//!
//! `defaults/treemark.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`TreemarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use treemark::{ConfiguredRoutes, ProcessOptions};

const DEFAULT_TOML: &str = include_str!("../defaults/treemark.default.toml");

/// Top-level configuration consumed by treemark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TreemarkConfig {
    pub processor: ProcessorConfig,
    pub routes: RoutesConfig,
}

/// Mirrors the knobs exposed by the document processor.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessorConfig {
    pub block_name: String,
    pub relative_url_root: Option<String>,
    pub wiki_locale: Option<String>,
    pub fallback_locale: String,
    pub generate_toc: bool,
    pub record_first_image: bool,
    pub title_from_document: bool,
}

/// Mirrors the knobs of the configured route collaborators.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesConfig {
    pub wiki_base: String,
    pub image_root: String,
    pub proxy_root: String,
    pub locales: Vec<String>,
    pub image_extensions: Vec<String>,
}

impl From<ProcessorConfig> for ProcessOptions {
    fn from(config: ProcessorConfig) -> Self {
        ProcessOptions {
            block_name: config.block_name,
            relative_url_root: config.relative_url_root,
            wiki_locale: config.wiki_locale,
            fallback_locale: config.fallback_locale,
            generate_toc: config.generate_toc,
            record_first_image: config.record_first_image,
            title_from_document: config.title_from_document,
        }
    }
}

impl From<&ProcessorConfig> for ProcessOptions {
    fn from(config: &ProcessorConfig) -> Self {
        config.clone().into()
    }
}

impl From<RoutesConfig> for ConfiguredRoutes {
    fn from(config: RoutesConfig) -> Self {
        ConfiguredRoutes {
            wiki_base: config.wiki_base,
            image_root: config.image_root,
            proxy_root: config.proxy_root,
            locales: config.locales,
            image_extensions: config.image_extensions,
        }
    }
}

impl From<&RoutesConfig> for ConfiguredRoutes {
    fn from(config: &RoutesConfig) -> Self {
        config.clone().into()
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TreemarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TreemarkConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.processor.block_name, "md");
        assert_eq!(config.processor.relative_url_root, None);
        assert_eq!(config.processor.wiki_locale, None);
        assert!(config.processor.generate_toc);
        assert_eq!(config.routes.wiki_base, "/wiki");
        assert!(config.routes.proxy_root.is_empty());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("processor.wiki_locale", "fr")
            .expect("override to apply")
            .set_override("routes.proxy_root", "/media/proxy")
            .expect("override to apply")
            .build()
            .expect("config to build");

        assert_eq!(config.processor.wiki_locale.as_deref(), Some("fr"));
        assert_eq!(config.routes.proxy_root, "/media/proxy");
    }

    #[test]
    fn processor_config_converts_to_process_options() {
        let config = load_defaults().expect("defaults to deserialize");
        let options: ProcessOptions = (&config.processor).into();

        assert_eq!(options, ProcessOptions::default());
    }

    #[test]
    fn routes_config_converts_to_configured_routes() {
        let config = load_defaults().expect("defaults to deserialize");
        let routes: ConfiguredRoutes = config.routes.into();

        assert_eq!(routes, ConfiguredRoutes::default());
    }
}
