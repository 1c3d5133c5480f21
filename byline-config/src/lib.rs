//! Shared configuration loader for the byline toolchain.
//!
//! `defaults/byline.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`BylineConfig`].

use byline_doc::post::PostLimits;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/byline.default.toml");

/// Top-level configuration consumed by byline applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BylineConfig {
    pub limits: LimitsConfig,
    pub render: RenderConfig,
}

/// Mirrors the size ceilings applied by post validation.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub title_max: usize,
    pub description_max: usize,
    pub tags_max: usize,
    pub slug_max: usize,
    pub featured_tags_max: usize,
}

impl From<LimitsConfig> for PostLimits {
    fn from(config: LimitsConfig) -> Self {
        PostLimits {
            title_max: config.title_max,
            description_max: config.description_max,
            tags_max: config.tags_max,
            slug_max: config.slug_max,
            featured_tags_max: config.featured_tags_max,
        }
    }
}

impl From<&LimitsConfig> for PostLimits {
    fn from(config: &LimitsConfig) -> Self {
        PostLimits {
            title_max: config.title_max,
            description_max: config.description_max,
            tags_max: config.tags_max,
            slug_max: config.slug_max,
            featured_tags_max: config.featured_tags_max,
        }
    }
}

/// Projection-specific knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub standalone: bool,
    pub custom_css: Option<String>,
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
    pub fn build(self) -> Result<BylineConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BylineConfig, ConfigError> {
    Loader::new().build()
}
