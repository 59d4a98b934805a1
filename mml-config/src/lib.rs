//! Shared configuration loader for the mml toolchain.
//!
//! `defaults/mml.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`MmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mml_babel::ValidationLimits;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mml.default.toml");

/// Top-level configuration consumed by mml applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MmlConfig {
    pub check: CheckConfig,
    pub validate: ValidateConfig,
}

/// Regression-check configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    /// Path of the golden-set file (overridable with --golden-set).
    pub golden_set: String,
}

/// Mirrors the knobs exposed by the validator.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateConfig {
    pub mathspeak_error_threshold: f64,
    pub nesting_warn_depth: usize,
    pub length_warn_chars: usize,
}

impl From<ValidateConfig> for ValidationLimits {
    fn from(config: ValidateConfig) -> Self {
        ValidationLimits {
            mathspeak_error_threshold: config.mathspeak_error_threshold,
            nesting_warn_depth: config.nesting_warn_depth,
            length_warn_chars: config.length_warn_chars,
        }
    }
}

impl From<&ValidateConfig> for ValidationLimits {
    fn from(config: &ValidateConfig) -> Self {
        ValidationLimits {
            mathspeak_error_threshold: config.mathspeak_error_threshold,
            nesting_warn_depth: config.nesting_warn_depth,
            length_warn_chars: config.length_warn_chars,
        }
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
    pub fn build(self) -> Result<MmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MmlConfig, ConfigError> {
    Loader::new().build()
}
