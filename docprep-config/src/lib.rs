//! Shared configuration loader for docprep.
//!
//! `defaults/docprep.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. The CLI layers an optional `docprep.toml`
//! from the working directory on top via [`Loader`] before deserializing into
//! [`DocprepConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/docprep.default.toml");

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "docprep.toml";

/// Top-level configuration consumed by docprep.
#[derive(Debug, Clone, Deserialize)]
pub struct DocprepConfig {
    pub logging: LoggingConfig,
}

/// Diagnostics written to stderr.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset.
    pub level: String,
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

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DocprepConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DocprepConfig, ConfigError> {
    Loader::new().build()
}

/// Defaults plus `docprep.toml` from `dir`, if present.
pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<DocprepConfig, ConfigError> {
    Loader::new()
        .with_optional_file(dir.as_ref().join(CONFIG_FILE_NAME))
        .build()
}
