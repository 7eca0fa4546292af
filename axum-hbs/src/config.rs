//! Engine configuration.
//!
//! The configuration is supplied once, at engine construction time,
//! and never mutated afterwards. All fields are optional:
//!
//! ```
//! use axum_hbs::EngineConfig;
//!
//! let config = EngineConfig::new()
//!     .layouts_dir("templates/layouts")
//!     .partials_dir("templates/partials")
//!     .default_layout("main");
//! ```
//!
//! The same record can be loaded from a TOML file with [`EngineConfig::load`]:
//!
//! ```toml
//! extension = "hbs"
//! layouts_dir = "templates/layouts"
//! partials_dir = "templates/partials"
//! default_layout = "main"
//! ```
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

/// Template file suffix used when none is configured.
pub const DEFAULT_EXTENSION: &str = "hbs";

/// View engine options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Template file suffix, without the leading dot. Defaults to `hbs`.
    pub extension: Option<String>,

    /// Directory scanned for layout templates at engine construction.
    pub layouts_dir: Option<PathBuf>,

    /// Layout used when the render options don't select one.
    pub default_layout: Option<String>,

    /// Directory scanned for partial templates at engine construction.
    pub partials_dir: Option<PathBuf>,
}

impl EngineConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn extension(mut self, extension: impl ToString) -> Self {
        self.extension = Some(extension.to_string());
        self
    }

    pub fn layouts_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.layouts_dir = Some(dir.as_ref().to_owned());
        self
    }

    pub fn default_layout(mut self, name: impl ToString) -> Self {
        self.default_layout = Some(name.to_string());
        self
    }

    pub fn partials_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.partials_dir = Some(dir.as_ref().to_owned());
        self
    }
}
