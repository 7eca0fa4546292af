//! The view engine.
//!
//! Constructing an [`Engine`] eagerly scans the configured partials
//! directory (every partial is compiled up front) and indexes the layouts
//! directory by file name. Layout contents are read lazily, at render time.
//!
//! The engine owns its Handlebars registry. Nothing in the render path
//! mutates it, so one engine can serve any number of concurrent requests.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde_json::{Map, Value};
use tokio::fs::read_to_string;
use tracing::debug;

use super::helpers;
use crate::config::{EngineConfig, DEFAULT_EXTENSION};
use crate::error::Error;

/// Render options key that selects a layout by name.
pub(crate) const LAYOUT_KEY: &str = "layout";

/// Layout context key holding the rendered view body.
const BODY_KEY: &str = "body";

/// Compiles views against layouts and partials.
pub struct Engine {
    registry: Handlebars<'static>,
    layouts: HashMap<String, PathBuf>,
    default_layout: Option<String>,
    extension: String,
    views: PathBuf,
}

impl Engine {
    /// Create the engine. Scans the partials and layouts directories,
    /// registers the comparison/logic helpers, and builds the layout index.
    pub fn new(config: EngineConfig) -> Result<Self, Error> {
        let extension = config
            .extension
            .clone()
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        let suffix = format!(".{}", extension);

        let mut registry = Handlebars::new();
        helpers::register(&mut registry);

        if let Some(dir) = &config.partials_dir {
            for (name, path) in scan_templates(dir, &suffix)? {
                let source = std::fs::read_to_string(&path)?;
                registry.register_template_string(&name, source)?;
                debug!("registered partial \"{}\" from {}", name, path.display());
            }
        }

        let mut layouts = HashMap::new();

        if let Some(dir) = &config.layouts_dir {
            for (name, path) in scan_templates(dir, &suffix)? {
                debug!("indexed layout \"{}\" at {}", name, path.display());
                layouts.insert(name, path);
            }
        }

        Ok(Self {
            registry,
            layouts,
            default_layout: config.default_layout,
            extension,
            views: PathBuf::from("views"),
        })
    }

    /// Set the directory where views are looked up by name.
    pub fn views(mut self, dir: impl AsRef<Path>) -> Self {
        self.views = dir.as_ref().to_owned();
        self
    }

    /// Template file suffix, without the leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// True if a partial with this name was registered at construction.
    pub fn has_partial(&self, name: &str) -> bool {
        self.registry.get_template(name).is_some()
    }

    /// Path a layout name resolves to, if it was indexed.
    pub fn layout_path(&self, name: &str) -> Option<&Path> {
        self.layouts.get(name).map(|path| path.as_path())
    }

    /// Render a view by name, looked up in the views directory.
    pub async fn render(&self, view: &str, options: &Value) -> Result<String, Error> {
        let path = self.views.join(format!("{}.{}", view, self.extension));
        self.render_path(&path, options).await
    }

    /// Render the view file at this path inside its layout.
    ///
    /// The view is compiled against `options` first; its output travels
    /// to the layout through the `body` context key, which layouts
    /// interpolate with `{{{body}}}`.
    pub async fn render_path(&self, path: &Path, options: &Value) -> Result<String, Error> {
        let source = match read_to_string(path).await {
            Ok(source) => source,
            Err(_) => return Err(Error::TemplateDoesNotExist(path.to_owned())),
        };

        let body = self.registry.render_template(&source, options)?;

        let layout = self.resolve_layout(options)?;
        debug!("{} -> layout {}", path.display(), layout.display());

        let layout_source = match read_to_string(layout).await {
            Ok(source) => source,
            Err(_) => return Err(Error::TemplateDoesNotExist(layout.to_owned())),
        };

        let mut context = match options {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        context.insert(BODY_KEY.to_string(), Value::String(body));

        Ok(self
            .registry
            .render_template(&layout_source, &Value::Object(context))?)
    }

    /// Resolve which layout to use. A requested layout missing from the
    /// index falls back to the default; failure here happens before any
    /// layout I/O is attempted.
    fn resolve_layout(&self, options: &Value) -> Result<&Path, Error> {
        let requested = options.get(LAYOUT_KEY).and_then(|value| value.as_str());

        if let Some(name) = requested {
            if let Some(path) = self.layouts.get(name) {
                return Ok(path);
            }
        }

        match &self.default_layout {
            Some(name) => match self.layouts.get(name) {
                Some(path) => Ok(path),
                None => Err(Error::LayoutNotFound(name.clone())),
            },

            None => match requested {
                Some(name) => Err(Error::LayoutNotFound(name.to_string())),
                None => Err(Error::NoLayout),
            },
        }
    }
}

/// Scan a directory for template files. Returns `(stem, path)` pairs
/// for every file whose name ends in the suffix; everything else is
/// skipped. Not recursive, matching the flat directory contract.
fn scan_templates(dir: &Path, suffix: &str) -> Result<Vec<(String, PathBuf)>, Error> {
    let mut templates = vec![];

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        if let Some(stem) = name.strip_suffix(suffix) {
            templates.push((stem.to_string(), entry.path()));
        }
    }

    Ok(templates)
}
