//! Configuration for view collections.
//!
//! A configuration names where templates live and what setup runs before
//! any view is added:
//!
//! ```yaml
//! path:
//!   - ./theme/views
//!   - ./views
//! suffix: .tpl
//! include:
//!   - ./views/macros.tpl
//! ```
//!
//! - `path`: search directories, in priority order (first match wins)
//! - `suffix`: appended to every template name (default `.jinja`)
//! - `include`: template files registered into the engine once, in order,
//!   under their file stem, so views can `{% include %}` or `{% import %}`
//!   them

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tableau_render::{SearchPathResolver, TemplateEngine};
use tracing::debug;

use crate::error::{Result, ViewError};

/// Default template suffix.
pub const DEFAULT_SUFFIX: &str = ".jinja";

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

/// Search paths, suffix and setup includes for a view collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub path: Vec<PathBuf>,
    #[serde(default = "default_suffix")]
    pub suffix: String,
    #[serde(default)]
    pub include: Vec<PathBuf>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            path: Vec::new(),
            suffix: default_suffix(),
            include: Vec::new(),
        }
    }
}

impl ViewConfig {
    /// A configuration searching `paths` for `name + suffix`.
    pub fn new<I, P>(paths: I, suffix: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            path: paths.into_iter().map(Into::into).collect(),
            suffix: suffix.into(),
            include: Vec::new(),
        }
    }

    /// Adds a file to register into the engine during setup.
    pub fn include(mut self, file: impl Into<PathBuf>) -> Self {
        self.include.push(file.into());
        self
    }

    /// Parses a YAML configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| ViewError::config(e.to_string()))
    }

    /// Parses a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ViewError::config(e.to_string()))
    }

    /// Reads a configuration file, picking the format from its extension.
    ///
    /// `.yaml` and `.yml` are parsed as YAML, `.json` as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ViewError::config(format!("failed to read {}: {}", path.display(), e))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            Some("json") => Self::from_json(&content),
            _ => Err(ViewError::config(format!(
                "unsupported configuration format: {}",
                path.display()
            ))),
        }
    }

    /// A resolver over this configuration's search paths and suffix.
    pub fn resolver(&self) -> SearchPathResolver {
        SearchPathResolver::new(self.path.iter().cloned(), self.suffix.clone())
    }

    /// Registers every `include` file into `engine`, in order.
    ///
    /// Each file is registered under its file stem. The first failure
    /// aborts setup.
    pub fn load_includes(&self, engine: &mut dyn TemplateEngine) -> Result<()> {
        for file in &self.include {
            let name = file
                .file_stem()
                .and_then(|stem| stem.to_str())
                .ok_or_else(|| {
                    ViewError::config(format!("invalid include path: {}", file.display()))
                })?;
            let source = std::fs::read_to_string(file).map_err(|e| {
                ViewError::config(format!("failed to read include {}: {}", file.display(), e))
            })?;

            debug!(name, path = %file.display(), "registering include");
            engine.add_template(name, &source)?;
        }
        Ok(())
    }
}
