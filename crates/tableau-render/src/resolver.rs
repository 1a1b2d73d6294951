//! Template name resolution against ordered search paths.
//!
//! A [`TemplateResolver`] maps a logical template name (`"header"`,
//! `"blog/post"`) to a concrete file. The default [`SearchPathResolver`]
//! checks `dir/name + suffix` for each configured directory in order; the
//! first existing file wins, so earlier directories shadow later ones.
//!
//! ```rust,ignore
//! use tableau_render::{SearchPathResolver, TemplateResolver};
//!
//! let resolver = SearchPathResolver::new(["./theme/views", "./views"], ".jinja");
//! // ./theme/views/header.jinja if present, else ./views/header.jinja
//! let path = resolver.resolve("header")?;
//! ```

use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// Maps a logical template name to a template file.
pub trait TemplateResolver {
    /// Resolves `name` to a path, or fails with [`RenderError::TemplateNotFound`].
    fn resolve(&self, name: &str) -> Result<PathBuf, RenderError>;
}

/// Resolves names by probing an ordered list of directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPathResolver {
    paths: Vec<PathBuf>,
    suffix: String,
}

impl SearchPathResolver {
    /// Creates a resolver over `paths` (searched in order) appending `suffix`
    /// to every name.
    pub fn new<I, P>(paths: I, suffix: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            suffix: suffix.into(),
        }
    }

    /// The configured search directories, in priority order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// The suffix appended to template names.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    fn candidate(&self, dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}{}", name, self.suffix))
    }
}

impl TemplateResolver for SearchPathResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf, RenderError> {
        for dir in &self.paths {
            let file = self.candidate(dir, name);
            if file.is_file() {
                tracing::trace!(name, path = %file.display(), "resolved template");
                return Ok(file);
            }
        }

        Err(RenderError::TemplateNotFound(format!(
            "could not find template file '{}'",
            name
        )))
    }
}
