//! Error types for view construction and rendering.

use tableau_render::RenderError;
use thiserror::Error;

/// Errors raised while adding or rendering views.
///
/// Nothing here is retried or recovered from: a failure while rendering a
/// region aborts the remaining views of that region.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A file view's template name was not found in any search path.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// A file view was rendered without a rendering context.
    #[error("file view rendered without a rendering context")]
    MissingContext,

    /// A callback view holds nothing to invoke.
    #[error("callback view has no callable callback")]
    InvalidCallback,

    /// A view was built with a type that no renderer handles.
    #[error("not a valid view type: {0}")]
    UnknownVariant(String),

    /// The template engine failed while rendering a file view.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Writing rendered output to the sink failed.
    #[error("failed to write view output: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ViewError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type for view operations.
pub type Result<T> = std::result::Result<T, ViewError>;
