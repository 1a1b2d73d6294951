//! Rendering of a single view entry.
//!
//! [`render_entry`] dispatches on the entry's [`ViewSource`]:
//!
//! | Source | Needs | Fails with |
//! |--------|-------|------------|
//! | `File` | a [`ViewContext`] | `MissingContext`, or the engine's own error |
//! | `Callback` | a callable | `InvalidCallback` |
//! | `String` | nothing | never (apart from sink I/O) |
//! | `Unknown` | - | `UnknownVariant` |
//!
//! Successful renders write to the given [`OutputSink`].

use std::collections::HashMap;

use tableau_render::{OutputSink, TemplateEngine};

use super::entry::{ViewEntry, ViewSource};
use crate::error::{Result, ViewError};

/// Resources file views need to run the template engine.
///
/// Besides the engine itself, a context carries global values made
/// available to every file view. A view's own data wins over a global
/// with the same key.
pub struct ViewContext<'a> {
    engine: &'a dyn TemplateEngine,
    globals: HashMap<String, serde_json::Value>,
}

impl<'a> ViewContext<'a> {
    pub fn new(engine: &'a dyn TemplateEngine) -> Self {
        Self {
            engine,
            globals: HashMap::new(),
        }
    }

    /// Adds a global value visible to all file views.
    pub fn with_global(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.globals.insert(key.into(), value);
        self
    }

    pub fn engine(&self) -> &dyn TemplateEngine {
        self.engine
    }

    pub fn globals(&self) -> &HashMap<String, serde_json::Value> {
        &self.globals
    }
}

/// Renders one entry into `sink`.
pub fn render_entry(
    entry: &ViewEntry,
    ctx: Option<&ViewContext<'_>>,
    sink: &mut OutputSink,
) -> Result<()> {
    match entry.source() {
        ViewSource::File(path) => {
            let ctx = ctx.ok_or(ViewError::MissingContext)?;
            let output = ctx.engine().render_file(path, entry.data(), ctx.globals())?;
            sink.write_str(&output)?;
        }
        ViewSource::Callback(callback) => {
            let callback = callback.as_ref().ok_or(ViewError::InvalidCallback)?;
            sink.write_str(&callback())?;
        }
        ViewSource::String(text) => {
            sink.write_str(text)?;
        }
        ViewSource::Unknown(kind) => {
            return Err(ViewError::UnknownVariant(kind.clone()));
        }
    }
    Ok(())
}
