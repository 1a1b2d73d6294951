//! The view entry model.

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A zero-argument function producing a view's content.
///
/// Callbacks close over whatever data they need; no data mapping is passed
/// to them at render time.
pub type ViewCallback = Rc<dyn Fn() -> String>;

/// How a view produces its output.
#[derive(Clone)]
pub enum ViewSource {
    /// A resolved template file, rendered by the template engine.
    File(PathBuf),
    /// A callback whose return value is written as-is.
    ///
    /// `None` marks a callback view built without anything to call; it
    /// fails when rendered, not when added.
    Callback(Option<ViewCallback>),
    /// Literal text written as-is.
    String(String),
    /// A view type no renderer handles. Always fails when rendered.
    Unknown(String),
}

impl ViewSource {
    /// The type name of this source, as used in view descriptors.
    pub fn kind(&self) -> &str {
        match self {
            ViewSource::File(_) => "file",
            ViewSource::Callback(_) => "callback",
            ViewSource::String(_) => "string",
            ViewSource::Unknown(kind) => kind.as_str(),
        }
    }
}

impl fmt::Debug for ViewSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewSource::File(path) => f.debug_tuple("File").field(path).finish(),
            ViewSource::Callback(callback) => f
                .debug_tuple("Callback")
                .field(&callback.as_ref().map(|_| "<fn>"))
                .finish(),
            ViewSource::String(text) => f.debug_tuple("String").field(text).finish(),
            ViewSource::Unknown(kind) => f.debug_tuple("Unknown").field(kind).finish(),
        }
    }
}

/// One renderable unit stored in a region.
///
/// Entries are immutable once built. `data` is only handed to file views;
/// `priority` orders entries within a region, lowest first.
#[derive(Debug, Clone)]
pub struct ViewEntry {
    source: ViewSource,
    data: serde_json::Value,
    priority: i32,
}

impl ViewEntry {
    /// Creates an entry from its parts.
    pub fn new(source: ViewSource, data: serde_json::Value, priority: i32) -> Self {
        Self {
            source,
            data,
            priority,
        }
    }

    /// A file view for an already resolved template path.
    pub fn file(path: impl Into<PathBuf>, data: serde_json::Value, priority: i32) -> Self {
        Self::new(ViewSource::File(path.into()), data, priority)
    }

    /// A callback view.
    pub fn callback<F>(callback: F, priority: i32) -> Self
    where
        F: Fn() -> String + 'static,
    {
        let callback: ViewCallback = Rc::new(callback);
        Self::new(
            ViewSource::Callback(Some(callback)),
            serde_json::Value::Null,
            priority,
        )
    }

    /// A literal string view.
    pub fn string(content: impl Into<String>, priority: i32) -> Self {
        Self::new(
            ViewSource::String(content.into()),
            serde_json::Value::Null,
            priority,
        )
    }

    pub fn source(&self) -> &ViewSource {
        &self.source
    }

    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The template file of a file view.
    pub fn template_path(&self) -> Option<&Path> {
        match &self.source {
            ViewSource::File(path) => Some(path.as_path()),
            _ => None,
        }
    }
}
