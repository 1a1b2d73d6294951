//! View descriptors and their normalization.
//!
//! [`ViewCollection::add`](crate::ViewCollection::add) accepts either a plain
//! template name or a [`ViewDescriptor`] that carries its own settings.
//! Both are normalized into one [`ViewSpec`] before any template lookup
//! happens, so override precedence lives in a single place:
//!
//! 1. A descriptor with a callback is always a callback view. Its template
//!    and type are ignored.
//! 2. Otherwise the descriptor type (default `"file"`) decides:
//!    - `"file"`: the template name is resolved; without a name the view is
//!      stored as unknown and fails at render
//!    - `"string"`: the template text is used literally
//!    - `"callback"`: a callback view with nothing to call (fails at render)
//!    - anything else: an unknown view (fails at render)
//! 3. Descriptor `data`, `region` and `sort` replace the positional
//!    arguments when present.
//!
//! Only an empty descriptor, like an empty name, adds nothing.

use std::fmt;
use std::rc::Rc;

use serde::Deserialize;

use super::entry::ViewCallback;

/// A self-describing view, the structured form accepted by `add`.
///
/// Descriptors can be built in code or deserialized from configuration
/// data (callbacks can only be attached in code):
///
/// ```rust
/// use tableau::ViewDescriptor;
///
/// let sidebar = ViewDescriptor::new()
///     .template("widgets/recent")
///     .region("sidebar")
///     .sort(5);
///
/// let banner: ViewDescriptor = serde_json::from_value(serde_json::json!({
///     "template": "<b>Sale!</b>",
///     "type": "string",
///     "region": "top",
/// })).unwrap();
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct ViewDescriptor {
    template: Option<String>,
    #[serde(skip)]
    callback: Option<ViewCallback>,
    data: Option<serde_json::Value>,
    region: Option<String>,
    sort: Option<i32>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl ViewDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Template name (file views) or literal text (string views).
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Makes this a callback view.
    pub fn callback<F>(mut self, callback: F) -> Self
    where
        F: Fn() -> String + 'static,
    {
        self.callback = Some(Rc::new(callback));
        self
    }

    /// Data for file views, replacing the positional `data` argument.
    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Region, replacing the positional `region` argument.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sort order, replacing the positional `priority` argument.
    pub fn sort(mut self, sort: i32) -> Self {
        self.sort = Some(sort);
        self
    }

    /// View type: `"file"`, `"string"` or `"callback"`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Whether no field is set. An empty template counts as unset.
    pub fn is_empty(&self) -> bool {
        self.template.as_deref().map_or(true, str::is_empty)
            && self.callback.is_none()
            && self.data.is_none()
            && self.region.is_none()
            && self.sort.is_none()
            && self.kind.is_none()
    }

    fn normalize(
        self,
        data: serde_json::Value,
        region: &str,
        priority: i32,
    ) -> Option<ViewSpec> {
        if self.is_empty() {
            return None;
        }

        let target = match self.callback {
            Some(callback) => ViewTarget::Callback(Some(callback)),
            None => match self.kind.as_deref().unwrap_or("file") {
                "file" => match self.template {
                    Some(name) if !name.is_empty() => ViewTarget::Template(name),
                    _ => ViewTarget::Unknown(self.kind.clone().unwrap_or_default()),
                },
                "string" => ViewTarget::String(self.template.unwrap_or_default()),
                "callback" => ViewTarget::Callback(None),
                other => ViewTarget::Unknown(other.to_string()),
            },
        };

        Some(ViewSpec {
            target,
            data: self.data.unwrap_or(data),
            region: self.region.unwrap_or_else(|| region.to_string()),
            priority: self.sort.unwrap_or(priority),
        })
    }
}

impl fmt::Debug for ViewDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewDescriptor")
            .field("template", &self.template)
            .field("callback", &self.callback.as_ref().map(|_| "<fn>"))
            .field("data", &self.data)
            .field("region", &self.region)
            .field("sort", &self.sort)
            .field("kind", &self.kind)
            .finish()
    }
}

/// The first argument of `add`: a template name or a full descriptor.
#[derive(Debug, Clone)]
pub enum ViewTemplate {
    Name(String),
    Descriptor(ViewDescriptor),
}

impl ViewTemplate {
    /// Normalizes into a [`ViewSpec`], applying descriptor overrides.
    ///
    /// Returns `None` when there is nothing to add: an empty name or an
    /// empty descriptor.
    pub fn normalize(
        self,
        data: serde_json::Value,
        region: &str,
        priority: i32,
    ) -> Option<ViewSpec> {
        match self {
            ViewTemplate::Name(name) if name.is_empty() => None,
            ViewTemplate::Name(name) => Some(ViewSpec {
                target: ViewTarget::Template(name),
                data,
                region: region.to_string(),
                priority,
            }),
            ViewTemplate::Descriptor(descriptor) => descriptor.normalize(data, region, priority),
        }
    }
}

impl From<&str> for ViewTemplate {
    fn from(name: &str) -> Self {
        ViewTemplate::Name(name.to_string())
    }
}

impl From<String> for ViewTemplate {
    fn from(name: String) -> Self {
        ViewTemplate::Name(name)
    }
}

impl From<ViewDescriptor> for ViewTemplate {
    fn from(descriptor: ViewDescriptor) -> Self {
        ViewTemplate::Descriptor(descriptor)
    }
}

/// What a normalized view renders, before template resolution.
#[derive(Clone)]
pub enum ViewTarget {
    /// A template name still to be resolved to a file.
    Template(String),
    Callback(Option<ViewCallback>),
    String(String),
    Unknown(String),
}

impl fmt::Debug for ViewTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewTarget::Template(name) => f.debug_tuple("Template").field(name).finish(),
            ViewTarget::Callback(callback) => f
                .debug_tuple("Callback")
                .field(&callback.as_ref().map(|_| "<fn>"))
                .finish(),
            ViewTarget::String(text) => f.debug_tuple("String").field(text).finish(),
            ViewTarget::Unknown(kind) => f.debug_tuple("Unknown").field(kind).finish(),
        }
    }
}

/// A canonical view construction record.
#[derive(Debug, Clone)]
pub struct ViewSpec {
    pub target: ViewTarget,
    pub data: serde_json::Value,
    pub region: String,
    pub priority: i32,
}
