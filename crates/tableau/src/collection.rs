//! The view collection: add views to regions, render regions.

use std::fmt;
use std::rc::Rc;

use tableau_render::{OutputSink, RenderError, TemplateEngine, TemplateResolver};
use tracing::debug;

use crate::config::ViewConfig;
use crate::error::{Result, ViewError};
use crate::region::RegionStore;
use crate::view::{
    ViewCallback, ViewContext, ViewEntry, ViewSource, ViewSpec, ViewTarget, ViewTemplate,
};

/// Region used when callers have no layout of their own.
pub const DEFAULT_REGION: &str = "main";

/// Collects views per region and renders them in priority order.
///
/// Template names are resolved when a view is added, so a missing template
/// is reported by [`add`](Self::add), not at render time. Everything else
/// (a callback view with nothing to call, an unknown view type) is only
/// detected when the region is rendered.
///
/// The collection is meant for a single thread of control; share it
/// across threads only behind external synchronization.
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = MiniJinjaEngine::new();
/// let config = ViewConfig::new(["./templates"], ".tpl");
/// let mut views = ViewCollection::from_config(&config, &mut engine)?;
///
/// views
///     .add("header", json!({"title": "Home"}), DEFAULT_REGION, 10)?
///     .add_string("MID", DEFAULT_REGION, 5)
///     .add("footer", json!({}), DEFAULT_REGION, 20)?;
///
/// let ctx = ViewContext::new(&engine);
/// let page = views.render_buffered(DEFAULT_REGION, Some(&ctx), &mut OutputSink::stdout())?;
/// ```
pub struct ViewCollection {
    store: RegionStore,
    resolver: Rc<dyn TemplateResolver>,
}

impl ViewCollection {
    /// Creates an empty collection resolving template names with `resolver`.
    pub fn new(resolver: Rc<dyn TemplateResolver>) -> Self {
        Self {
            store: RegionStore::new(),
            resolver,
        }
    }

    /// Creates an empty collection from configuration.
    ///
    /// The configured include files are registered into `engine` first, in
    /// order; any failure there is returned before the collection exists.
    pub fn from_config(config: &ViewConfig, engine: &mut dyn TemplateEngine) -> Result<Self> {
        config.load_includes(engine)?;
        Ok(Self::new(Rc::new(config.resolver())))
    }

    /// Adds a view.
    ///
    /// `template` is either a template name, resolved to a file view right
    /// away, or a [`ViewDescriptor`](crate::ViewDescriptor) whose own
    /// fields override `data`, `region` and `priority`. An empty name or an
    /// empty descriptor adds nothing.
    ///
    /// # Errors
    ///
    /// [`ViewError::TemplateNotFound`] when a file view's template is not in
    /// any search path.
    pub fn add(
        &mut self,
        template: impl Into<ViewTemplate>,
        data: serde_json::Value,
        region: &str,
        priority: i32,
    ) -> Result<&mut Self> {
        let Some(spec) = template.into().normalize(data, region, priority) else {
            return Ok(self);
        };

        let ViewSpec {
            target,
            data,
            region,
            priority,
        } = spec;

        let source = match target {
            ViewTarget::Template(name) => ViewSource::File(self.resolve(&name)?),
            ViewTarget::Callback(callback) => ViewSource::Callback(callback),
            ViewTarget::String(text) => ViewSource::String(text),
            ViewTarget::Unknown(kind) => ViewSource::Unknown(kind),
        };

        self.push(region, ViewEntry::new(source, data, priority));
        Ok(self)
    }

    /// Adds a callback view. Its return value is the view's content.
    ///
    /// `data` is kept with the view but never passed to the callback.
    pub fn add_callback<F>(
        &mut self,
        callback: F,
        data: serde_json::Value,
        region: &str,
        priority: i32,
    ) -> &mut Self
    where
        F: Fn() -> String + 'static,
    {
        let callback: ViewCallback = Rc::new(callback);
        self.push(
            region.to_string(),
            ViewEntry::new(ViewSource::Callback(Some(callback)), data, priority),
        );
        self
    }

    /// Adds a literal string view.
    pub fn add_string(
        &mut self,
        content: impl Into<String>,
        region: &str,
        priority: i32,
    ) -> &mut Self {
        self.push(region.to_string(), ViewEntry::string(content, priority));
        self
    }

    /// Whether any view has been added to `region`.
    pub fn has_content(&self, region: &str) -> bool {
        self.store.has_content(region)
    }

    /// Number of views added to `region`.
    pub fn region_len(&self, region: &str) -> usize {
        self.store.len(region)
    }

    /// The underlying region store.
    pub fn store(&self) -> &RegionStore {
        &self.store
    }

    /// Renders `region` into `sink`. See [`RegionStore::render`].
    pub fn render(
        &self,
        region: &str,
        ctx: Option<&ViewContext<'_>>,
        sink: &mut OutputSink,
    ) -> Result<()> {
        self.store.render(region, ctx, sink)
    }

    /// Renders `region` and returns the text instead of writing it.
    /// See [`RegionStore::render_buffered`].
    pub fn render_buffered(
        &self,
        region: &str,
        ctx: Option<&ViewContext<'_>>,
        sink: &mut OutputSink,
    ) -> Result<String> {
        self.store.render_buffered(region, ctx, sink)
    }

    fn resolve(&self, name: &str) -> Result<std::path::PathBuf> {
        self.resolver.resolve(name).map_err(|err| match err {
            RenderError::TemplateNotFound(_) => ViewError::TemplateNotFound(name.to_string()),
            other => ViewError::Render(other),
        })
    }

    fn push(&mut self, region: String, entry: ViewEntry) {
        debug!(
            region = %region,
            kind = entry.source().kind(),
            priority = entry.priority(),
            "adding view"
        );
        self.store.push(region, entry);
    }
}

impl fmt::Debug for ViewCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewCollection")
            .field("store", &self.store)
            .field("resolver", &"<resolver>")
            .finish()
    }
}
