//! # Tableau - region-based view composition
//!
//! `tableau` collects named views, groups them into regions of a page and
//! renders each region's views in priority order.
//!
//! ## Core Concepts
//!
//! - [`ViewCollection`]: add views to regions, render a region
//! - Views come in three kinds ([`ViewSource`]): a template file rendered
//!   with data, a callback returning the content, or a literal string
//! - Regions (`"main"`, `"sidebar"`, ...) are independent; a region exists
//!   once a view has been added to it ([`ViewCollection::has_content`])
//! - Priority: lower values render first, equal values render in the order
//!   they were added
//! - [`ViewContext`]: the template engine (plus shared globals) file views
//!   render with
//! - [`OutputSink`]: where rendered text goes; `render_buffered` captures a
//!   region into a `String` instead
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use tableau::{OutputSink, SearchPathResolver, ViewCollection, DEFAULT_REGION};
//!
//! let resolver = SearchPathResolver::new(["./templates"], ".tpl");
//! let mut views = ViewCollection::new(Rc::new(resolver));
//!
//! views
//!     .add_string("<main>", DEFAULT_REGION, -10)
//!     .add_callback(|| "generated".to_string(), serde_json::json!({}), DEFAULT_REGION, 0)
//!     .add_string("</main>", DEFAULT_REGION, 10)
//!     .add_string("links", "sidebar", 0);
//!
//! let mut sink = OutputSink::memory();
//! let main = views.render_buffered(DEFAULT_REGION, None, &mut sink).unwrap();
//! assert_eq!(main, "<main>generated</main>");
//! assert!(views.has_content("sidebar"));
//! assert!(!views.has_content("footer"));
//! ```
//!
//! ## File Views
//!
//! Template names are resolved against the configured search paths when
//! the view is added; rendering them needs a [`ViewContext`]:
//!
//! ```rust,ignore
//! let mut engine = MiniJinjaEngine::new();
//! let config = ViewConfig::from_file("views.yaml")?;
//! let mut views = ViewCollection::from_config(&config, &mut engine)?;
//!
//! views.add("header", json!({"title": "Home"}), DEFAULT_REGION, 10)?;
//!
//! let ctx = ViewContext::new(&engine).with_global("site", json!("Docs"));
//! views.render(DEFAULT_REGION, Some(&ctx), &mut OutputSink::stdout())?;
//! ```

pub mod collection;
pub mod config;
mod error;
pub mod region;
pub mod view;

pub use collection::{ViewCollection, DEFAULT_REGION};
pub use config::{ViewConfig, DEFAULT_SUFFIX};
pub use error::{Result, ViewError};
pub use region::RegionStore;
pub use view::{
    render_entry, ViewCallback, ViewContext, ViewDescriptor, ViewEntry, ViewSource, ViewSpec,
    ViewTarget, ViewTemplate,
};

// Collaborators, re-exported so most users need only this crate
pub use tableau_render::{
    CaptureGuard, MiniJinjaEngine, OutputSink, RenderError, SearchPathResolver, TemplateEngine,
    TemplateResolver,
};
