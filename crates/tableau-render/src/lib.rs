//! # Tableau Render - collaborators for region-based views
//!
//! `tableau-render` provides the pieces the `tableau` view core delegates to:
//!
//! - [`TemplateEngine`]: renders template source or files with data
//!   ([`MiniJinjaEngine`] is the default implementation)
//! - [`TemplateResolver`]: maps a logical template name to a file
//!   ([`SearchPathResolver`] probes ordered directories with a suffix)
//! - [`OutputSink`]: where rendered views are written, with scoped capture
//!   through [`CaptureGuard`]
//! - [`RenderError`]: the error type shared by all of the above
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use tableau_render::{MiniJinjaEngine, OutputSink, TemplateEngine};
//! use serde_json::json;
//!
//! let engine = MiniJinjaEngine::new();
//! let mut sink = OutputSink::memory();
//!
//! let text = engine
//!     .render_with_context("{{ title }} | {{ site }}", &json!({"title": "Home"}), &HashMap::from([
//!         ("site".to_string(), json!("Docs")),
//!     ]))
//!     .unwrap();
//! sink.write_str(&text).unwrap();
//! assert_eq!(sink.contents(), Some("Home | Docs"));
//! ```

pub mod engine;
mod error;
pub mod output;
pub mod resolver;

pub use engine::{register_filters, MiniJinjaEngine, TemplateEngine};
pub use error::RenderError;
pub use output::{CaptureGuard, OutputSink};
pub use resolver::{SearchPathResolver, TemplateResolver};
