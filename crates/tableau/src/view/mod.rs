//! Views: what a region is made of.
//!
//! A view is one of three things: a template file rendered with data, a
//! callback whose return value is the content, or a literal string. Each is
//! stored as a [`ViewEntry`] whose [`ViewSource`] says which.
//!
//! - [`descriptor`]: turning `add` arguments into a canonical [`ViewSpec`]
//! - [`entry`]: the immutable entry model
//! - [`render`]: dispatching an entry to its renderer

pub mod descriptor;
pub mod entry;
pub mod render;

pub use descriptor::{ViewDescriptor, ViewSpec, ViewTarget, ViewTemplate};
pub use entry::{ViewCallback, ViewEntry, ViewSource};
pub use render::{render_entry, ViewContext};
