//! Per-region storage and ordered rendering of views.
//!
//! A [`RegionStore`] maps region names to the views added to them, in
//! insertion order. Rendering a region orders a snapshot of its views by
//! ascending priority with a stable sort, so views sharing a priority keep
//! the order they were added in. The stored order itself never changes,
//! which makes repeated renders of an unmodified region produce identical
//! output.

use std::collections::HashMap;

use tableau_render::OutputSink;
use tracing::{debug, trace};

use crate::error::Result;
use crate::view::{render_entry, ViewContext, ViewEntry};

/// Views grouped by region name.
///
/// A region exists only once a view has been pushed to it.
#[derive(Debug, Default)]
pub struct RegionStore {
    regions: HashMap<String, Vec<ViewEntry>>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a view to a region, creating the region if needed.
    pub fn push(&mut self, region: impl Into<String>, entry: ViewEntry) {
        self.regions.entry(region.into()).or_default().push(entry);
    }

    /// Whether any view has been added to `region`.
    pub fn has_content(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    /// Number of views in `region`.
    pub fn len(&self, region: &str) -> usize {
        self.regions.get(region).map_or(0, Vec::len)
    }

    /// Whether no region has any views.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Names of all regions with content, sorted alphabetically.
    pub fn regions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.regions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The views of `region` in render order.
    ///
    /// Ascending priority; equal priorities keep insertion order.
    pub fn sorted(&self, region: &str) -> Vec<&ViewEntry> {
        let mut entries: Vec<&ViewEntry> = match self.regions.get(region) {
            Some(entries) => entries.iter().collect(),
            None => return Vec::new(),
        };
        // sort_by_key is stable
        entries.sort_by_key(|entry| entry.priority());
        entries
    }

    /// Renders every view of `region` into `sink`, in render order.
    ///
    /// An absent region renders nothing. The first failing view aborts the
    /// rest of the region.
    pub fn render(
        &self,
        region: &str,
        ctx: Option<&ViewContext<'_>>,
        sink: &mut OutputSink,
    ) -> Result<()> {
        if !self.has_content(region) {
            return Ok(());
        }

        let entries = self.sorted(region);
        debug!(region, views = entries.len(), "rendering region");

        for entry in entries {
            trace!(
                region,
                kind = entry.source().kind(),
                priority = entry.priority(),
                "rendering view"
            );
            render_entry(entry, ctx, sink)?;
        }
        Ok(())
    }

    /// Renders `region` into a capture on `sink` and returns the text.
    ///
    /// The capture is released before returning, including when a view
    /// fails; nothing rendered before the failure reaches the sink.
    pub fn render_buffered(
        &self,
        region: &str,
        ctx: Option<&ViewContext<'_>>,
        sink: &mut OutputSink,
    ) -> Result<String> {
        let mut capture = sink.capture();
        self.render(region, ctx, &mut capture)?;
        Ok(capture.finish())
    }
}
