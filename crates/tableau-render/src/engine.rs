//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait, the contract file views
//! are rendered through. The default implementation is [`MiniJinjaEngine`].
//!
//! Engines only produce strings; writing the result to an
//! [`OutputSink`](crate::OutputSink) is the caller's job.

use std::collections::HashMap;
use std::path::Path;

use minijinja::{Environment, Value};

use crate::error::RenderError;

/// A template engine that can render templates with data.
///
/// Template engines handle:
/// - Template compilation and caching of named templates
/// - Variable substitution
/// - Template logic (loops, conditionals, includes) if supported
pub trait TemplateEngine {
    /// Renders a template string with the given data.
    fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError>;

    /// Adds a named template to the engine.
    ///
    /// Named templates can be rendered with [`render_named`](Self::render_named)
    /// and referenced from other templates (`{% include "name" %}`).
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Renders a previously registered template.
    fn render_named(
        &self,
        name: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;

    /// Renders a template with additional context values merged in.
    ///
    /// The `context` values are merged with `data`. If there are key
    /// conflicts, `data` takes precedence.
    fn render_with_context(
        &self,
        template: &str,
        data: &serde_json::Value,
        context: &HashMap<String, serde_json::Value>,
    ) -> Result<String, RenderError>;

    /// Reads a template file and renders it with `data` over `context`.
    ///
    /// The file is re-read on every call, so edits on disk show up on the
    /// next render.
    fn render_file(
        &self,
        path: &Path,
        data: &serde_json::Value,
        context: &HashMap<String, serde_json::Value>,
    ) -> Result<String, RenderError> {
        let source = std::fs::read_to_string(path).map_err(|source| RenderError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::trace!(path = %path.display(), "rendering template file");
        self.render_with_context(&source, data, context)
    }
}

/// MiniJinja-based template engine.
///
/// # Example
///
/// ```rust
/// use tableau_render::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let engine = MiniJinjaEngine::new();
/// let output = engine
///     .render_template("Hello, {{ name }}!", &json!({"name": "World"}))
///     .unwrap();
/// assert_eq!(output, "Hello, World!");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new MiniJinja engine with default filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        register_filters(&mut env);
        Self { env }
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// This allows registering custom filters, functions or globals.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError> {
        let value = Value::from_serialize(data);
        Ok(self.env.render_str(template, value)?)
    }

    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(
        &self,
        name: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        let value = Value::from_serialize(data);
        Ok(tmpl.render(value)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    fn render_with_context(
        &self,
        template: &str,
        data: &serde_json::Value,
        context: &HashMap<String, serde_json::Value>,
    ) -> Result<String, RenderError> {
        // Merge data into context (data takes precedence)
        let mut combined = HashMap::new();
        for (key, value) in context {
            combined.insert(key.clone(), Value::from_serialize(value));
        }

        if let serde_json::Value::Object(map) = data {
            for (key, value) in map {
                combined.insert(key.clone(), Value::from_serialize(value));
            }
        }

        Ok(self.env.render_str(template, &combined)?)
    }
}

/// Registers tableau's filters with a MiniJinja environment.
///
/// Called automatically by [`MiniJinjaEngine::new`].
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });
}
