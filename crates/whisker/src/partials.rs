//! The partial collaborator seam.
//!
//! A `{{>name}}` tag splices another template into the render, sharing the
//! current scope chain. The engine only needs a way to turn a partial's name
//! into template source — [`PartialSource`] is that seam. How names map to
//! sources (files, embedded assets, a database) is entirely the
//! implementor's business; [`PartialRegistry`] covers the in-memory case.

use std::collections::HashMap;

/// Maps a partial's name to its template source.
pub trait PartialSource {
    /// Returns the template source registered under `name`, or `None` when
    /// the name is unknown.
    fn template(&self, name: &str) -> Option<String>;
}

/// An in-memory name→source registry.
///
/// # Example
///
/// ```rust
/// use whisker::{render_with_partials, PartialRegistry};
/// use serde_json::json;
///
/// let partials = PartialRegistry::new().add("greeting", "Hello {{name}}");
/// let output = render_with_partials(
///     "{{>greeting}}!",
///     &json!({"name": "Tom"}),
///     &partials,
/// ).unwrap();
/// assert_eq!(output, "Hello Tom!");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PartialRegistry {
    templates: HashMap<String, String>,
}

impl PartialRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template source under `name`, replacing any previous
    /// entry.
    pub fn add(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.templates.insert(name.into(), source.into());
        self
    }

    /// Whether a template is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }
}

impl PartialSource for PartialRegistry {
    fn template(&self, name: &str) -> Option<String> {
        self.templates.get(name).cloned()
    }
}
