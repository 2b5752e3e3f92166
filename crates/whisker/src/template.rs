//! Templates and the render entry points.
//!
//! [`Template`] parses a source string once and renders it any number of
//! times; the free [`render`]/[`render_with_partials`] functions cover the
//! one-shot case. Because a template is a parsed tree, it is immutable after
//! construction — a delimiter switch inside the source is resolved at parse
//! time and cannot leak into other templates or later renders.

use serde::Serialize;
use whisker_parser::{parse, Delimiters, Node};

use crate::context::{Context, Scope};
use crate::error::RenderError;
use crate::output::Encoding;
use crate::partials::{PartialRegistry, PartialSource};
use crate::render::render_nodes;

/// A parsed template, reusable across renders.
///
/// # Example
///
/// ```rust
/// use whisker::{Context, Template};
/// use serde_json::json;
///
/// let template = Template::new("Hi {{thing}}!").unwrap();
/// let out = template.render(&Context::new(json!({"thing": "world"}))).unwrap();
/// assert_eq!(out, "Hi world!");
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parses a template with the default `{{`/`}}` delimiters.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateError`] for a malformed delimiter
    /// switch; all other markup parses (broken tags become literal text).
    pub fn new(source: &str) -> Result<Self, RenderError> {
        Self::parse_with(source, Delimiters::default())
    }

    /// Parses a template whose *initial* delimiters are `open`/`close`.
    ///
    /// A `{{=…=}}`-style switch inside the source still works, expressed in
    /// the current delimiters.
    pub fn with_delimiters(source: &str, open: &str, close: &str) -> Result<Self, RenderError> {
        if open.is_empty() || close.is_empty() {
            return Err(RenderError::TemplateError(
                "delimiters must be non-empty".to_string(),
            ));
        }
        Self::parse_with(source, Delimiters::new(open, close))
    }

    fn parse_with(source: &str, delimiters: Delimiters) -> Result<Self, RenderError> {
        Ok(Self {
            nodes: parse(source, &delimiters)?,
        })
    }

    /// Renders against a context, with no partials available.
    pub fn render(&self, context: &Context) -> Result<String, RenderError> {
        self.render_with_partials(context, &PartialRegistry::new())
    }

    /// Renders against a context, resolving `{{>name}}` through `partials`.
    pub fn render_with_partials(
        &self,
        context: &Context,
        partials: &dyn PartialSource,
    ) -> Result<String, RenderError> {
        let mut out = String::new();
        let scope = Scope::root(context.data());
        render_nodes(&self.nodes, context, &scope, partials, &mut out)?;
        Ok(out)
    }

    /// Renders and encodes the result into bytes.
    pub fn render_encoded(
        &self,
        context: &Context,
        encoding: Encoding,
    ) -> Result<Vec<u8>, RenderError> {
        Ok(encoding.encode(&self.render(context)?))
    }
}

/// One-shot render of a template string against serializable data.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
///
/// let out = whisker::render("Hi {{thing}}!", &json!({"thing": "world"})).unwrap();
/// assert_eq!(out, "Hi world!");
/// ```
pub fn render<T: Serialize>(template: &str, data: &T) -> Result<String, RenderError> {
    Template::new(template)?.render(&Context::from_serialize(data)?)
}

/// One-shot render with a pre-built [`Context`] (lambdas, dotted paths).
pub fn render_with_context(template: &str, context: &Context) -> Result<String, RenderError> {
    Template::new(template)?.render(context)
}

/// One-shot render resolving partials through `partials`.
pub fn render_with_partials<T: Serialize>(
    template: &str,
    data: &T,
    partials: &dyn PartialSource,
) -> Result<String, RenderError> {
    Template::new(template)?.render_with_partials(&Context::from_serialize(data)?, partials)
}
