//! # Whisker — logic-less template rendering
//!
//! `whisker` expands Mustache-family templates against hierarchical data:
//! `{{tag}}` placeholders, `{{#name}}…{{/name}}` sections that branch on the
//! shape of their value, partials, comments, and runtime delimiter switches.
//! No arithmetic, no conditionals beyond truthiness — data in, text out.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//!
//! let out = whisker::render("Hi {{thing}}!", &json!({"thing": "world"})).unwrap();
//! assert_eq!(out, "Hi world!");
//! ```
//!
//! Any `Serialize` value works as data:
//!
//! ```rust
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Invite {
//!     name: String,
//!     confirmed: bool,
//! }
//!
//! let out = whisker::render(
//!     "{{name}}{{#confirmed}} is coming{{/confirmed}}",
//!     &Invite { name: "Ada".into(), confirmed: true },
//! ).unwrap();
//! assert_eq!(out, "Ada is coming");
//! ```
//!
//! ## Sections
//!
//! A section's body renders zero, one, or many times depending on what its
//! name resolves to: falsy values suppress it, mappings scope it, sequences
//! repeat it per item, and `{{^name}}` inverts the test. Name lookup walks
//! the scope chain outward, so a loop body still sees enclosing values:
//!
//! ```rust
//! use serde_json::json;
//!
//! let out = whisker::render(
//!     "{{#users}}{{name}} says {{greeting}}; {{/users}}",
//!     &json!({"greeting": "hi", "users": [{"name": "eeny"}, {"name": "meeny"}]}),
//! ).unwrap();
//! assert_eq!(out, "eeny says hi; meeny says hi; ");
//! ```
//!
//! ## Escaping
//!
//! `{{name}}` HTML-escapes its value; `{{{name}}}` and `{{&name}}` do not:
//!
//! ```rust
//! use serde_json::json;
//!
//! let data = json!({"html": "<b>bold</b>"});
//! assert_eq!(whisker::render("{{html}}", &data).unwrap(), "&lt;b&gt;bold&lt;/b&gt;");
//! assert_eq!(whisker::render("{{{html}}}", &data).unwrap(), "<b>bold</b>");
//! ```
//!
//! ## Partials, lambdas, reuse
//!
//! [`PartialRegistry`] maps `{{>name}}` tags to template sources (implement
//! [`PartialSource`] for anything fancier); [`Context::with_lambda`]
//! registers section lambdas; [`Template`] parses once and renders many
//! times. See each type's docs.

mod context;
mod error;
mod output;
mod partials;
mod render;
mod template;
mod value;

pub use context::{Context, SectionLambda};
pub use error::RenderError;
pub use output::Encoding;
pub use partials::{PartialRegistry, PartialSource};
pub use template::{render, render_with_context, render_with_partials, Template};
