//! The render walk: section expansion and tag substitution over a node tree.
//!
//! One recursive pass over the parsed nodes produces the output. Sections
//! branch on the shape of their resolved value, in priority order: lambda,
//! inverted-on-truthy, scalar, mapping, sequence, inverted-on-falsy, falsy.
//! Mapping and sequence values push a scope frame for their body; scalars
//! render the body in the current scope. Every section is its own node, so
//! structurally identical blocks at different positions expand
//! independently.

use serde_json::Value;
use whisker_parser::{parse, Delimiters, Node, Section};

use crate::context::{Context, Scope};
use crate::error::RenderError;
use crate::partials::PartialSource;
use crate::value::{escape_html, format_value, is_truthy};

/// Renders `nodes` into `out` against the given scope chain.
pub(crate) fn render_nodes(
    nodes: &[Node],
    context: &Context,
    scope: &Scope<'_>,
    partials: &dyn PartialSource,
    out: &mut String,
) -> Result<(), RenderError> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Variable { name, escaped } => {
                let value = scope.resolve(name, context.dotted_paths());
                if *escaped {
                    out.push_str(&render_escaped(value));
                } else {
                    out.push_str(&format_value(value));
                }
            }
            Node::Partial(name) => {
                let source = partials
                    .template(name)
                    .ok_or_else(|| RenderError::PartialNotFound(name.clone()))?;
                // Partials always start from the default delimiters and see
                // the caller's scope chain.
                let nodes = parse(&source, &Delimiters::default())?;
                render_nodes(&nodes, context, scope, partials, out)?;
            }
            Node::Section(section) => render_section(section, context, scope, partials, out)?,
        }
    }
    Ok(())
}

/// Escaped-variable output: falsy values print nothing, except numbers,
/// which always print (`0` displays even though it is section-falsy).
fn render_escaped(value: &Value) -> String {
    match value {
        Value::Number(_) => escape_html(&format_value(value)),
        v if !is_truthy(v) => String::new(),
        v => escape_html(&format_value(v)),
    }
}

fn render_section(
    section: &Section,
    context: &Context,
    scope: &Scope<'_>,
    partials: &dyn PartialSource,
    out: &mut String,
) -> Result<(), RenderError> {
    if let Some(lambda) = context.lambda(&section.name) {
        out.push_str(&lambda(&section.raw));
        return Ok(());
    }

    let value = scope.resolve(&section.name, context.dotted_paths());
    match (is_truthy(value), section.inverted) {
        // Inverted section whose condition held: only the layout survives.
        (true, true) => out.push_str(&section.trailing),
        (false, true) => render_nodes(&section.children, context, scope, partials, out)?,
        (false, false) => {
            out.push_str(&section.indent);
            out.push_str(&section.trailing);
        }
        (true, false) => match value {
            Value::Object(_) => {
                let child = scope.child(value);
                render_nodes(&section.children, context, &child, partials, out)?;
            }
            Value::Array(items) => {
                for item in items {
                    let child = scope.child(item);
                    render_nodes(&section.children, context, &child, partials, out)?;
                }
            }
            _ => render_nodes(&section.children, context, scope, partials, out)?,
        },
    }
    Ok(())
}
