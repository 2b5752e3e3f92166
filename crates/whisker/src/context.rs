//! Rendering context: data, section lambdas, and the scope chain.
//!
//! A [`Context`] carries the root data value, any section lambdas, and the
//! dotted-path flag. During rendering, section descent builds a chain of
//! [`Scope`] frames on the call stack — each frame holds a reference to its
//! value and its parent, so name lookup walks innermost-outward without ever
//! copying or mutating an ancestor. A name shadowed by an inner frame wins;
//! an unshadowed name still resolves through every enclosing frame.
//!
//! # Example
//!
//! ```rust
//! use whisker::Context;
//! use serde_json::json;
//!
//! let context = Context::new(json!({"user": {"name": "Ada"}}))
//!     .with_dotted_paths(true);
//! let output = whisker::render_with_context("Hi {{user.name}}!", &context).unwrap();
//! assert_eq!(output, "Hi Ada!");
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::RenderError;

static NULL: Value = Value::Null;

/// A section lambda: receives the section's raw inner text, returns the
/// replacement verbatim.
pub type SectionLambda = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Data and configuration for one or more renders.
pub struct Context {
    data: Value,
    lambdas: HashMap<String, SectionLambda>,
    dotted_paths: bool,
}

impl Context {
    /// Creates a context over a JSON value.
    pub fn new(data: Value) -> Self {
        Self {
            data,
            lambdas: HashMap::new(),
            dotted_paths: false,
        }
    }

    /// Creates a context from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SerializationError`] if the value cannot be
    /// represented as JSON.
    pub fn from_serialize<T: Serialize>(data: &T) -> Result<Self, RenderError> {
        Ok(Self::new(serde_json::to_value(data)?))
    }

    /// Enables or disables dotted-path resolution (`{{user.name}}`).
    ///
    /// Off by default: a name containing `.` is then a single literal key.
    pub fn with_dotted_paths(mut self, enabled: bool) -> Self {
        self.dotted_paths = enabled;
        self
    }

    /// Registers a section lambda under `name`.
    ///
    /// When a section resolves to a lambda, the lambda is called with the
    /// section's raw inner text and its return value is spliced in verbatim.
    /// Lambdas take priority over data values of the same name.
    pub fn with_lambda(
        mut self,
        name: impl Into<String>,
        lambda: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.lambdas.insert(name.into(), Box::new(lambda));
        self
    }

    /// The root data value.
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub(crate) fn lambda(&self, name: &str) -> Option<&SectionLambda> {
        self.lambdas.get(name)
    }

    pub(crate) fn dotted_paths(&self) -> bool {
        self.dotted_paths
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("data", &self.data)
            .field("dotted_paths", &self.dotted_paths)
            .field("lambdas", &self.lambdas.len())
            .finish()
    }
}

/// One frame of the scope chain built during section descent.
pub(crate) struct Scope<'a> {
    value: &'a Value,
    parent: Option<&'a Scope<'a>>,
}

impl<'a> Scope<'a> {
    /// The chain's outermost frame.
    pub(crate) fn root(value: &'a Value) -> Self {
        Scope {
            value,
            parent: None,
        }
    }

    /// A child frame shadowing this one.
    pub(crate) fn child<'s>(&'s self, value: &'s Value) -> Scope<'s> {
        Scope {
            value,
            parent: Some(self),
        }
    }

    /// Resolves `name` against the chain; absent names resolve to `Null`.
    ///
    /// With `dotted` enabled and a `.` in the name, the first segment
    /// resolves through the chain and each later segment descends into the
    /// previous result, short-circuiting to `Null` on any absent
    /// intermediate.
    pub(crate) fn resolve(&self, name: &str, dotted: bool) -> &'a Value {
        if dotted && name.contains('.') {
            let mut segments = name.split('.');
            let first = segments.next().unwrap_or(name);
            let mut current = self.lookup(first);
            for segment in segments {
                if current.is_null() {
                    return &NULL;
                }
                current = get_in(current, segment).unwrap_or(&NULL);
            }
            current
        } else {
            self.lookup(name)
        }
    }

    fn lookup(&self, key: &str) -> &'a Value {
        let mut scope = Some(self);
        while let Some(frame) = scope {
            if let Some(found) = get_in(frame.value, key) {
                return found;
            }
            scope = frame.parent;
        }
        &NULL
    }
}

/// Keyed access into one value: mapping key, or sequence index when the
/// segment parses as an integer. JSON folds attribute access into mapping
/// access, so there is no third probe.
fn get_in<'v>(value: &'v Value, key: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}
