//! Error types for template rendering.
//!
//! This module provides [`RenderError`], the error type for all rendering
//! operations. Name-resolution failures are not errors — a missing name
//! degrades to empty output — so the variants here cover structural
//! problems only.

use std::fmt;

use whisker_parser::ParseError;

/// Error type for template rendering operations.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error (malformed delimiter switch, bad delimiters).
    TemplateError(String),

    /// A `{{>name}}` tag named a partial the source could not supply.
    PartialNotFound(String),

    /// Data serialization error.
    SerializationError(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateError(msg) => write!(f, "template error: {}", msg),
            RenderError::PartialNotFound(name) => write!(f, "partial not found: {}", name),
            RenderError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ParseError> for RenderError {
    fn from(err: ParseError) -> Self {
        RenderError::TemplateError(err.to_string())
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}
