//! Tag delimiter configuration.
//!
//! A template is scanned against a pair of delimiter strings, `{{` and `}}`
//! by default. A `{{=open close=}}` tag swaps the pair for the remainder of
//! the scan; [`Delimiters::from_switch`] parses that tag's payload.

use crate::error::ParseError;

/// Default opening delimiter.
pub const DEFAULT_OPEN: &str = "{{";

/// Default closing delimiter.
pub const DEFAULT_CLOSE: &str = "}}";

/// An open/close delimiter pair.
///
/// Delimiter state is local to a single scan: switching delimiters inside one
/// template never affects another scan, or a later scan of the same source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    open: String,
    close: String,
}

impl Delimiters {
    /// Creates a delimiter pair.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Parses a delimiter-switch payload: exactly two whitespace-separated
    /// delimiter strings, as in `{{=<% %>=}}`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDelimiters`] for any other token count.
    pub fn from_switch(payload: &str) -> Result<Self, ParseError> {
        let mut parts = payload.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(open), Some(close), None) => Ok(Self::new(open, close)),
            _ => Err(ParseError::InvalidDelimiters(payload.to_string())),
        }
    }

    /// The opening delimiter.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The closing delimiter.
    pub fn close(&self) -> &str {
        &self.close
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN, DEFAULT_CLOSE)
    }
}
