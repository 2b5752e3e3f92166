//! Tokenizer and node-tree parser for Mustache-style templates.
//!
//! This crate turns template source into an explicit node tree in two
//! passes: a delimiter-aware tokenizer ([`tokenize`]) and a
//! recursive-descent parser ([`parse`]). It knows nothing about data or
//! rendering — that lives in the `whisker` crate, which consumes the tree.
//!
//! # Example
//!
//! ```rust
//! use whisker_parser::{parse, Delimiters, Node};
//!
//! let nodes = parse("Hi {{thing}}!", &Delimiters::default()).unwrap();
//! assert_eq!(nodes.len(), 3);
//! assert!(matches!(&nodes[1], Node::Variable { name, escaped: true } if name == "thing"));
//! ```
//!
//! # Tag grammar
//!
//! | Markup | Meaning |
//! |--------|---------|
//! | `{{name}}` | escaped variable |
//! | `{{{name}}}` / `{{&name}}` | unescaped variable |
//! | `{{#name}}…{{/name}}` | section |
//! | `{{^name}}…{{/name}}` | inverted section |
//! | `{{!comment}}` | comment |
//! | `{{>partial}}` | partial |
//! | `{{=open close=}}` | delimiter switch |
//!
//! # Malformed markup
//!
//! Broken markup never faults: unclosed tags, unmatched section openers and
//! stray closers all come back as literal text, so a render reproduces them
//! verbatim. The single fail-fast case is a delimiter-switch tag whose
//! payload is not exactly two delimiters ([`ParseError::InvalidDelimiters`]).

mod delimiters;
mod error;
mod lexer;
mod parser;

pub use delimiters::{Delimiters, DEFAULT_CLOSE, DEFAULT_OPEN};
pub use error::ParseError;
pub use lexer::{tokenize, Tag, TagKind, Token};
pub use parser::{parse, Node, Section};
