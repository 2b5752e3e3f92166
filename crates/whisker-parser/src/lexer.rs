//! Tokenizer for delimited template tags.
//!
//! The tokenizer walks the source once, splitting it into literal text and
//! classified tags. Tag behavior is selected by the single character (sigil)
//! following the opening delimiter; the sigil set is closed — see
//! [`TagKind::from_sigil`].
//!
//! Two closers deviate from the plain closing delimiter:
//!
//! - `{{{name}}}` closes on a literal `}` immediately before the closing
//!   delimiter;
//! - `{{=open close=}}` closes on `=` before the closing delimiter.
//!
//! Both fall back to the plain closer when the extended form is absent, so
//! `{{{name}}` still scans as an unescaped variable.
//!
//! Delimiter-switch tags are consumed here rather than surfaced as tokens:
//! the scan continues with the new pair, which is what makes the switch
//! apply to all subsequent matching in the same pass. Markup that never
//! closes is not a tag at all — the rest of the input becomes literal text.

use crate::delimiters::Delimiters;
use crate::error::ParseError;

/// Characters recognized as sigils directly after the opening delimiter.
const SIGILS: &[char] = &['{', '#', '^', '/', '=', '&', '!', '>'];

/// Tag behavior selected by the sigil.
///
/// This is a fixed dispatch table: every representable tag maps to exactly
/// one behavior, and no other sigils exist. The delimiter-switch sigil (`=`)
/// is handled inside the tokenizer and never produces a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `{{name}}` — variable, HTML-escaped on output.
    Escaped,
    /// `{{{name}}}` or `{{&name}}` — variable, spliced without escaping.
    Unescaped,
    /// `{{!text}}` — comment, renders nothing.
    Comment,
    /// `{{>name}}` — partial inclusion.
    Partial,
    /// `{{#name}}` — section opener.
    SectionOpen,
    /// `{{^name}}` — inverted section opener.
    InvertedOpen,
    /// `{{/name}}` — section closer.
    SectionClose,
}

impl TagKind {
    /// Maps a sigil to its behavior; `None` means the tag had no sigil.
    fn from_sigil(sigil: Option<char>) -> TagKind {
        match sigil {
            None => TagKind::Escaped,
            Some('{') | Some('&') => TagKind::Unescaped,
            Some('!') => TagKind::Comment,
            Some('>') => TagKind::Partial,
            Some('#') => TagKind::SectionOpen,
            Some('^') => TagKind::InvertedOpen,
            Some('/') => TagKind::SectionClose,
            Some(other) => unreachable!("sigil {other:?} outside the modifier set"),
        }
    }
}

/// A classified tag with its trimmed name and source byte span.
///
/// The span covers the whole tag, delimiters included, so callers can fall
/// back to the original markup verbatim (unmatched section tags do exactly
/// that).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub kind: TagKind,
    pub name: String,
    pub start: usize,
    pub end: usize,
}

/// A lexical unit: literal text or one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text between tags.
    Text(String),
    /// A classified tag.
    Tag(Tag),
}

/// Splits `source` into tokens, starting from the given delimiter pair.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDelimiters`] when a delimiter-switch tag
/// carries a malformed payload.
pub fn tokenize(source: &str, delimiters: &Delimiters) -> Result<Vec<Token>, ParseError> {
    let mut delims = delimiters.clone();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < source.len() {
        let Some(rel) = source[pos..].find(delims.open()) else {
            tokens.push(Token::Text(source[pos..].to_string()));
            break;
        };
        let tag_start = pos + rel;
        if rel > 0 {
            tokens.push(Token::Text(source[pos..tag_start].to_string()));
        }

        let body_start = tag_start + delims.open().len();
        let sigil = source[body_start..]
            .chars()
            .next()
            .filter(|c| SIGILS.contains(c));
        let name_start = body_start + sigil.map_or(0, char::len_utf8);

        let Some((name_end, tag_end)) = locate_close(source, name_start, sigil, &delims) else {
            // No closing delimiter: the would-be tag is literal text.
            tokens.push(Token::Text(source[tag_start..].to_string()));
            break;
        };

        let name = source[name_start..name_end].trim();
        match sigil {
            Some('=') => delims = Delimiters::from_switch(name)?,
            // A nameless tag matches nothing; leave the markup as-is.
            _ if name.is_empty() && sigil != Some('!') => {
                tokens.push(Token::Text(source[tag_start..tag_end].to_string()));
            }
            _ => tokens.push(Token::Tag(Tag {
                kind: TagKind::from_sigil(sigil),
                name: name.to_string(),
                start: tag_start,
                end: tag_end,
            })),
        }
        pos = tag_end;
    }

    Ok(tokens)
}

/// Finds the byte range of the closer for a tag whose name starts at
/// `name_start`. Returns `(name_end, tag_end)`.
fn locate_close(
    source: &str,
    name_start: usize,
    sigil: Option<char>,
    delims: &Delimiters,
) -> Option<(usize, usize)> {
    let extended = match sigil {
        Some('{') => Some(format!("}}{}", delims.close())),
        Some('=') => Some(format!("={}", delims.close())),
        _ => None,
    };
    if let Some(pattern) = extended {
        if let Some(rel) = source[name_start..].find(&pattern) {
            return Some((name_start + rel, name_start + rel + pattern.len()));
        }
    }
    source[name_start..]
        .find(delims.close())
        .map(|rel| (name_start + rel, name_start + rel + delims.close().len()))
}
