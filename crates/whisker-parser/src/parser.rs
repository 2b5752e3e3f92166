//! Recursive-descent parser producing a template node tree.
//!
//! The parser consumes the token stream from [`tokenize`] and builds
//! [`Node`]s: literal text, variables, partials, and sections with their
//! parsed children. Comments disappear here. Section tags that never match —
//! a closer with no opener, or an opener still unclosed at end of input —
//! unwind back into literal text, so broken markup survives in the output
//! instead of faulting.
//!
//! # Section whitespace
//!
//! A section captures the layout around its markers so that removing or
//! repeating the block preserves the surrounding line structure:
//!
//! - the open tag's line indentation moves off the preceding text and is
//!   re-emitted by every expansion of the body;
//! - when the open tag ends its line, the line break and the next line's
//!   indentation are swallowed (the captured indent takes their place);
//!   inline spacing after the tag stays put;
//! - the close tag's own line indentation is dropped from the body;
//! - spaces and at most one newline after the close tag are captured, the
//!   space run being dropped when the newline is present, and the newline
//!   being dropped when the body already ends with one.
//!
//! The surviving tokens are woven into the section's children, and the same
//! normalized text is kept verbatim on the node for section lambdas.

use crate::delimiters::Delimiters;
use crate::error::ParseError;
use crate::lexer::{tokenize, Tag, TagKind, Token};

/// One node of a parsed template.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal text.
    Text(String),
    /// `{{name}}`, `{{{name}}}` or `{{&name}}`.
    Variable { name: String, escaped: bool },
    /// `{{#name}}…{{/name}}` or `{{^name}}…{{/name}}`.
    Section(Section),
    /// `{{>name}}`.
    Partial(String),
}

/// A parsed section block.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Trimmed section name.
    pub name: String,
    /// Whether the block renders on a falsy value (`{{^name}}`).
    pub inverted: bool,
    /// Body nodes in document order, captured indentation first and
    /// surviving trailing whitespace last.
    pub children: Vec<Node>,
    /// The normalized body text, as handed to section lambdas.
    pub raw: String,
    /// Indentation captured from the open tag's line.
    pub indent: String,
    /// Whitespace captured after the close tag that survived normalization.
    pub trailing: String,
}

/// Parses `source` into a node tree, starting from the given delimiters.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDelimiters`] when a delimiter-switch tag
/// carries a malformed payload; no other markup errors exist.
pub fn parse(source: &str, delimiters: &Delimiters) -> Result<Vec<Node>, ParseError> {
    let mut tokens = tokenize(source, delimiters)?;
    let mut stack = vec![Frame::root()];

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].clone();
        match token {
            Token::Text(text) => push_text(&mut stack.last_mut().unwrap().nodes, &text),
            Token::Tag(tag) => match tag.kind {
                TagKind::Escaped | TagKind::Unescaped => {
                    let escaped = tag.kind == TagKind::Escaped;
                    stack
                        .last_mut()
                        .unwrap()
                        .nodes
                        .push(Node::Variable { name: tag.name, escaped });
                }
                TagKind::Comment => {}
                TagKind::Partial => stack.last_mut().unwrap().nodes.push(Node::Partial(tag.name)),
                TagKind::SectionOpen | TagKind::InvertedOpen => {
                    let inverted = tag.kind == TagKind::InvertedOpen;
                    let swallowed = swallow_leading_whitespace(tokens.get_mut(i + 1));
                    stack.push(Frame::section(tag, inverted, swallowed));
                }
                TagKind::SectionClose => match stack.iter().rposition(|f| f.matches(&tag.name)) {
                    Some(idx) => {
                        while stack.len() > idx + 1 {
                            let frame = stack.pop().unwrap();
                            let parent = stack.last_mut().unwrap();
                            unwind(frame, source, parent);
                        }
                        let frame = stack.pop().unwrap();
                        let trailing = capture_trailing(tokens.get_mut(i + 1));
                        let parent = stack.last_mut().unwrap();
                        let section = close_section(frame, &tag, trailing, source, parent);
                        parent.nodes.push(Node::Section(section));
                    }
                    None => push_text(
                        &mut stack.last_mut().unwrap().nodes,
                        &source[tag.start..tag.end],
                    ),
                },
            },
        }
        i += 1;
    }

    while stack.len() > 1 {
        let frame = stack.pop().unwrap();
        let parent = stack.last_mut().unwrap();
        unwind(frame, source, parent);
    }
    Ok(stack.pop().unwrap().nodes)
}

/// An open section (or the template root) being accumulated.
struct Frame {
    open: Option<Tag>,
    inverted: bool,
    swallowed: String,
    nodes: Vec<Node>,
}

impl Frame {
    fn root() -> Self {
        Frame {
            open: None,
            inverted: false,
            swallowed: String::new(),
            nodes: Vec::new(),
        }
    }

    fn section(open: Tag, inverted: bool, swallowed: String) -> Self {
        Frame {
            open: Some(open),
            inverted,
            swallowed,
            nodes: Vec::new(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.open.as_ref().is_some_and(|tag| tag.name == name)
    }
}

/// Appends literal text, merging with a preceding text node.
fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Node::Text(prev)) = nodes.last_mut() {
        prev.push_str(text);
    } else {
        nodes.push(Node::Text(text.to_string()));
    }
}

/// Removes the leading whitespace run from the text token following an open
/// tag and returns it, so it can be restored if the section never closes.
/// Only a run containing a newline is swallowed — an open tag that ends its
/// line drops the line break and the next line's indentation (the captured
/// indent takes its place), while inline spacing stays put.
fn swallow_leading_whitespace(token: Option<&mut Token>) -> String {
    if let Some(Token::Text(text)) = token {
        let cut = text.len() - text.trim_start().len();
        if text[..cut].contains('\n') {
            return text.drain(..cut).collect();
        }
    }
    String::new()
}

/// Captures spaces/tabs and at most one newline from the text token
/// following a close tag.
fn capture_trailing(token: Option<&mut Token>) -> (String, bool) {
    if let Some(Token::Text(text)) = token {
        let space_len = text.len() - text.trim_start_matches([' ', '\t']).len();
        let space: String = text.drain(..space_len).collect();
        let newline = text.starts_with('\n');
        if newline {
            text.drain(..1);
        }
        (space, newline)
    } else {
        (String::new(), false)
    }
}

/// Pops a completed section frame into a [`Section`] node, applying the
/// whitespace normalization described in the module docs.
fn close_section(
    frame: Frame,
    close: &Tag,
    trailing: (String, bool),
    source: &str,
    parent: &mut Frame,
) -> Section {
    let open = frame.open.expect("closed the root frame");
    let mut nodes = frame.nodes;

    let indent = take_trailing_indent(&mut parent.nodes);

    let mut raw = source[open.end..close.start].to_string();
    let swallow = raw.len() - raw.trim_start().len();
    if raw[..swallow].contains('\n') {
        raw.drain(..swallow);
    }
    if close_line_indented(source, close.start) {
        strip_trailing_indent(&mut raw);
        if let Some(Node::Text(last)) = nodes.last_mut() {
            strip_trailing_indent(last);
            if last.is_empty() {
                nodes.pop();
            }
        }
    }

    let (mut space, mut newline) = trailing;
    if newline {
        space.clear();
    }
    if raw.ends_with('\n') {
        newline = false;
    }
    let mut trailing = space;
    if newline {
        trailing.push('\n');
    }

    if !indent.is_empty() {
        match nodes.first_mut() {
            Some(Node::Text(first)) => first.insert_str(0, &indent),
            _ => nodes.insert(0, Node::Text(indent.clone())),
        }
    }
    if !trailing.is_empty() {
        push_text(&mut nodes, &trailing);
    }
    let raw = format!("{indent}{raw}{trailing}");

    Section {
        name: open.name,
        inverted: frame.inverted,
        children: nodes,
        raw,
        indent,
        trailing,
    }
}

/// Splits the trailing space/tab run off the parent's last text node.
fn take_trailing_indent(nodes: &mut Vec<Node>) -> String {
    if let Some(Node::Text(text)) = nodes.last_mut() {
        let keep = text.trim_end_matches([' ', '\t']).len();
        let indent = text.split_off(keep);
        if text.is_empty() {
            nodes.pop();
        }
        indent
    } else {
        String::new()
    }
}

/// Whether the close tag sits on its own indentation: a space/tab run
/// preceded by a newline.
fn close_line_indented(source: &str, close_start: usize) -> bool {
    let head = &source[..close_start];
    let trimmed = head.trim_end_matches([' ', '\t']);
    trimmed.len() < head.len() && trimmed.ends_with('\n')
}

fn strip_trailing_indent(text: &mut String) {
    let keep = text.trim_end_matches([' ', '\t']).len();
    text.truncate(keep);
}

/// Dissolves an unmatched section frame back into its parent as literal
/// markup followed by the already-parsed body.
fn unwind(frame: Frame, source: &str, parent: &mut Frame) {
    let open = frame.open.expect("unwound the root frame");
    push_text(&mut parent.nodes, &source[open.start..open.end]);
    push_text(&mut parent.nodes, &frame.swallowed);
    for node in frame.nodes {
        match node {
            Node::Text(text) => push_text(&mut parent.nodes, &text),
            other => parent.nodes.push(other),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn plain_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,!?\n]{0,40}"
    }

    fn tag_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,10}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(400))]

        #[test]
        fn plain_text_parses_to_itself(content in plain_text()) {
            let nodes = parse(&content, &Delimiters::default()).unwrap();
            if content.is_empty() {
                prop_assert!(nodes.is_empty());
            } else {
                prop_assert_eq!(nodes, vec![Node::Text(content)]);
            }
        }

        #[test]
        fn balanced_sections_close(name in tag_name(), body in "[a-zA-Z0-9 ]{0,20}") {
            let source = format!("{{{{#{name}}}}}{body}{{{{/{name}}}}}");
            let nodes = parse(&source, &Delimiters::default()).unwrap();
            prop_assert_eq!(nodes.len(), 1);
            prop_assert!(matches!(&nodes[0], Node::Section(s) if s.name == name));
        }

        #[test]
        fn unbalanced_markup_survives_verbatim(name in tag_name(), body in "[a-zA-Z0-9 ]{0,20}") {
            let source = format!("{{{{#{name}}}}}{body}");
            let nodes = parse(&source, &Delimiters::default()).unwrap();
            let rendered: String = nodes
                .iter()
                .map(|n| match n {
                    Node::Text(t) => t.as_str(),
                    _ => "",
                })
                .collect();
            prop_assert_eq!(rendered, source);
        }
    }
}
