//! Compact S-expression notation for syntax trees.
//!
//! ```text
//! (File
//!   (Statements
//!     (Symbol "Arr$0")))
//! ```
//!
//! - `(Kind child...)` opens a composite node.
//! - `(Kind "text")` with a token kind is a leaf.
//! - A bare string inside a composite is shorthand for an `Ident` leaf.
//! - `$0` inside a leaf text marks the cursor; it is removed from the tree text.
//!
//! [`SyntaxTree::debug_dump`] prints the same notation (without the shorthand), so dumps can
//! be fed back into [`parse`].

use thiserror::Error;

use crate::builder::{BuildError, RawNode};
use crate::{SyntaxKind, SyntaxNode, SyntaxTree};

pub const CURSOR_MARKER: &str = "$0";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    #[error("{message} at byte {offset}")]
    Syntax { offset: usize, message: String },
    #[error("unknown node kind `{name}` at byte {offset}")]
    UnknownKind { offset: usize, name: String },
    #[error("more than one `$0` cursor marker")]
    MultipleCursors,
    #[error(transparent)]
    Build(#[from] BuildError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub tree: SyntaxTree,
    /// Byte offset of the `$0` marker in the tree text.
    pub cursor: Option<u32>,
}

impl Fixture {
    /// Leaf at the cursor marker.
    pub fn cursor_token(&self) -> Option<SyntaxNode<'_>> {
        self.tree.token_at_offset(self.cursor?)
    }
}

pub fn parse(src: &str) -> Result<Fixture, FixtureError> {
    let mut parser = Parser { src, pos: 0 };
    parser.skip_ws();
    let mut raw = parser.node()?;
    parser.skip_ws();
    if parser.pos != src.len() {
        return Err(parser.error("trailing input after root node"));
    }

    let mut offset = 0usize;
    let mut cursor = None;
    take_cursor(&mut raw, &mut offset, &mut cursor)?;

    let tree = SyntaxTree::from_raw(&raw)?;
    Ok(Fixture {
        tree,
        cursor: cursor.map(|c| u32::try_from(c).unwrap_or(u32::MAX)),
    })
}

fn take_cursor(
    raw: &mut RawNode,
    offset: &mut usize,
    cursor: &mut Option<usize>,
) -> Result<(), FixtureError> {
    if let Some(idx) = raw.text.find(CURSOR_MARKER) {
        if cursor.is_some() {
            return Err(FixtureError::MultipleCursors);
        }
        *cursor = Some(*offset + idx);
        raw.text.replace_range(idx..idx + CURSOR_MARKER.len(), "");
        if raw.text.contains(CURSOR_MARKER) {
            return Err(FixtureError::MultipleCursors);
        }
    }
    *offset += raw.text.len();
    for child in &mut raw.children {
        take_cursor(child, offset, cursor)?;
    }
    Ok(())
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn node(&mut self) -> Result<RawNode, FixtureError> {
        self.expect('(')?;
        self.skip_ws();
        let kind_start = self.pos;
        let name = self.ident();
        if name.is_empty() {
            return Err(self.error("expected node kind"));
        }
        let kind = SyntaxKind::from_name(name).ok_or_else(|| FixtureError::UnknownKind {
            offset: kind_start,
            name: name.to_string(),
        })?;
        self.skip_ws();

        if kind.is_token() {
            let text = self.string()?;
            self.skip_ws();
            self.expect(')')?;
            return Ok(RawNode::token(kind, text));
        }

        let mut children = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                Some(')') => {
                    self.pos += 1;
                    return Ok(RawNode::node(kind, children));
                }
                Some('(') => children.push(self.node()?),
                Some('"') => children.push(RawNode::token(SyntaxKind::Ident, self.string()?)),
                Some(_) => return Err(self.error("expected `(`, `\"` or `)`")),
                None => return Err(self.error("unclosed node")),
            }
        }
    }

    fn string(&mut self) -> Result<String, FixtureError> {
        self.expect('"')?;
        let mut out = String::new();
        loop {
            let Some(c) = self.bump() else {
                return Err(self.error("unterminated string"));
            };
            match c {
                '"' => return Ok(out),
                '\\' => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('"') => out.push('"'),
                    Some('\\') => out.push('\\'),
                    _ => return Err(self.error("invalid escape")),
                },
                c => out.push(c),
            }
        }
    }

    fn ident(&mut self) -> &'a str {
        let src = self.src;
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        &src[start..self.pos]
    }

    fn expect(&mut self, expected: char) -> Result<(), FixtureError> {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            Ok(())
        } else {
            Err(self.error(&format!("expected `{expected}`")))
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn error(&self, message: &str) -> FixtureError {
        FixtureError::Syntax {
            offset: self.pos,
            message: message.to_string(),
        }
    }
}

impl SyntaxTree {
    /// Renders the tree in fixture notation, one node per line, two-space indentation.
    pub fn debug_dump(&self) -> String {
        fn go(node: SyntaxNode<'_>, depth: usize, out: &mut String) {
            out.push_str(&"  ".repeat(depth));
            out.push('(');
            out.push_str(node.kind().name());
            if node.is_token() {
                out.push(' ');
                out.push_str(&quote(node.text()));
                out.push(')');
                return;
            }
            for child in node.children() {
                out.push('\n');
                go(child, depth + 1, out);
            }
            out.push(')');
        }

        let mut out = String::new();
        go(self.root(), 0, &mut out);
        out
    }
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
