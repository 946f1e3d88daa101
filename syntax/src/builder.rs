//! Tree construction: an event-style [`TreeBuilder`] and the nested [`RawNode`] form hosts
//! serialize their parse trees into.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tree::{NodeData, NodeId};
use crate::{Span, SyntaxKind, SyntaxNode, SyntaxTree};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("`{0}` is a token kind and cannot open a node")]
    TokenKindAsNode(SyntaxKind),
    #[error("`{0}` is a node kind and cannot be used as a token")]
    NodeKindAsToken(SyntaxKind),
    #[error("token `{0}` cannot have children")]
    TokenWithChildren(SyntaxKind),
    #[error("node `{0}` cannot carry text; its text comes from its tokens")]
    NodeWithText(SyntaxKind),
    #[error("token `{0}` has no enclosing node")]
    OrphanToken(SyntaxKind),
    #[error("`finish_node` called with no open node")]
    UnbalancedFinish,
    #[error("{0} node(s) left open")]
    Unclosed(usize),
    #[error("tree has more than one root")]
    MultipleRoots,
    #[error("tree is empty")]
    Empty,
    #[error("source text does not fit in u32 offsets")]
    TooLarge,
}

/// Builds a [`SyntaxTree`] from start/token/finish events in document order.
///
/// The first misuse is remembered and reported by [`TreeBuilder::finish`]; later events are
/// still accepted so callers can stay straight-line.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    text: String,
    nodes: Vec<NodeData>,
    open: Vec<NodeId>,
    error: Option<BuildError>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_node(&mut self, kind: SyntaxKind) -> &mut Self {
        if kind.is_token() {
            self.fail(BuildError::TokenKindAsNode(kind));
            return self;
        }
        if self.open.is_empty() && !self.nodes.is_empty() {
            self.fail(BuildError::MultipleRoots);
            return self;
        }
        let id = self.push(kind);
        self.open.push(id);
        self
    }

    pub fn token(&mut self, kind: SyntaxKind, text: &str) -> &mut Self {
        if !kind.is_token() {
            self.fail(BuildError::NodeKindAsToken(kind));
            return self;
        }
        if self.open.is_empty() {
            self.fail(BuildError::OrphanToken(kind));
            return self;
        }
        let id = self.push(kind);
        self.text.push_str(text);
        self.close(id);
        self
    }

    pub fn finish_node(&mut self) -> &mut Self {
        match self.open.pop() {
            Some(id) => self.close(id),
            None => self.fail(BuildError::UnbalancedFinish),
        }
        self
    }

    pub fn finish(self) -> Result<SyntaxTree, BuildError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if !self.open.is_empty() {
            return Err(BuildError::Unclosed(self.open.len()));
        }
        if self.nodes.is_empty() {
            return Err(BuildError::Empty);
        }
        if u32::try_from(self.text.len()).is_err() {
            return Err(BuildError::TooLarge);
        }
        Ok(SyntaxTree {
            text: self.text,
            nodes: self.nodes,
        })
    }

    fn push(&mut self, kind: SyntaxKind) -> NodeId {
        let id = NodeId::try_from(self.nodes.len()).unwrap_or(NodeId::MAX);
        let parent = self.open.last().copied();
        let start = self.offset();
        self.nodes.push(NodeData {
            kind,
            parent,
            children: Vec::new(),
            span: Span { start, end: start },
        });
        if let Some(parent) = parent {
            self.nodes[parent as usize].children.push(id);
        }
        id
    }

    fn close(&mut self, id: NodeId) {
        let end = self.offset();
        self.nodes[id as usize].span.end = end;
    }

    fn offset(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    fn fail(&mut self, error: BuildError) {
        self.error.get_or_insert(error);
    }
}

/// Nested, owned form of a tree. Tokens carry `text`, composites carry `children`; a composite
/// with `text` is rejected by [`SyntaxTree::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNode {
    pub kind: SyntaxKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawNode>,
}

impl RawNode {
    pub fn token(kind: SyntaxKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn node(kind: SyntaxKind, children: Vec<RawNode>) -> Self {
        Self {
            kind,
            text: String::new(),
            children,
        }
    }
}

impl SyntaxTree {
    pub fn from_raw(raw: &RawNode) -> Result<SyntaxTree, BuildError> {
        fn emit(builder: &mut TreeBuilder, raw: &RawNode) -> Result<(), BuildError> {
            if raw.kind.is_token() {
                if !raw.children.is_empty() {
                    return Err(BuildError::TokenWithChildren(raw.kind));
                }
                builder.token(raw.kind, &raw.text);
                return Ok(());
            }
            if !raw.text.is_empty() {
                return Err(BuildError::NodeWithText(raw.kind));
            }
            builder.start_node(raw.kind);
            for child in &raw.children {
                emit(builder, child)?;
            }
            builder.finish_node();
            Ok(())
        }

        let mut builder = TreeBuilder::new();
        emit(&mut builder, raw)?;
        builder.finish()
    }

    pub fn to_raw(&self) -> RawNode {
        self.root().to_raw()
    }
}

impl SyntaxNode<'_> {
    pub fn to_raw(&self) -> RawNode {
        if self.is_token() {
            return RawNode::token(self.kind(), self.text());
        }
        RawNode::node(self.kind(), self.children().map(|child| child.to_raw()).collect())
    }
}
