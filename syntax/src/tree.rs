//! Arena-backed syntax tree with cheap `Copy` navigation handles.
//!
//! A [`SyntaxTree`] owns its source text (the concatenation of all leaf texts) and a flat node
//! arena. Node `0` is the root. [`SyntaxNode`] borrows the tree and is the only way callers
//! look at nodes, so parent links never dangle.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Span, SyntaxKind};

pub type NodeId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeData {
    pub(crate) kind: SyntaxKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    pub(crate) text: String,
    pub(crate) nodes: Vec<NodeData>,
}

impl SyntaxTree {
    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode { tree: self, id: 0 }
    }

    pub fn node(&self, id: NodeId) -> Option<SyntaxNode<'_>> {
        ((id as usize) < self.nodes.len()).then_some(SyntaxNode { tree: self, id })
    }

    /// Full source text of the tree.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the leaf at a byte offset.
    ///
    /// Preference order:
    /// 1) a non-trivia token containing the offset or ending exactly at it (the word being typed)
    /// 2) a non-trivia token starting at the offset
    /// 3) any token touching the offset
    pub fn token_at_offset(&self, offset: u32) -> Option<SyntaxNode<'_>> {
        let mut starting_here = None;
        let mut touching = None;
        for token in self.root().descendants().filter(|node| node.is_token()) {
            let span = token.span();
            if !span.touches(offset) {
                continue;
            }
            if token.kind().is_trivia() {
                touching.get_or_insert(token);
                continue;
            }
            if span.start < offset {
                return Some(token);
            }
            starting_here.get_or_insert(token);
        }
        starting_here.or(touching)
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id as usize]
    }
}

/// A node handle: a tree reference plus an index into its arena.
#[derive(Clone, Copy)]
pub struct SyntaxNode<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
}

impl<'a> SyntaxNode<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    pub fn span(&self) -> Span {
        self.data().span
    }

    /// Source text covered by this node (for composites, all leaf texts concatenated).
    pub fn text(&self) -> &'a str {
        let span = self.span();
        self.tree
            .text
            .get(span.start as usize..span.end as usize)
            .unwrap_or("")
    }

    pub fn is_token(&self) -> bool {
        self.kind().is_token()
    }

    pub fn parent(&self) -> Option<SyntaxNode<'a>> {
        self.data().parent.map(|id| self.with_id(id))
    }

    pub fn children(&self) -> impl DoubleEndedIterator<Item = SyntaxNode<'a>> + use<'a> {
        let tree = self.tree;
        tree.data(self.id)
            .children
            .iter()
            .map(move |&id| SyntaxNode { tree, id })
    }

    /// Composite children only (raw tokens skipped).
    pub fn child_nodes(&self) -> impl DoubleEndedIterator<Item = SyntaxNode<'a>> + use<'a> {
        self.children().filter(|child| !child.is_token())
    }

    pub fn first_child(&self) -> Option<SyntaxNode<'a>> {
        self.children().next()
    }

    pub fn first_child_of_kind(&self, kind: SyntaxKind) -> Option<SyntaxNode<'a>> {
        self.children().find(|child| child.kind() == kind)
    }

    pub fn prev_sibling(&self) -> Option<SyntaxNode<'a>> {
        let siblings = &self.tree.data(self.data().parent?).children;
        let idx = siblings.iter().position(|&id| id == self.id)?;
        let prev = *siblings.get(idx.checked_sub(1)?)?;
        Some(self.with_id(prev))
    }

    pub fn next_sibling(&self) -> Option<SyntaxNode<'a>> {
        let siblings = &self.tree.data(self.data().parent?).children;
        let idx = siblings.iter().position(|&id| id == self.id)?;
        let next = *siblings.get(idx + 1)?;
        Some(self.with_id(next))
    }

    /// Previous sibling, skipping whitespace and line ends.
    pub fn prev_non_trivia_sibling(&self) -> Option<SyntaxNode<'a>> {
        std::iter::successors(self.prev_sibling(), |node| node.prev_sibling())
            .find(|node| !node.kind().is_trivia())
    }

    /// Strict ancestors, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = SyntaxNode<'a>> + use<'a> {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// The non-trivia token that precedes this node in document order.
    pub fn prev_leaf(&self) -> Option<SyntaxNode<'a>> {
        let mut current = *self;
        loop {
            match current.prev_sibling() {
                Some(sibling) => {
                    if let Some(token) = sibling.last_token() {
                        return Some(token);
                    }
                    current = sibling;
                }
                None => current = current.parent()?,
            }
        }
    }

    /// Last non-trivia token inside this subtree (the node itself if it is one).
    pub fn last_token(&self) -> Option<SyntaxNode<'a>> {
        if self.is_token() {
            return (!self.kind().is_trivia()).then_some(*self);
        }
        self.children().rev().find_map(|child| child.last_token())
    }

    /// This node and everything below it, pre-order.
    pub fn descendants(&self) -> Preorder<'a> {
        Preorder {
            tree: self.tree,
            stack: vec![self.id],
        }
    }

    fn data(&self) -> &'a NodeData {
        self.tree.data(self.id)
    }

    fn with_id(&self, id: NodeId) -> SyntaxNode<'a> {
        SyntaxNode {
            tree: self.tree,
            id,
        }
    }
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for SyntaxNode<'_> {}

impl Hash for SyntaxNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.span();
        write!(f, "{}@{}..{}", self.kind(), span.start, span.end)?;
        if self.is_token() {
            write!(f, " {:?}", self.text())?;
        }
        Ok(())
    }
}

pub struct Preorder<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = SyntaxNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.data(id).children.iter().rev().copied());
        Some(SyntaxNode {
            tree: self.tree,
            id,
        })
    }
}
