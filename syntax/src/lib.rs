//! Julia syntax tree model consumed by the IDE layer.
//!
//! The parser lives in the host; it hands over a tree (built with [`TreeBuilder`] or
//! deserialized as [`RawNode`]). Spans are UTF-8 byte offsets into the tree text, `[start, end)`.

mod ast;
mod builder;
pub mod fixture;
pub mod index;
mod kind;
mod line_index;
mod span;
mod tree;

#[cfg(test)]
mod tests;

pub use builder::{BuildError, RawNode, TreeBuilder};
pub use index::{DeclarationIndex, DeclarationSite, FileId, IndexKind, MemoryIndex, SearchScope};
pub use kind::SyntaxKind;
pub use line_index::{LineCol, LineIndex};
pub use span::Span;
pub use tree::{NodeId, Preorder, SyntaxNode, SyntaxTree};
