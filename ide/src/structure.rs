//! Structure view: projects a syntax tree onto a file/module/type/function/variable outline.
//!
//! `Statements` nodes are transparent: their outline children are spliced into the parent.
//! Functions are leaves, so declarations nested in a function body do not show up.

use std::collections::HashSet;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use syntax::{NodeId, Span, SyntaxKind, SyntaxNode, SyntaxTree};
use tracing::debug;

use crate::config::StructureConfig;
use crate::icon::Icon;

const FALLBACK_LABEL: &str = "...";
const ELLIPSIS: char = '…';

/// One outline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub label: String,
    pub icon: Icon,
    pub kind: SyntaxKind,
    /// Navigation target inside the projected tree.
    pub node: NodeId,
    pub span: Span,
    /// Alphabetical-sort key; the declared name, or empty.
    pub sort_key: String,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Number of entries in this subtree, itself included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::count).sum::<usize>()
    }

    /// Indented `Kind label` lines, for logs and snapshots.
    pub fn render(&self) -> String {
        fn go(node: &OutlineNode, depth: usize, out: &mut String) {
            let _ = writeln!(out, "{}{} {}", "  ".repeat(depth), node.kind, node.label);
            for child in &node.children {
                go(child, depth + 1, out);
            }
        }

        let mut out = String::new();
        go(self, 0, &mut out);
        out
    }
}

/// Kinds that own outline structure below them.
pub fn is_block(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::File
            | SyntaxKind::Statements
            | SyntaxKind::Module
            | SyntaxKind::Function
            | SyntaxKind::TypeDecl
    )
}

/// Kinds whose outline children are never computed.
pub fn is_always_leaf(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::Function
}

/// Kinds that get their own outline entry.
pub fn is_outline_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::File
            | SyntaxKind::Assignment
            | SyntaxKind::Function
            | SyntaxKind::Module
            | SyntaxKind::TypeDecl
    )
}

/// Projects `tree` with the default configuration.
pub fn project(tree: &SyntaxTree, file_label: &str) -> OutlineNode {
    project_with(tree, file_label, &StructureConfig::default())
}

/// A root whose kind is not structural (say a bare `If` or `Call`) stands for the whole file and
/// is projected as a `File` entry.
pub fn project_with(tree: &SyntaxTree, file_label: &str, config: &StructureConfig) -> OutlineNode {
    let projector = Projector { file_label, config };
    let root = tree.root();
    let outline = if is_block(root.kind()) || is_outline_kind(root.kind()) {
        projector.wrap(root)
    } else {
        projector.wrap_as_file(root)
    };
    debug!(file = file_label, entries = outline.count(), "projected outline");
    outline
}

struct Projector<'c> {
    file_label: &'c str,
    config: &'c StructureConfig,
}

impl Projector<'_> {
    fn wrap(&self, node: SyntaxNode<'_>) -> OutlineNode {
        let children = if is_always_leaf(node.kind()) {
            Vec::new()
        } else {
            self.children(node)
        };
        OutlineNode {
            label: cut_text(&self.label(node), self.config.max_label_len),
            icon: icon(node.kind()),
            kind: node.kind(),
            node: node.id(),
            span: node.span(),
            sort_key: sort_key(node),
            children,
        }
    }

    fn wrap_as_file(&self, root: SyntaxNode<'_>) -> OutlineNode {
        let label = match self.file_label {
            "" => FALLBACK_LABEL,
            label => label,
        };
        OutlineNode {
            label: cut_text(label, self.config.max_label_len),
            icon: Icon::File,
            kind: SyntaxKind::File,
            node: root.id(),
            span: root.span(),
            sort_key: String::new(),
            children: self.children(root),
        }
    }

    fn children(&self, node: SyntaxNode<'_>) -> Vec<OutlineNode> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        for child in node.child_nodes() {
            if is_block(child.kind()) {
                if child.kind() == SyntaxKind::Statements {
                    for spliced in self.children(child) {
                        if seen.insert(spliced.node) {
                            out.push(spliced);
                        }
                    }
                } else if seen.insert(child.id()) {
                    out.push(self.wrap(child));
                }
            }
            if is_outline_kind(child.kind()) && seen.insert(child.id()) {
                out.push(self.wrap(child));
            }
        }
        out
    }

    fn label(&self, node: SyntaxNode<'_>) -> String {
        let label = match node.kind() {
            SyntaxKind::File => Some(self.file_label),
            SyntaxKind::Function | SyntaxKind::Assignment | SyntaxKind::TypeDecl => {
                node.first_expr().map(|expr| expr.text().trim())
            }
            SyntaxKind::Module => node.declared_name(),
            _ => None,
        };
        match label {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => FALLBACK_LABEL.to_string(),
        }
    }
}

fn icon(kind: SyntaxKind) -> Icon {
    match kind {
        SyntaxKind::File => Icon::File,
        SyntaxKind::Function => Icon::Function,
        SyntaxKind::Module => Icon::Module,
        SyntaxKind::TypeDecl => Icon::Type,
        SyntaxKind::Assignment => Icon::Variable,
        _ => Icon::Julia,
    }
}

fn sort_key(node: SyntaxNode<'_>) -> String {
    match node.kind() {
        SyntaxKind::Module | SyntaxKind::Function | SyntaxKind::TypeDecl => {
            node.declared_name().unwrap_or_default().to_string()
        }
        _ => String::new(),
    }
}

/// Cuts `text` to `max` chars and appends `…` when it is longer.
pub fn cut_text(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => {
            let mut cut = text[..end].to_string();
            cut.push(ELLIPSIS);
            cut
        }
        None => text.to_string(),
    }
}
