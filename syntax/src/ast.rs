//! Typed accessors over the shape conventions documented on [`SyntaxKind`].

use crate::{SyntaxKind, SyntaxNode};

impl<'a> SyntaxNode<'a> {
    /// First composite child: the declared expression of a function, assignment or type.
    pub fn first_expr(&self) -> Option<SyntaxNode<'a>> {
        self.child_nodes().next()
    }

    /// The `Statements` body of a module, function or macro.
    pub fn body(&self) -> Option<SyntaxNode<'a>> {
        self.first_child_of_kind(SyntaxKind::Statements)
    }

    /// The `Symbol` naming a declaration, if the node declares something.
    pub fn name_symbol(&self) -> Option<SyntaxNode<'a>> {
        match self.kind() {
            SyntaxKind::Module => self.first_child_of_kind(SyntaxKind::Symbol),
            SyntaxKind::Function | SyntaxKind::Macro => {
                let signature = self.first_expr()?;
                match signature.kind() {
                    SyntaxKind::Symbol => Some(signature),
                    _ => first_symbol(signature),
                }
            }
            SyntaxKind::TypeDecl | SyntaxKind::AbstractTypeDecl => first_symbol(*self),
            SyntaxKind::File
            | SyntaxKind::Statements
            | SyntaxKind::Assignment
            | SyntaxKind::Symbol
            | SyntaxKind::MemberAccess
            | SyntaxKind::Call
            | SyntaxKind::Args
            | SyntaxKind::String
            | SyntaxKind::StringContent
            | SyntaxKind::Command
            | SyntaxKind::Comment
            | SyntaxKind::If
            | SyntaxKind::While
            | SyntaxKind::For
            | SyntaxKind::Try
            | SyntaxKind::Using
            | SyntaxKind::Import
            | SyntaxKind::Block
            | SyntaxKind::Expr
            | SyntaxKind::Ident
            | SyntaxKind::Keyword
            | SyntaxKind::Punct
            | SyntaxKind::Literal
            | SyntaxKind::Whitespace
            | SyntaxKind::Eol => None,
        }
    }

    /// Text of [`SyntaxNode::name_symbol`].
    pub fn declared_name(&self) -> Option<&'a str> {
        self.name_symbol().map(|symbol| symbol.text().trim())
    }
}

fn first_symbol(node: SyntaxNode<'_>) -> Option<SyntaxNode<'_>> {
    node.descendants()
        .skip(1)
        .find(|child| child.kind() == SyntaxKind::Symbol)
}
