//! Node kinds of the Julia syntax tree.
//!
//! The set is closed: every consumer matches exhaustively, so a new kind is a compile error
//! everywhere it needs a decision.
//!
//! Shape conventions the IDE layer relies on:
//! - `Module`: `Keyword("module")`, name `Symbol`, `Statements` body, `Keyword("end")`.
//! - `Function` / `Macro`: keyword, signature (`Symbol` or `Call`), `Statements` body, `end`.
//! - `TypeDecl` / `AbstractTypeDecl`: keywords, then the declared expression whose first
//!   `Symbol` is the type name.
//! - `Assignment`: target expression, `Punct("=")`, value expression.
//! - `A.b`: `MemberAccess(Symbol(A), Punct("."), Symbol(b))`.
//! - `"abc"`: `String(Punct("\""), StringContent(...), Punct("\""))`.
//! - `f(x)`: `Call(Symbol(f), Args(Punct("("), ..., Punct(")")))`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SyntaxKind {
    /* Composite nodes. */
    File,
    /// Statement list; groups children syntactically, transparent in the outline.
    Statements,
    Module,
    Function,
    Macro,
    TypeDecl,
    AbstractTypeDecl,
    Assignment,
    Symbol,
    MemberAccess,
    Call,
    Args,
    String,
    StringContent,
    Command,
    Comment,
    If,
    While,
    For,
    Try,
    Using,
    Import,
    /// `begin ... end`, `let ... end`, `quote ... end`.
    Block,
    /// Any other expression.
    Expr,

    /* Leaf tokens. */
    Ident,
    Keyword,
    Punct,
    Literal,
    Whitespace,
    Eol,
}

impl SyntaxKind {
    pub const ALL: [SyntaxKind; 30] = [
        SyntaxKind::File,
        SyntaxKind::Statements,
        SyntaxKind::Module,
        SyntaxKind::Function,
        SyntaxKind::Macro,
        SyntaxKind::TypeDecl,
        SyntaxKind::AbstractTypeDecl,
        SyntaxKind::Assignment,
        SyntaxKind::Symbol,
        SyntaxKind::MemberAccess,
        SyntaxKind::Call,
        SyntaxKind::Args,
        SyntaxKind::String,
        SyntaxKind::StringContent,
        SyntaxKind::Command,
        SyntaxKind::Comment,
        SyntaxKind::If,
        SyntaxKind::While,
        SyntaxKind::For,
        SyntaxKind::Try,
        SyntaxKind::Using,
        SyntaxKind::Import,
        SyntaxKind::Block,
        SyntaxKind::Expr,
        SyntaxKind::Ident,
        SyntaxKind::Keyword,
        SyntaxKind::Punct,
        SyntaxKind::Literal,
        SyntaxKind::Whitespace,
        SyntaxKind::Eol,
    ];

    /// Returns true for leaf kinds (tokens carry text, never children).
    pub fn is_token(self) -> bool {
        match self {
            SyntaxKind::Ident
            | SyntaxKind::Keyword
            | SyntaxKind::Punct
            | SyntaxKind::Literal
            | SyntaxKind::Whitespace
            | SyntaxKind::Eol => true,
            SyntaxKind::File
            | SyntaxKind::Statements
            | SyntaxKind::Module
            | SyntaxKind::Function
            | SyntaxKind::Macro
            | SyntaxKind::TypeDecl
            | SyntaxKind::AbstractTypeDecl
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
            | SyntaxKind::Expr => false,
        }
    }

    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::Eol)
    }

    pub fn name(self) -> &'static str {
        match self {
            SyntaxKind::File => "File",
            SyntaxKind::Statements => "Statements",
            SyntaxKind::Module => "Module",
            SyntaxKind::Function => "Function",
            SyntaxKind::Macro => "Macro",
            SyntaxKind::TypeDecl => "TypeDecl",
            SyntaxKind::AbstractTypeDecl => "AbstractTypeDecl",
            SyntaxKind::Assignment => "Assignment",
            SyntaxKind::Symbol => "Symbol",
            SyntaxKind::MemberAccess => "MemberAccess",
            SyntaxKind::Call => "Call",
            SyntaxKind::Args => "Args",
            SyntaxKind::String => "String",
            SyntaxKind::StringContent => "StringContent",
            SyntaxKind::Command => "Command",
            SyntaxKind::Comment => "Comment",
            SyntaxKind::If => "If",
            SyntaxKind::While => "While",
            SyntaxKind::For => "For",
            SyntaxKind::Try => "Try",
            SyntaxKind::Using => "Using",
            SyntaxKind::Import => "Import",
            SyntaxKind::Block => "Block",
            SyntaxKind::Expr => "Expr",
            SyntaxKind::Ident => "Ident",
            SyntaxKind::Keyword => "Keyword",
            SyntaxKind::Punct => "Punct",
            SyntaxKind::Literal => "Literal",
            SyntaxKind::Whitespace => "Whitespace",
            SyntaxKind::Eol => "Eol",
        }
    }

    pub fn from_name(name: &str) -> Option<SyntaxKind> {
        SyntaxKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
