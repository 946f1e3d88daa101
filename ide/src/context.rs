//! Cursor context handed to completion providers.
//! Offsets are UTF-8 byte offsets into the tree text.

use std::fmt;

use syntax::{DeclarationIndex, SyntaxKind, SyntaxNode, SyntaxTree};

/// Characters that open the completion popup without an explicit request.
const AUTO_POPUP_CHARS: [char; 4] = ['.', '(', '[', ' '];

/// What a provider sees for one completion request.
#[derive(Clone, Copy)]
pub struct CompletionContext<'a> {
    /// Leaf under the cursor.
    pub position: SyntaxNode<'a>,
    /// Part of the word under the cursor that is already typed; empty on trivia and punctuation.
    pub prefix: &'a str,
    pub index: &'a dyn DeclarationIndex,
}

impl<'a> CompletionContext<'a> {
    /// Context for a request anchored at `position`; the whole leaf text is the prefix.
    pub fn new(position: SyntaxNode<'a>, index: &'a dyn DeclarationIndex) -> Self {
        let prefix = if is_word(position.kind()) {
            position.text()
        } else {
            ""
        };
        Self {
            position,
            prefix,
            index,
        }
    }

    /// Context for a request at a byte offset; the prefix stops at the offset.
    ///
    /// Returns `None` when no leaf touches the offset.
    pub fn at_offset(
        tree: &'a SyntaxTree,
        offset: u32,
        index: &'a dyn DeclarationIndex,
    ) -> Option<Self> {
        let position = tree.token_at_offset(offset)?;
        let prefix = if is_word(position.kind()) {
            let text = position.text();
            let cut = offset.saturating_sub(position.span().start) as usize;
            text.get(..cut.min(text.len())).unwrap_or(text)
        } else {
            ""
        };
        Some(Self {
            position,
            prefix,
            index,
        })
    }
}

impl fmt::Debug for CompletionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionContext")
            .field("position", &self.position)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

fn is_word(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Ident | SyntaxKind::Literal | SyntaxKind::Keyword
    )
}

/// Whether typing `typed` at `position` should open the popup on its own.
///
/// Never inside strings or commands, where `.`/`(`/`[`/space are ordinary text.
pub fn should_auto_popup(position: SyntaxNode<'_>, typed: char) -> bool {
    let in_text = position.parent().is_some_and(|parent| {
        matches!(
            parent.kind(),
            SyntaxKind::String | SyntaxKind::StringContent | SyntaxKind::Command
        )
    });
    !in_text && AUTO_POPUP_CHARS.contains(&typed)
}
