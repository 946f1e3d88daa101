//! Completion candidates and their priority bands.

use serde::{Deserialize, Serialize};

use crate::icon::Icon;

/// User declarations (types, modules, module members).
pub const REFERENCE_PRIORITY: i32 = 0;
/// Named colors inside `colorant"..."`.
pub const STRING_COLOR_PRIORITY: i32 = -0xC1A;
pub const KEYWORD_PRIORITY: i32 = -0xBABE;
pub const BUILTIN_PRIORITY: i32 = -0xCAFE;

/// One completion candidate for the host popup.
///
/// Higher `priority` sorts earlier. Use [`CompletionItem::new`] and chain
/// `.with_type_hint()` / `.with_priority()` to customise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    pub label: String,
    pub icon: Icon,
    /// Right-aligned grey text in the popup.
    pub type_hint: Option<String>,
    pub priority: i32,
}

impl CompletionItem {
    /// Creates an item with no type hint in the reference band.
    pub fn new(label: impl Into<String>, icon: Icon) -> Self {
        Self {
            label: label.into(),
            icon,
            type_hint: None,
            priority: REFERENCE_PRIORITY,
        }
    }

    pub fn with_type_hint(mut self, hint: impl Into<String>) -> Self {
        self.type_hint = Some(hint.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}
