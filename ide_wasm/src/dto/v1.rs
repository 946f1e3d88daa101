use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// JS/editor-facing span in UTF-16 code units.
///
/// Ranges are half-open `[start, end)`; `end` is exclusive.
#[derive(Serialize, Deserialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

#[derive(Serialize, Deserialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Icon name the host maps to an asset; colors carry their swatch as `#rrggbbaa`.
#[derive(Serialize, Deserialize, TS, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Icon {
    Julia,
    File,
    Function,
    Module,
    Type,
    AbstractType,
    Variable,
    Color { hex: String },
}

#[derive(Serialize, Deserialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    pub label: String,
    pub icon: Icon,
    pub type_hint: Option<String>,
    pub priority: i32,
}

#[derive(Serialize, Deserialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct CompletionResult {
    /// Sorted, highest priority first.
    pub items: Vec<CompletionItem>,
    /// The already-typed part of the word at the cursor.
    pub prefix: String,
}

#[derive(Serialize, Deserialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct OutlineNode {
    pub label: String,
    pub icon: Icon,
    /// `SyntaxKind` name, e.g. `"Module"`.
    pub kind: String,
    pub range: Span,
    /// Navigation target: start of `range`.
    pub start: LineCol,
    pub sort_key: String,
    pub children: Vec<OutlineNode>,
}

/// One indexed project file, as sent by the host.
#[derive(Serialize, Deserialize, TS, Clone, Debug)]
pub struct ProjectFile {
    pub label: String,
    /// A `RawNode` tree: `{ kind, text?, children? }`.
    #[ts(type = "unknown")]
    pub tree: syntax::RawNode,
}

#[derive(Serialize, Deserialize, TS, Clone, Debug, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Builtin list (one name per line) replacing the bundled Julia 0.6 list.
    pub builtins_v06: Option<String>,
    /// Builtin list replacing the bundled Julia 1.0 list.
    pub builtins_v10: Option<String>,
    pub max_label_len: Option<u32>,
}
