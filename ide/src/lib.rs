//! Julia editor intelligence: context-sensitive completion and the structure outline.
//!
//! Both features work on a [`syntax::SyntaxTree`] handed over by the host. Offsets are UTF-8
//! byte offsets into the tree text.

mod completion;
mod config;
mod context;
mod icon;
pub mod structure;

pub use completion::patterns::{self, Pattern};
pub use completion::providers::{
    self, ColorLiteralProvider, CompletionProvider, ModuleMemberProvider, ModuleNameProvider,
    StaticListProvider, TypeNameProvider,
};
pub use completion::{
    Availability, BUILTIN_PRIORITY, BuiltinSymbol, COLOR_CONSTANTS, CompletionEngine,
    CompletionItem, CompletionRegistry, KEYWORD_PRIORITY, REFERENCE_PRIORITY, Registration,
    STRING_COLOR_PRIORITY, StaticTables, TableError, load_builtins, lookup_color,
    merge_builtin_lists, parse_builtin_list, sort_by_priority,
};
pub use config::{
    BuiltinSource, BuiltinSources, CompletionConfig, DEFAULT_MAX_LABEL_LEN, Dialect,
    StructureConfig,
};
pub use context::{CompletionContext, should_auto_popup};
pub use icon::{Icon, Rgba};
pub use structure::{OutlineNode, is_block, project, project_with};

#[cfg(test)]
mod tests;
