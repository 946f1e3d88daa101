//! Context-sensitive completion: patterns pick providers, providers produce items, items are
//! merged and sorted by priority band.
//! Offsets are UTF-8 byte offsets into the tree text.

use std::sync::Arc;

use syntax::{DeclarationIndex, SyntaxNode, SyntaxTree};
use tracing::debug;

use crate::config::CompletionConfig;
use crate::context::CompletionContext;

mod colors;
mod items;
pub mod patterns;
pub mod providers;
mod ranking;
mod registry;
mod tables;

pub use colors::{COLOR_CONSTANTS, lookup_color};
pub use items::{
    BUILTIN_PRIORITY, CompletionItem, KEYWORD_PRIORITY, REFERENCE_PRIORITY, STRING_COLOR_PRIORITY,
};
pub use ranking::sort_by_priority;
pub use registry::{CompletionRegistry, Registration};
pub use tables::{
    Availability, BuiltinSymbol, StaticTables, TableError, load_builtins, merge_builtin_lists,
    parse_builtin_list,
};

/// Completion entry point: loaded tables plus the registry built from them.
#[derive(Debug, Clone)]
pub struct CompletionEngine {
    tables: Arc<StaticTables>,
    registry: CompletionRegistry,
    config: CompletionConfig,
}

impl CompletionEngine {
    /// Loads the builtin lists and registers the Julia providers.
    ///
    /// A builtin list that fails to load only disables builtin suggestions; check
    /// [`StaticTables::builtin_error`] through [`CompletionEngine::tables`].
    pub fn new(config: CompletionConfig) -> Self {
        let tables = Arc::new(StaticTables::load(&config.builtins));
        let registry = CompletionRegistry::julia(&tables);
        Self {
            tables,
            registry,
            config,
        }
    }

    /// Engine over a caller-built registry.
    pub fn with_registry(
        tables: Arc<StaticTables>,
        registry: CompletionRegistry,
        config: CompletionConfig,
    ) -> Self {
        Self {
            tables,
            registry,
            config,
        }
    }

    pub fn tables(&self) -> &Arc<StaticTables> {
        &self.tables
    }

    pub fn registry(&self) -> &CompletionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Completes at the leaf `position`.
    pub fn complete(
        &self,
        position: SyntaxNode<'_>,
        index: &dyn DeclarationIndex,
    ) -> Vec<CompletionItem> {
        self.complete_context(&CompletionContext::new(position, index))
    }

    /// Completes at a byte offset; empty when no leaf touches it.
    pub fn complete_at(
        &self,
        tree: &SyntaxTree,
        offset: u32,
        index: &dyn DeclarationIndex,
    ) -> Vec<CompletionItem> {
        match CompletionContext::at_offset(tree, offset, index) {
            Some(cx) => self.complete_context(&cx),
            None => Vec::new(),
        }
    }

    /// Completes in an already-built context; `cx.prefix` is used as given.
    pub fn complete_context(&self, cx: &CompletionContext<'_>) -> Vec<CompletionItem> {
        let mut items = self.registry.query(cx);
        if self.config.sort {
            sort_by_priority(&mut items);
        }
        debug!(position = ?cx.position, prefix = cx.prefix, count = items.len(), "completed");
        items
    }
}
