//! Ordered `(pattern, provider)` registrations and the Julia defaults.

use std::sync::Arc;

use syntax::SyntaxKind;
use tracing::debug;

use crate::completion::patterns::{
    Pattern, after_leaf, ancestor_within, any_of, inside, not_ancestor_within, with_parent,
};
use crate::completion::providers::{
    ColorLiteralProvider, CompletionProvider, ModuleMemberProvider, ModuleNameProvider,
    StaticListProvider, TypeNameProvider,
};
use crate::completion::CompletionItem;
use crate::completion::tables::StaticTables;
use crate::context::CompletionContext;

#[derive(Debug, Clone)]
pub struct Registration {
    pub pattern: Pattern,
    pub provider: Arc<dyn CompletionProvider>,
}

/// Providers keyed by position pattern, consulted in registration order.
#[derive(Debug, Clone, Default)]
pub struct CompletionRegistry {
    registrations: Vec<Registration>,
}

impl CompletionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, pattern: Pattern, provider: impl CompletionProvider + 'static) {
        self.registrations.push(Registration {
            pattern,
            provider: Arc::new(provider),
        });
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// Outputs of every provider whose pattern matches, concatenated in registration order.
    ///
    /// Nothing is deduplicated or sorted here.
    pub fn query(&self, cx: &CompletionContext<'_>) -> Vec<CompletionItem> {
        let mut items = Vec::new();
        for registration in &self.registrations {
            if !registration.pattern.matches(cx.position) {
                continue;
            }
            let produced = registration.provider.provide(cx);
            debug!(
                provider = registration.provider.name(),
                count = produced.len(),
                "provider matched"
            );
            items.extend(produced);
        }
        items
    }

    /// The Julia registrations, in the order that breaks priority ties.
    pub fn julia(tables: &StaticTables) -> Self {
        let mut registry = Self::new();

        // `function f(x) where`
        registry.register(
            inside(SyntaxKind::Function)
                .and(after_leaf(")"))
                .and_not(with_parent(SyntaxKind::Statements)),
            StaticListProvider::new("where", tables.where_clause.clone()),
        );

        let statement = inside(SyntaxKind::Statements)
            .and(not_ancestor_within(SyntaxKind::String, 2))
            .and(not_ancestor_within(SyntaxKind::Comment, 2))
            .and(not_ancestor_within(SyntaxKind::Using, 3));
        registry.register(
            statement.clone(),
            StaticListProvider::new("statement keywords", tables.statement_begin.clone()),
        );
        registry.register(
            statement,
            StaticListProvider::new("builtins", tables.builtins.clone()),
        );

        registry.register(
            inside(SyntaxKind::Statements)
                .and(not_ancestor_within(SyntaxKind::String, 2))
                .and(not_ancestor_within(SyntaxKind::Using, 3)),
            StaticListProvider::new("try keywords", tables.try_inside.clone()),
        );
        registry.register(
            any_of([inside(SyntaxKind::While), inside(SyntaxKind::For)])
                .and(not_ancestor_within(SyntaxKind::String, 2)),
            StaticListProvider::new("loop keywords", tables.loop_inside.clone()),
        );
        registry.register(
            inside(SyntaxKind::If).and(not_ancestor_within(SyntaxKind::String, 2)),
            StaticListProvider::new("if keywords", tables.if_inside.clone()),
        );
        registry.register(
            any_of([inside(SyntaxKind::Function), inside(SyntaxKind::Macro)])
                .and(not_ancestor_within(SyntaxKind::String, 2)),
            StaticListProvider::new("function keywords", tables.function_inside.clone()),
        );

        registry.register(
            inside(SyntaxKind::Statements)
                .and(not_ancestor_within(SyntaxKind::String, 2))
                .and(not_ancestor_within(SyntaxKind::Comment, 2)),
            TypeNameProvider,
        );
        registry.register(inside(SyntaxKind::Statements), ModuleNameProvider);
        registry.register(inside(SyntaxKind::StringContent), ColorLiteralProvider);
        registry.register(
            with_parent(SyntaxKind::Symbol).and(ancestor_within(SyntaxKind::Using, 3)),
            ModuleMemberProvider,
        );

        debug!(
            registrations = registry.registrations.len(),
            "registered Julia completion providers"
        );
        registry
    }
}
