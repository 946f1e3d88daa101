//! Suggestion providers. Each one turns a [`CompletionContext`] into candidates.
//!
//! Providers never fail: a context without the shape a provider expects yields no items.

use std::fmt;
use std::sync::Arc;

use syntax::{IndexKind, SearchScope, SyntaxKind, SyntaxNode};
use tracing::trace;

use crate::completion::colors::COLOR_CONSTANTS;
use crate::completion::{CompletionItem, REFERENCE_PRIORITY, STRING_COLOR_PRIORITY};
use crate::context::CompletionContext;
use crate::icon::Icon;

pub trait CompletionProvider: fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn provide(&self, cx: &CompletionContext<'_>) -> Vec<CompletionItem>;
}

/// Returns a fixed list unchanged.
#[derive(Debug, Clone)]
pub struct StaticListProvider {
    name: &'static str,
    items: Arc<[CompletionItem]>,
}

impl StaticListProvider {
    pub fn new(name: &'static str, items: Arc<[CompletionItem]>) -> Self {
        Self { name, items }
    }
}

impl CompletionProvider for StaticListProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn provide(&self, _cx: &CompletionContext<'_>) -> Vec<CompletionItem> {
        self.items.to_vec()
    }
}

/// User-declared types and abstract types whose name contains the prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeNameProvider;

impl CompletionProvider for TypeNameProvider {
    fn name(&self) -> &'static str {
        "type names"
    }

    fn provide(&self, cx: &CompletionContext<'_>) -> Vec<CompletionItem> {
        let mut items = declared_names(cx, IndexKind::TypeDeclaration, Icon::Type);
        items.extend(declared_names(
            cx,
            IndexKind::AbstractTypeDeclaration,
            Icon::AbstractType,
        ));
        items
    }
}

/// User-declared modules whose name contains the prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleNameProvider;

impl CompletionProvider for ModuleNameProvider {
    fn name(&self) -> &'static str {
        "module names"
    }

    fn provide(&self, cx: &CompletionContext<'_>) -> Vec<CompletionItem> {
        declared_names(cx, IndexKind::ModuleDeclaration, Icon::Module)
    }
}

/// One item per declaration site of every key in `kind` containing the prefix, ignoring case.
fn declared_names(cx: &CompletionContext<'_>, kind: IndexKind, icon: Icon) -> Vec<CompletionItem> {
    let needle = cx.prefix.to_lowercase();
    let mut items = Vec::new();
    for key in cx.index.all_keys(kind, SearchScope::Project) {
        if !key.to_lowercase().contains(&needle) {
            continue;
        }
        for site in cx.index.lookup(kind, &key, SearchScope::Project) {
            items.push(
                CompletionItem::new(key.clone(), icon)
                    .with_type_hint(site.file_label)
                    .with_priority(REFERENCE_PRIORITY),
            );
        }
    }
    trace!(?kind, prefix = cx.prefix, count = items.len(), "declared names");
    items
}

/// Named colors inside the string argument of `colorant`.
///
/// Both `colorant"bl"` (string macro) and `colorant("bl")` (call) are recognized.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorLiteralProvider;

const COLOR_CALLEE: &str = "colorant";

impl CompletionProvider for ColorLiteralProvider {
    fn name(&self) -> &'static str {
        "color literals"
    }

    fn provide(&self, cx: &CompletionContext<'_>) -> Vec<CompletionItem> {
        let Some(string) = enclosing_string(cx.position) else {
            return Vec::new();
        };
        if string_callee(string).is_none_or(|callee| callee.text().trim() != COLOR_CALLEE) {
            return Vec::new();
        }
        COLOR_CONSTANTS
            .iter()
            .filter(|(name, _)| name.contains(cx.prefix))
            .map(|(name, rgba)| {
                CompletionItem::new(*name, Icon::Color(*rgba)).with_priority(STRING_COLOR_PRIORITY)
            })
            .collect()
    }
}

/// The `String` node whose content holds `position`.
fn enclosing_string(position: SyntaxNode<'_>) -> Option<SyntaxNode<'_>> {
    let content = position
        .ancestors()
        .take(2)
        .find(|node| node.kind() == SyntaxKind::StringContent)?;
    content
        .parent()
        .filter(|parent| parent.kind() == SyntaxKind::String)
}

/// `f` in `f("...")`, otherwise the node right before the string (`f"..."`).
fn string_callee(string: SyntaxNode<'_>) -> Option<SyntaxNode<'_>> {
    let call = string
        .parent()
        .filter(|node| node.kind() == SyntaxKind::Args)
        .and_then(|args| args.parent())
        .filter(|node| node.kind() == SyntaxKind::Call);
    match call {
        Some(call) => call.first_child(),
        None => string.prev_non_trivia_sibling(),
    }
}

/// Functions declared directly in the module named before the `.` in `using Mod.x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleMemberProvider;

impl CompletionProvider for ModuleMemberProvider {
    fn name(&self) -> &'static str {
        "module members"
    }

    fn provide(&self, cx: &CompletionContext<'_>) -> Vec<CompletionItem> {
        let Some(module_name) = qualifier_symbol(cx.position) else {
            return Vec::new();
        };

        let mut items = Vec::new();
        let sites = cx
            .index
            .lookup(IndexKind::ModuleDeclaration, module_name, SearchScope::Project);
        for site in sites {
            let Some(module) = cx
                .index
                .syntax(site.file)
                .and_then(|tree| tree.node(site.node))
            else {
                continue;
            };
            let Some(body) = module.body() else {
                continue;
            };
            for function in body
                .child_nodes()
                .filter(|node| node.kind() == SyntaxKind::Function)
            {
                let Some(name) = function.declared_name() else {
                    continue;
                };
                items.push(
                    CompletionItem::new(name, Icon::Function)
                        .with_type_hint(site.file_label.as_str())
                        .with_priority(REFERENCE_PRIORITY),
                );
            }
        }
        items
    }
}

/// Text of the module symbol qualifying the symbol under the cursor in `Mod.x`.
fn qualifier_symbol(position: SyntaxNode<'_>) -> Option<&str> {
    let current = position
        .parent()
        .filter(|node| node.kind() == SyntaxKind::Symbol)?;
    let access = current
        .parent()
        .filter(|node| node.kind() == SyntaxKind::MemberAccess)?;
    let qualifier = access.first_child()?;
    if qualifier.kind() != SyntaxKind::Symbol || qualifier == current {
        return None;
    }
    let name = qualifier.text().trim();
    (!name.is_empty()).then_some(name)
}
