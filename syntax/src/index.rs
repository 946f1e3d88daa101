//! Project-wide declaration lookup.
//!
//! [`DeclarationIndex`] is the seam to whatever index the host maintains. [`MemoryIndex`] is a
//! simple implementation that indexes trees handed to it, for hosts without their own index.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{NodeId, SyntaxKind, SyntaxNode, SyntaxTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndexKind {
    ModuleDeclaration,
    TypeDeclaration,
    AbstractTypeDeclaration,
}

impl IndexKind {
    /// The index a declaration node belongs to.
    pub fn of(kind: SyntaxKind) -> Option<IndexKind> {
        match kind {
            SyntaxKind::Module => Some(IndexKind::ModuleDeclaration),
            SyntaxKind::TypeDecl => Some(IndexKind::TypeDeclaration),
            SyntaxKind::AbstractTypeDecl => Some(IndexKind::AbstractTypeDeclaration),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    Project,
    File(FileId),
}

impl SearchScope {
    pub fn contains(self, file: FileId) -> bool {
        match self {
            SearchScope::Project => true,
            SearchScope::File(only) => only == file,
        }
    }
}

/// Where a name is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSite {
    pub name: String,
    pub file: FileId,
    /// Display label of the declaring file (shown as the completion type hint).
    pub file_label: String,
    pub kind: IndexKind,
    /// Declaration node inside the tree returned by [`DeclarationIndex::syntax`].
    pub node: NodeId,
}

pub trait DeclarationIndex {
    /// Every declared name in `kind` visible from `scope`.
    fn all_keys(&self, kind: IndexKind, scope: SearchScope) -> Vec<String>;

    /// Declaration sites for `name`; empty when nothing matches.
    fn lookup(&self, kind: IndexKind, name: &str, scope: SearchScope) -> Vec<DeclarationSite>;

    /// Syntax tree of an indexed file.
    fn syntax(&self, file: FileId) -> Option<&SyntaxTree>;
}

#[derive(Debug, Clone)]
struct IndexedFile {
    label: String,
    tree: SyntaxTree,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    files: Vec<IndexedFile>,
    entries: BTreeMap<(IndexKind, String), Vec<DeclarationSite>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes every module, type and abstract type declared anywhere in `tree`.
    pub fn add_file(&mut self, label: impl Into<String>, tree: SyntaxTree) -> FileId {
        let file = FileId(u32::try_from(self.files.len()).unwrap_or(u32::MAX));
        let label = label.into();

        let sites: Vec<DeclarationSite> = tree
            .root()
            .descendants()
            .filter_map(|node| declaration_site(node, file, &label))
            .collect();
        debug!(file = %label, declarations = sites.len(), "indexed file");

        for site in sites {
            self.entries
                .entry((site.kind, site.name.clone()))
                .or_default()
                .push(site);
        }
        self.files.push(IndexedFile { label, tree });
        file
    }

    pub fn file_label(&self, file: FileId) -> Option<&str> {
        self.files
            .get(file.0 as usize)
            .map(|indexed| indexed.label.as_str())
    }
}

fn declaration_site(node: SyntaxNode<'_>, file: FileId, label: &str) -> Option<DeclarationSite> {
    let kind = IndexKind::of(node.kind())?;
    let name = node.declared_name()?;
    if name.is_empty() {
        return None;
    }
    Some(DeclarationSite {
        name: name.to_string(),
        file,
        file_label: label.to_string(),
        kind,
        node: node.id(),
    })
}

impl DeclarationIndex for MemoryIndex {
    fn all_keys(&self, kind: IndexKind, scope: SearchScope) -> Vec<String> {
        self.entries
            .iter()
            .filter(|((entry_kind, _), sites)| {
                *entry_kind == kind && sites.iter().any(|site| scope.contains(site.file))
            })
            .map(|((_, name), _)| name.clone())
            .collect()
    }

    fn lookup(&self, kind: IndexKind, name: &str, scope: SearchScope) -> Vec<DeclarationSite> {
        self.entries
            .get(&(kind, name.to_string()))
            .map(|sites| {
                sites
                    .iter()
                    .filter(|site| scope.contains(site.file))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn syntax(&self, file: FileId) -> Option<&SyntaxTree> {
        self.files.get(file.0 as usize).map(|indexed| &indexed.tree)
    }
}
