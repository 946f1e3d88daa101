use crate::fixture;
use crate::{DeclarationIndex, IndexKind, MemoryIndex, SearchScope, SyntaxKind};

const GEOMETRY: &str = r#"
(File
  (Statements
    (Module (Keyword "module") (Symbol "Geometry")
      (Statements
        (TypeDecl (Keyword "struct") (Symbol "Point"))
        (AbstractTypeDecl (Keyword "abstract type") (Symbol "Shape"))))))
"#;

const SHAPES: &str = r#"
(File
  (Statements
    (TypeDecl (Keyword "struct") (Symbol "Point"))
    (TypeDecl (Keyword "struct") (Symbol "Circle"))))
"#;

fn index() -> MemoryIndex {
    let mut index = MemoryIndex::new();
    index.add_file("geometry.jl", fixture::parse(GEOMETRY).unwrap().tree);
    index.add_file("shapes.jl", fixture::parse(SHAPES).unwrap().tree);
    index
}

#[test]
fn memory_index_collects_sorted_keys_per_kind() {
    let index = index();

    assert_eq!(
        index.all_keys(IndexKind::TypeDeclaration, SearchScope::Project),
        vec!["Circle", "Point"]
    );
    assert_eq!(
        index.all_keys(IndexKind::AbstractTypeDeclaration, SearchScope::Project),
        vec!["Shape"]
    );
    assert_eq!(
        index.all_keys(IndexKind::ModuleDeclaration, SearchScope::Project),
        vec!["Geometry"]
    );
}

#[test]
fn memory_index_lookup_returns_one_site_per_declaration() {
    let index = index();
    let sites = index.lookup(IndexKind::TypeDeclaration, "Point", SearchScope::Project);

    let labels: Vec<&str> = sites.iter().map(|site| site.file_label.as_str()).collect();
    assert_eq!(labels, vec!["geometry.jl", "shapes.jl"]);

    let site = &sites[0];
    let tree = index.syntax(site.file).unwrap();
    assert_eq!(tree.node(site.node).unwrap().kind(), SyntaxKind::TypeDecl);
}

#[test]
fn memory_index_respects_file_scope() {
    let index = index();
    let shapes = crate::FileId(1);

    assert_eq!(
        index.all_keys(IndexKind::ModuleDeclaration, SearchScope::File(shapes)),
        Vec::<String>::new()
    );
    assert_eq!(
        index
            .lookup(IndexKind::TypeDeclaration, "Point", SearchScope::File(shapes))
            .len(),
        1
    );
    assert_eq!(index.file_label(shapes), Some("shapes.jl"));
}

#[test]
fn memory_index_lookup_of_unknown_name_is_empty() {
    let index = index();

    assert!(
        index
            .lookup(IndexKind::ModuleDeclaration, "Nope", SearchScope::Project)
            .is_empty()
    );
}
