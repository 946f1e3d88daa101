use std::sync::Arc;

use syntax::fixture::{self, Fixture};
use syntax::{DeclarationIndex, MemoryIndex};

use super::completion_dsl::{GEOMETRY, SHAPES};
use crate::{
    ColorLiteralProvider, CompletionContext, CompletionItem, CompletionProvider, Icon,
    ModuleMemberProvider, ModuleNameProvider, StaticListProvider, TypeNameProvider,
};

fn project() -> MemoryIndex {
    let mut index = MemoryIndex::new();
    index.add_file("geometry.jl", fixture::parse(GEOMETRY).unwrap().tree);
    index.add_file("shapes.jl", fixture::parse(SHAPES).unwrap().tree);
    index
}

fn provide(
    provider: &dyn CompletionProvider,
    src: &str,
    index: &dyn DeclarationIndex,
) -> Vec<CompletionItem> {
    let fx: Fixture = fixture::parse(src).unwrap();
    let cx = CompletionContext::at_offset(&fx.tree, fx.cursor.unwrap(), index).unwrap();
    provider.provide(&cx)
}

fn labels(items: &[CompletionItem]) -> Vec<&str> {
    items.iter().map(|item| item.label.as_str()).collect()
}

#[test]
fn static_list_is_returned_unchanged() {
    let list: Arc<[CompletionItem]> = Arc::from(vec![
        CompletionItem::new("b", Icon::Julia),
        CompletionItem::new("a", Icon::Julia).with_priority(-1),
    ]);
    let provider = StaticListProvider::new("test", list.clone());

    let items = provide(&provider, r#"(File (Symbol "zz$0"))"#, &MemoryIndex::new());
    assert_eq!(items, list.to_vec());
    assert_eq!(provider.name(), "test");
}

#[test]
fn type_names_list_concrete_then_abstract() {
    let index = project();
    let items = provide(&TypeNameProvider, r#"(File (Whitespace " $0"))"#, &index);

    assert_eq!(labels(&items), vec!["Point", "Point", "Polygon", "Shape"]);
    assert_eq!(items[0].icon, Icon::Type);
    assert_eq!(items[3].icon, Icon::AbstractType);
    assert_eq!(items[1].type_hint.as_deref(), Some("shapes.jl"));
}

#[test]
fn type_prefix_is_a_substring_match() {
    let index = project();
    let items = provide(&TypeNameProvider, r#"(File (Symbol "LYG$0"))"#, &index);

    assert_eq!(labels(&items), vec!["Polygon"]);
}

#[test]
fn module_names_come_from_the_module_index() {
    let index = project();
    let items = provide(&ModuleNameProvider, r#"(File (Symbol "met$0"))"#, &index);

    assert_eq!(labels(&items), vec!["Geometry"]);
    assert_eq!(items[0].icon, Icon::Module);
    assert!(provide(&ModuleNameProvider, r#"(File (Symbol "zz$0"))"#, &index).is_empty());
}

#[test]
fn prefix_stops_at_the_cursor() {
    let index = project();
    // Only "Pol" is typed; the rest of the word is after the cursor.
    let items = provide(&TypeNameProvider, r#"(File (Symbol "Pol$0ice"))"#, &index);

    assert_eq!(labels(&items), vec!["Polygon"]);
}

#[test]
fn colors_in_string_macro() {
    let items = provide(
        &ColorLiteralProvider,
        r#"
(File
  (Expr (Symbol "colorant") (Whitespace " ")
    (String (Punct "\"") (StringContent (Literal "tomat$0")) (Punct "\""))))
"#,
        &MemoryIndex::new(),
    );

    assert_eq!(labels(&items), vec!["tomato"]);
}

#[test]
fn colors_in_call_argument() {
    let items = provide(
        &ColorLiteralProvider,
        r#"
(File
  (Call (Symbol "colorant")
    (Args (Punct "(")
      (String (Punct "\"") (StringContent (Literal "tomat$0")) (Punct "\""))
      (Punct ")"))))
"#,
        &MemoryIndex::new(),
    );

    assert_eq!(labels(&items), vec!["tomato"]);
}

#[test]
fn colors_require_the_colorant_callee() {
    let items = provide(
        &ColorLiteralProvider,
        r#"
(File
  (Call (Symbol "parse")
    (Args (Punct "(")
      (String (Punct "\"") (StringContent (Literal "tomat$0")) (Punct "\""))
      (Punct ")"))))
"#,
        &MemoryIndex::new(),
    );

    assert!(items.is_empty());
}

#[test]
fn color_match_is_case_sensitive() {
    let items = provide(
        &ColorLiteralProvider,
        r#"
(File
  (Expr (Symbol "colorant")
    (String (Punct "\"") (StringContent (Literal "Tomat$0")) (Punct "\""))))
"#,
        &MemoryIndex::new(),
    );

    assert!(items.is_empty());
}

#[test]
fn colors_outside_strings_are_empty() {
    let items = provide(
        &ColorLiteralProvider,
        r#"(File (Expr (Symbol "colorant") (Symbol "tomat$0")))"#,
        &MemoryIndex::new(),
    );

    assert!(items.is_empty());
}

#[test]
fn module_members_need_a_qualifier_symbol() {
    let index = project();

    // Cursor on the module name itself: nothing qualifies it.
    let items = provide(
        &ModuleMemberProvider,
        r#"(File (Using (Keyword "using") (Whitespace " ") (Symbol "Geo$0")))"#,
        &index,
    );
    assert!(items.is_empty());

    let items = provide(
        &ModuleMemberProvider,
        r#"
(File
  (Using (Keyword "using") (Whitespace " ")
    (MemberAccess (Symbol "Geometry") (Punct ".") (Symbol "a$0"))))
"#,
        &index,
    );
    assert_eq!(labels(&items), vec!["area", "perimeter"]);
}

#[test]
fn module_members_need_a_member_access() {
    let index = project();

    let items = provide(
        &ModuleMemberProvider,
        r#"
(File
  (Using (Keyword "using") (Whitespace " ")
    (Expr (Symbol "Geometry") (Punct ":") (Symbol "ar$0"))))
"#,
        &index,
    );
    assert!(items.is_empty());
}

#[test]
fn module_without_body_has_no_members() {
    let mut index = MemoryIndex::new();
    index.add_file(
        "empty.jl",
        fixture::parse(r#"(File (Module (Keyword "module") (Whitespace " ") (Symbol "Empty")))"#)
            .unwrap()
            .tree,
    );

    let items = provide(
        &ModuleMemberProvider,
        r#"(File (Using (MemberAccess (Symbol "Empty") (Punct ".") (Symbol "x$0"))))"#,
        &index,
    );
    assert!(items.is_empty());
}
