#![cfg(target_arch = "wasm32")]

use ide_wasm::Engine;
use serde::Deserialize;
use wasm_bindgen_test::wasm_bindgen_test;

/// `using Geometry.a|` inside the file that declares `module Geometry` with `area`.
const USING_TREE: &str = r#"{
  "kind": "File",
  "children": [
    { "kind": "Statements", "children": [
      { "kind": "Module", "children": [
        { "kind": "Keyword", "text": "module" },
        { "kind": "Whitespace", "text": " " },
        { "kind": "Symbol", "children": [{ "kind": "Ident", "text": "Geometry" }] },
        { "kind": "Statements", "children": [
          { "kind": "Function", "children": [
            { "kind": "Keyword", "text": "function" },
            { "kind": "Whitespace", "text": " " },
            { "kind": "Symbol", "children": [{ "kind": "Ident", "text": "area" }] }
          ]}
        ]}
      ]},
      { "kind": "Using", "children": [
        { "kind": "MemberAccess", "children": [
          { "kind": "Symbol", "children": [{ "kind": "Ident", "text": "Geometry" }] },
          { "kind": "Punct", "text": "." },
          { "kind": "Symbol", "children": [{ "kind": "Ident", "text": "a" }] }
        ]}
      ]}
    ]}
  ]
}"#;

fn engine() -> Engine {
    Engine::from_config(None).expect("default config")
}

#[derive(Deserialize)]
struct CompletionResultView {
    items: Vec<ItemView>,
    prefix: String,
}

#[derive(Deserialize)]
struct ItemView {
    label: String,
    priority: i32,
}

#[wasm_bindgen_test]
fn complete_returns_js_value() {
    let offset = "module Geometryfunction areaGeometry.a".len() as u32;
    let value = engine()
        .complete(USING_TREE.to_string(), "geometry.jl".to_string(), offset, None)
        .unwrap_or_else(|_| panic!("complete failed"));
    let result: CompletionResultView =
        serde_wasm_bindgen::from_value(value).expect("expected CompletionResult");

    assert_eq!(result.prefix, "a");
    assert!(result.items.iter().any(|item| item.label == "area"));
    assert!(result.items.windows(2).all(|w| w[0].priority >= w[1].priority));
}

#[wasm_bindgen_test]
fn builtin_names_include_both_dialects() {
    let value = engine()
        .builtin_names()
        .unwrap_or_else(|_| panic!("builtinNames failed"));
    let names: Vec<String> = serde_wasm_bindgen::from_value(value).expect("expected names");

    assert!(names.iter().any(|name| name == "linspace"));
    assert!(names.iter().any(|name| name == "occursin"));
}
