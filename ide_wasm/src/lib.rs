//! WASM bindings for the Julia editor features in `ide`.
//!
//! The host sends syntax trees as `RawNode` JSON and cursor positions in UTF-16 code units;
//! results come back as `dto::v1` values.

pub mod converter;
pub mod dto;
pub mod offsets;

use ide::{CompletionContext, CompletionEngine, StructureConfig, should_auto_popup};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::converter::{ConvertError, Converter};
use crate::dto::v1::{CompletionResult, OutlineNode};

#[wasm_bindgen]
pub struct Engine {
    completion: CompletionEngine,
    structure: StructureConfig,
}

#[wasm_bindgen]
impl Engine {
    /// `config_json` is an `EngineConfig`; `None` or empty uses the bundled builtin lists.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Engine, JsError> {
        Self::from_config(config_json.as_deref()).map_err(js_error)
    }

    /// Returns a `CompletionResult`. `project_json` is a `ProjectFile[]` of the other indexed
    /// files; the edited file is indexed under `file_label`.
    pub fn complete(
        &self,
        tree_json: String,
        file_label: String,
        offset_utf16: u32,
        project_json: Option<String>,
    ) -> Result<JsValue, JsError> {
        let result = self
            .complete_view(&tree_json, &file_label, offset_utf16, project_json.as_deref())
            .map_err(js_error)?;
        to_js(&result)
    }

    /// Returns the `OutlineNode` tree of the file.
    pub fn outline(&self, tree_json: String, file_label: String) -> Result<JsValue, JsError> {
        let outline = self
            .outline_view(&tree_json, &file_label)
            .map_err(js_error)?;
        to_js(&outline)
    }

    /// Whether typing `typed` right before `offset_utf16` should open the popup.
    #[wasm_bindgen(js_name = autoPopup)]
    pub fn auto_popup(
        &self,
        tree_json: String,
        offset_utf16: u32,
        typed: String,
    ) -> Result<bool, JsError> {
        self.auto_popup_at(&tree_json, offset_utf16, &typed)
            .map_err(js_error)
    }

    /// Merged builtin names of both dialects.
    #[wasm_bindgen(js_name = builtinNames)]
    pub fn builtin_names(&self) -> Result<JsValue, JsError> {
        let names: Vec<&str> = self.completion.tables().builtin_names().collect();
        to_js(&names)
    }

    /// Why builtin suggestions are unavailable, if a builtin list failed to load.
    #[wasm_bindgen(js_name = builtinError)]
    pub fn builtin_error(&self) -> Option<String> {
        self.completion
            .tables()
            .builtin_error()
            .map(|err| err.to_string())
    }
}

impl Engine {
    pub fn from_config(config_json: Option<&str>) -> Result<Engine, ConvertError> {
        let (completion, structure) = Converter::engine_config(config_json)?;
        Ok(Engine {
            completion: CompletionEngine::new(completion),
            structure,
        })
    }

    pub fn complete_view(
        &self,
        tree_json: &str,
        file_label: &str,
        offset_utf16: u32,
        project_json: Option<&str>,
    ) -> Result<CompletionResult, ConvertError> {
        let tree = Converter::tree(tree_json)?;
        let index = Converter::project_index(project_json, file_label, &tree)?;
        let offset = Converter::cursor_utf16_to_byte(tree.text(), offset_utf16);

        let Some(cx) = CompletionContext::at_offset(&tree, offset, &index) else {
            return Ok(Converter::completion_result("", &[]));
        };
        let items = self.completion.complete_context(&cx);
        Ok(Converter::completion_result(cx.prefix, &items))
    }

    pub fn outline_view(&self, tree_json: &str, file_label: &str) -> Result<OutlineNode, ConvertError> {
        let tree = Converter::tree(tree_json)?;
        let outline = ide::project_with(&tree, file_label, &self.structure);
        Ok(Converter::outline_view(tree.text(), &outline))
    }

    /// `typed` must be a single char; anything else never pops up.
    pub fn auto_popup_at(
        &self,
        tree_json: &str,
        offset_utf16: u32,
        typed: &str,
    ) -> Result<bool, ConvertError> {
        let mut chars = typed.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Ok(false);
        };
        let tree = Converter::tree(tree_json)?;
        let offset = Converter::cursor_utf16_to_byte(tree.text(), offset_utf16);
        Ok(tree
            .token_at_offset(offset)
            .is_some_and(|position| should_auto_popup(position, ch)))
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsError::new(&err.to_string()))
}

fn js_error(err: ConvertError) -> JsError {
    JsError::new(&err.to_string())
}
