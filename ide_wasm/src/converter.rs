//! Conversion utilities for the WASM/JS boundary.
//!
//! Stateless: parses host JSON into `syntax`/`ide` inputs and turns results into `dto::v1`
//! views, bridging UTF-8 byte offsets and UTF-16 editor positions on the way.

use ide::{BuiltinSource, BuiltinSources, CompletionConfig, StructureConfig};
use syntax::{BuildError, LineIndex, MemoryIndex, RawNode, SyntaxTree};
use thiserror::Error;

use crate::dto::v1::{
    CompletionItem as CompletionItemView, CompletionResult, EngineConfig, Icon as IconView,
    LineCol as LineColView, OutlineNode as OutlineNodeView, ProjectFile, Span as SpanDto,
};
use crate::offsets::{byte_offset_to_utf16, utf16_offset_to_byte};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid {what} JSON: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid syntax tree: {0}")]
    Tree(#[from] BuildError),
}

pub struct Converter;

impl Converter {
    /// Empty or missing config JSON means defaults.
    pub fn engine_config(
        config_json: Option<&str>,
    ) -> Result<(CompletionConfig, StructureConfig), ConvertError> {
        let input: EngineConfig = match config_json.map(str::trim) {
            None | Some("") => EngineConfig::default(),
            Some(json) => parse_json("config", json)?,
        };

        let inline = |list: Option<String>| list.map_or(BuiltinSource::Bundled, BuiltinSource::Inline);
        let completion = CompletionConfig {
            builtins: BuiltinSources {
                v06: inline(input.builtins_v06),
                v10: inline(input.builtins_v10),
            },
            ..CompletionConfig::default()
        };
        let mut structure = StructureConfig::default();
        if let Some(max) = input.max_label_len {
            structure.max_label_len = max as usize;
        }
        Ok((completion, structure))
    }

    pub fn tree(tree_json: &str) -> Result<SyntaxTree, ConvertError> {
        let raw: RawNode = parse_json("tree", tree_json)?;
        Ok(SyntaxTree::from_raw(&raw)?)
    }

    /// Indexes the project files; the edited file goes in last under `current_label`.
    pub fn project_index(
        project_json: Option<&str>,
        current_label: &str,
        current: &SyntaxTree,
    ) -> Result<MemoryIndex, ConvertError> {
        let files: Vec<ProjectFile> = match project_json.map(str::trim) {
            None | Some("") => Vec::new(),
            Some(json) => parse_json("project", json)?,
        };

        let mut index = MemoryIndex::new();
        for file in files {
            index.add_file(file.label, SyntaxTree::from_raw(&file.tree)?);
        }
        index.add_file(current_label, current.clone());
        Ok(index)
    }

    /// Convert a UTF-16 cursor offset (CodeMirror) to a byte offset into the tree text.
    pub fn cursor_utf16_to_byte(text: &str, cursor_utf16: u32) -> u32 {
        let byte = utf16_offset_to_byte(text, cursor_utf16 as usize);
        u32::try_from(byte).unwrap_or(u32::MAX)
    }

    pub fn completion_result(prefix: &str, items: &[ide::CompletionItem]) -> CompletionResult {
        CompletionResult {
            items: items.iter().map(Self::completion_item_view).collect(),
            prefix: prefix.to_string(),
        }
    }

    pub fn completion_item_view(item: &ide::CompletionItem) -> CompletionItemView {
        CompletionItemView {
            label: item.label.clone(),
            icon: icon_view(item.icon),
            type_hint: item.type_hint.clone(),
            priority: item.priority,
        }
    }

    pub fn outline_view(text: &str, outline: &ide::OutlineNode) -> OutlineNodeView {
        let line_index = LineIndex::new(text);
        Self::outline_view_with(text, &line_index, outline)
    }

    fn outline_view_with(
        text: &str,
        line_index: &LineIndex,
        outline: &ide::OutlineNode,
    ) -> OutlineNodeView {
        OutlineNodeView {
            label: outline.label.clone(),
            icon: icon_view(outline.icon),
            kind: outline.kind.to_string(),
            range: Self::span_dto(text, outline.span),
            start: Self::line_col_view(text, line_index, outline.span.start),
            sort_key: outline.sort_key.clone(),
            children: outline
                .children
                .iter()
                .map(|child| Self::outline_view_with(text, line_index, child))
                .collect(),
        }
    }

    pub fn span_dto(text: &str, span: syntax::Span) -> SpanDto {
        SpanDto {
            start: utf16(text, span.start),
            end: utf16(text, span.end),
        }
    }

    /// 1-based line, 1-based column in UTF-16 units.
    pub fn line_col_view(text: &str, line_index: &LineIndex, offset: u32) -> LineColView {
        let pos = line_index.line_col(offset);
        let offset = offset.min(u32::try_from(text.len()).unwrap_or(u32::MAX));
        let line_start = offset - (pos.col - 1);
        LineColView {
            line: pos.line,
            col: utf16(text, offset) - utf16(text, line_start) + 1,
        }
    }
}

fn utf16(text: &str, byte: u32) -> u32 {
    u32::try_from(byte_offset_to_utf16(text, byte as usize)).unwrap_or(u32::MAX)
}

fn icon_view(icon: ide::Icon) -> IconView {
    match icon {
        ide::Icon::Julia => IconView::Julia,
        ide::Icon::File => IconView::File,
        ide::Icon::Function => IconView::Function,
        ide::Icon::Module => IconView::Module,
        ide::Icon::Type => IconView::Type,
        ide::Icon::AbstractType => IconView::AbstractType,
        ide::Icon::Variable => IconView::Variable,
        ide::Icon::Color(rgba) => IconView::Color { hex: rgba.to_hex() },
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(
    what: &'static str,
    json: &str,
) -> Result<T, ConvertError> {
    serde_json::from_str(json).map_err(|source| ConvertError::Json { what, source })
}
