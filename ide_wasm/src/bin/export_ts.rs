use std::fs;
use std::path::PathBuf;

use ide_wasm::dto::v1::{
    CompletionItem, CompletionResult, EngineConfig, Icon, LineCol, OutlineNode, ProjectFile, Span,
};
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("generated/ide_dto.ts");
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut out = String::new();
    out.push_str("/* eslint-disable */\n");
    out.push_str("/* prettier-ignore */\n");
    out.push_str("// AUTO-GENERATED: `cargo run -p ide_wasm --bin export_ts`\n\n");

    for decl in [
        EngineConfig::decl(),
        ProjectFile::decl(),
        Span::decl(),
        LineCol::decl(),
        Icon::decl(),
        CompletionItem::decl(),
        CompletionResult::decl(),
        OutlineNode::decl(),
    ] {
        let decl = export_decl(decl);
        out.push_str(&decl);
        if !decl.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }

    fs::write(out_path, out)?;
    Ok(())
}

/// `ts-rs` emits bare declarations; the generated module exports all of them.
fn export_decl(decl: String) -> String {
    let trimmed = decl.trim_start();
    if trimmed.starts_with("export ") {
        return decl;
    }
    let keyword = ["type ", "interface ", "enum ", "declare "]
        .into_iter()
        .any(|keyword| trimmed.starts_with(keyword));
    if !keyword {
        return decl;
    }
    let indent = &decl[..decl.len() - trimmed.len()];
    format!("{indent}export {trimmed}")
}
