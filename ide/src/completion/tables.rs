//! Static suggestion tables: keyword lists and the merged builtin symbol list.
//!
//! Tables are built once by [`StaticTables::load`] during engine start-up and are read-only
//! afterwards. A malformed or missing builtin list only empties the builtin table.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::completion::{BUILTIN_PRIORITY, CompletionItem, KEYWORD_PRIORITY};
use crate::config::{BuiltinSource, BuiltinSources, Dialect};
use crate::icon::Icon;

const BUNDLED_V06: &str = include_str!("../../data/builtin-v0.6.txt");
const BUNDLED_V10: &str = include_str!("../../data/builtin-v1.0.txt");

const KEYWORD_HINT: &str = "Keyword";
const JUMP_HINT: &str = "Jump";

const STATEMENT_BEGIN: [&str; 25] = [
    "type ",
    "abstract type ",
    "primitive type ",
    "immutable ",
    "module ",
    "baremodule ",
    "import ",
    "using ",
    "include ",
    "export ",
    "typealias ",
    "while ",
    "for ",
    "try ",
    "if ",
    "mutable struct ",
    "struct ",
    "begin ",
    "let ",
    "quote ",
    "const ",
    "local ",
    "macro ",
    "function ",
    "end",
];
const TRY_INSIDE: [&str; 2] = ["catch ", "finally"];
const LOOP_INSIDE: [&str; 2] = ["break", "continue"];
const IF_INSIDE: [&str; 2] = ["elseif ", "else"];

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read the Julia {dialect} builtin list from {}", path.display())]
    Read {
        dialect: Dialect,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("the Julia {dialect} builtin list is empty")]
    Empty { dialect: Dialect },
}

/// Which builtin lists a name appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    V06Only,
    V10Only,
    Both,
}

impl Availability {
    pub fn hint(self) -> &'static str {
        match self {
            Availability::V06Only => "0.6 Predefined symbol",
            Availability::V10Only => "1.0 Predefined symbol",
            Availability::Both => "Predefined symbol",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinSymbol {
    pub name: String,
    pub availability: Availability,
}

/// Merges the two dialect lists: 0.6 names first, then 1.0 names, each name once.
pub fn merge_builtin_lists(v06: &[String], v10: &[String]) -> Vec<BuiltinSymbol> {
    let in_v06: HashSet<&str> = v06.iter().map(String::as_str).collect();
    let in_v10: HashSet<&str> = v10.iter().map(String::as_str).collect();

    let mut seen = HashSet::new();
    v06.iter()
        .chain(v10)
        .filter(|name| seen.insert(name.as_str()))
        .map(|name| {
            let availability = match (in_v06.contains(name.as_str()), in_v10.contains(name.as_str())) {
                (true, true) => Availability::Both,
                (true, false) => Availability::V06Only,
                _ => Availability::V10Only,
            };
            BuiltinSymbol {
                name: name.clone(),
                availability,
            }
        })
        .collect()
}

/// Splits a builtin list file into names. Blank lines and surrounding whitespace are ignored.
pub fn parse_builtin_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
pub struct StaticTables {
    pub statement_begin: Arc<[CompletionItem]>,
    pub try_inside: Arc<[CompletionItem]>,
    pub loop_inside: Arc<[CompletionItem]>,
    pub if_inside: Arc<[CompletionItem]>,
    pub function_inside: Arc<[CompletionItem]>,
    pub where_clause: Arc<[CompletionItem]>,
    /// Empty when the builtin lists failed to load; see [`StaticTables::builtin_error`].
    pub builtins: Arc<[CompletionItem]>,
    builtin_symbols: Vec<BuiltinSymbol>,
    builtin_error: Option<Arc<TableError>>,
}

impl StaticTables {
    /// Builds every table. A builtin list that cannot be loaded leaves only the builtin table
    /// empty; the error is kept and reported by [`StaticTables::builtin_error`].
    pub fn load(sources: &BuiltinSources) -> Self {
        let (builtin_symbols, builtin_error) = match load_builtins(sources) {
            Ok(symbols) => (symbols, None),
            Err(err) => {
                warn!(error = %err, "builtin symbol table unavailable");
                (Vec::new(), Some(Arc::new(err)))
            }
        };

        let builtins = builtin_symbols
            .iter()
            .map(|symbol| {
                CompletionItem::new(symbol.name.clone(), Icon::Function)
                    .with_type_hint(symbol.availability.hint())
                    .with_priority(BUILTIN_PRIORITY)
            })
            .collect();

        Self {
            statement_begin: keywords(&STATEMENT_BEGIN, Some(KEYWORD_HINT)),
            try_inside: keywords(&TRY_INSIDE, None),
            loop_inside: keywords(&LOOP_INSIDE, Some(JUMP_HINT)),
            if_inside: keywords(&IF_INSIDE, None),
            function_inside: keywords(&["return"], None),
            where_clause: keywords(&["where"], Some(KEYWORD_HINT)),
            builtins,
            builtin_symbols,
            builtin_error,
        }
    }

    /// Why the builtin table is empty, if it failed to load.
    pub fn builtin_error(&self) -> Option<&TableError> {
        self.builtin_error.as_deref()
    }

    pub fn builtin_symbols(&self) -> &[BuiltinSymbol] {
        &self.builtin_symbols
    }

    /// Merged, deduplicated builtin names.
    pub fn builtin_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.builtin_symbols.iter().map(|symbol| symbol.name.as_str())
    }
}

fn keywords(labels: &[&str], hint: Option<&str>) -> Arc<[CompletionItem]> {
    labels
        .iter()
        .map(|label| {
            let item = CompletionItem::new(*label, Icon::Julia).with_priority(KEYWORD_PRIORITY);
            match hint {
                Some(hint) => item.with_type_hint(hint),
                None => item,
            }
        })
        .collect()
}

/// Reads both dialect lists and merges them.
pub fn load_builtins(sources: &BuiltinSources) -> Result<Vec<BuiltinSymbol>, TableError> {
    let v06 = read_builtin_list(Dialect::V06, sources.get(Dialect::V06))?;
    let v10 = read_builtin_list(Dialect::V10, sources.get(Dialect::V10))?;
    let merged = merge_builtin_lists(&v06, &v10);
    debug!(
        v06 = v06.len(),
        v10 = v10.len(),
        merged = merged.len(),
        "loaded builtin symbol lists"
    );
    Ok(merged)
}

fn read_builtin_list(dialect: Dialect, source: &BuiltinSource) -> Result<Vec<String>, TableError> {
    let names = match source {
        BuiltinSource::Bundled => parse_builtin_list(match dialect {
            Dialect::V06 => BUNDLED_V06,
            Dialect::V10 => BUNDLED_V10,
        }),
        BuiltinSource::Path(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| TableError::Read {
                dialect,
                path: path.clone(),
                source,
            })?;
            parse_builtin_list(&text)
        }
        BuiltinSource::Inline(text) => parse_builtin_list(text),
    };
    if names.is_empty() {
        return Err(TableError::Empty { dialect });
    }
    Ok(names)
}
