use std::collections::HashSet;
use std::path::PathBuf;

use crate::{
    Availability, BuiltinSource, BuiltinSources, BuiltinSymbol, Dialect, KEYWORD_PRIORITY,
    StaticTables, TableError, load_builtins, merge_builtin_lists, parse_builtin_list,
};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| name.to_string()).collect()
}

fn symbol(name: &str, availability: Availability) -> BuiltinSymbol {
    BuiltinSymbol {
        name: name.to_string(),
        availability,
    }
}

#[test]
fn merge_keeps_first_occurrence_and_tags_availability() {
    let merged = merge_builtin_lists(&names(&["a", "b", "a"]), &names(&["b", "c", "c"]));

    assert_eq!(
        merged,
        vec![
            symbol("a", Availability::V06Only),
            symbol("b", Availability::Both),
            symbol("c", Availability::V10Only),
        ]
    );
}

#[test]
fn availability_hints() {
    assert_eq!(Availability::V06Only.hint(), "0.6 Predefined symbol");
    assert_eq!(Availability::V10Only.hint(), "1.0 Predefined symbol");
    assert_eq!(Availability::Both.hint(), "Predefined symbol");
}

#[test]
fn builtin_list_parsing_skips_blank_lines() {
    assert_eq!(
        parse_builtin_list("println\n\n  push!  \r\nmap\n"),
        names(&["println", "push!", "map"])
    );
}

#[test]
fn bundled_tables_load() {
    let tables = StaticTables::load(&BuiltinSources::default());

    let all: Vec<&str> = tables.builtin_names().collect();
    let unique: HashSet<&str> = all.iter().copied().collect();
    assert_eq!(all.len(), unique.len());
    assert_eq!(tables.builtins.len(), all.len());
    assert!(unique.contains("println"));

    let availability = |name: &str| {
        tables
            .builtin_symbols()
            .iter()
            .find(|symbol| symbol.name == name)
            .map(|symbol| symbol.availability)
    };
    assert_eq!(availability("println"), Some(Availability::Both));
    assert_eq!(availability("linspace"), Some(Availability::V06Only));
    assert_eq!(availability("occursin"), Some(Availability::V10Only));
}

#[test]
fn keyword_tables() {
    let tables = StaticTables::load(&BuiltinSources::default());

    assert_eq!(tables.statement_begin.len(), 25);
    assert_eq!(tables.statement_begin[0].label, "type ");
    assert_eq!(tables.statement_begin[24].label, "end");
    assert!(
        tables
            .statement_begin
            .iter()
            .all(|item| item.type_hint.as_deref() == Some("Keyword")
                && item.priority == KEYWORD_PRIORITY)
    );

    let labels = |items: &[crate::CompletionItem]| -> Vec<String> {
        items.iter().map(|item| item.label.clone()).collect()
    };
    assert_eq!(labels(&tables.try_inside), names(&["catch ", "finally"]));
    assert_eq!(labels(&tables.loop_inside), names(&["break", "continue"]));
    assert_eq!(labels(&tables.if_inside), names(&["elseif ", "else"]));
    assert_eq!(labels(&tables.function_inside), names(&["return"]));
    assert_eq!(labels(&tables.where_clause), names(&["where"]));
    assert!(tables.try_inside.iter().all(|item| item.type_hint.is_none()));
    assert_eq!(tables.loop_inside[0].type_hint.as_deref(), Some("Jump"));
}

#[test]
fn inline_sources_replace_bundled_lists() {
    let sources = BuiltinSources {
        v06: BuiltinSource::Inline("old\nshared\n".to_string()),
        v10: BuiltinSource::Inline("shared\nnew\n".to_string()),
    };
    let tables = StaticTables::load(&sources);

    assert_eq!(
        tables.builtin_names().collect::<Vec<_>>(),
        vec!["old", "shared", "new"]
    );
    assert_eq!(
        tables.builtins[1].type_hint.as_deref(),
        Some("Predefined symbol")
    );
}

#[test]
fn empty_list_is_an_error() {
    let sources = BuiltinSources {
        v06: BuiltinSource::Bundled,
        v10: BuiltinSource::Inline("\n\n".to_string()),
    };

    let err = load_builtins(&sources).unwrap_err();
    assert!(matches!(err, TableError::Empty { dialect: Dialect::V10 }));
    assert_eq!(err.to_string(), "the Julia 1.0 builtin list is empty");
}

#[test]
fn unreadable_path_is_an_error() {
    let path = PathBuf::from("/nonexistent/julia/builtin-v0.6.txt");
    let sources = BuiltinSources {
        v06: BuiltinSource::Path(path.clone()),
        v10: BuiltinSource::Bundled,
    };

    let err = load_builtins(&sources).unwrap_err();
    match err {
        TableError::Read {
            dialect,
            path: reported,
            ..
        } => {
            assert_eq!(dialect, Dialect::V06);
            assert_eq!(reported, path);
        }
        other => panic!("expected a read error, got {other:?}"),
    }
}

#[test]
fn failed_builtin_list_leaves_other_tables_intact() {
    let sources = BuiltinSources {
        v06: BuiltinSource::Path(PathBuf::from("/nonexistent/julia/builtin-v0.6.txt")),
        v10: BuiltinSource::Bundled,
    };

    let tables = StaticTables::load(&sources);
    assert!(matches!(
        tables.builtin_error(),
        Some(TableError::Read {
            dialect: Dialect::V06,
            ..
        })
    ));
    assert!(tables.builtins.is_empty());
    assert_eq!(tables.builtin_names().count(), 0);
    assert_eq!(tables.statement_begin.len(), 25);
    assert_eq!(tables.where_clause.len(), 1);
}

#[test]
fn merging_a_list_with_itself_tags_every_name_both() {
    let list = names(&["a", "b", "a"]);

    assert_eq!(
        merge_builtin_lists(&list, &list),
        vec![
            symbol("a", Availability::Both),
            symbol("b", Availability::Both),
        ]
    );
}

#[test]
fn list_files_load_from_disk() {
    let path = std::env::temp_dir().join(format!("julia-builtins-{}.txt", std::process::id()));
    std::fs::write(&path, "from_disk\n").unwrap();
    let sources = BuiltinSources {
        v06: BuiltinSource::Path(path.clone()),
        v10: BuiltinSource::Inline("from_disk\n".to_string()),
    };

    let tables = StaticTables::load(&sources);
    std::fs::remove_file(&path).unwrap();

    assert!(tables.builtin_error().is_none());
    assert_eq!(tables.builtin_names().collect::<Vec<_>>(), vec!["from_disk"]);
}
