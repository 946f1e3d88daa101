use std::collections::HashSet;

use ide::patterns::{ancestor_within, inside, not_ancestor_within};
use ide::{Availability, merge_builtin_lists};
use ide::structure::cut_text;
use proptest::prelude::*;
use syntax::{SyntaxKind, SyntaxTree, TreeBuilder};

fn composite_kind() -> impl Strategy<Value = SyntaxKind> {
    let kinds: Vec<SyntaxKind> = SyntaxKind::ALL
        .into_iter()
        .filter(|kind| !kind.is_token())
        .collect();
    prop::sample::select(kinds)
}

/// A single path of nested composites ending in one `Ident` leaf.
fn chain(kinds: &[SyntaxKind]) -> SyntaxTree {
    let mut builder = TreeBuilder::new();
    for kind in kinds {
        builder.start_node(*kind);
    }
    builder.token(SyntaxKind::Ident, "x");
    for _ in kinds {
        builder.finish_node();
    }
    builder.finish().unwrap()
}

proptest! {
    #[test]
    fn ancestor_window_is_total_and_monotonic(
        kinds in prop::collection::vec(composite_kind(), 1..8),
        target in composite_kind(),
        hops in 0usize..12,
    ) {
        let tree = chain(&kinds);
        let leaf = tree.root().descendants().find(|node| node.is_token()).unwrap();

        let within = ancestor_within(target, hops).matches(leaf);
        prop_assert_eq!(not_ancestor_within(target, hops).matches(leaf), !within);
        if within {
            prop_assert!(ancestor_within(target, hops + 1).matches(leaf));
        }
        let expected = kinds.iter().rev().take(hops).any(|kind| *kind == target);
        prop_assert_eq!(within, expected);
    }

    #[test]
    fn long_windows_degrade_to_inside(
        kinds in prop::collection::vec(composite_kind(), 1..8),
        target in composite_kind(),
    ) {
        let tree = chain(&kinds);
        let leaf = tree.root().descendants().find(|node| node.is_token()).unwrap();

        prop_assert_eq!(
            ancestor_within(target, kinds.len() + 5).matches(leaf),
            inside(target).matches(leaf)
        );
    }

    #[test]
    fn patterns_never_panic_on_the_root(
        kinds in prop::collection::vec(composite_kind(), 1..4),
        target in composite_kind(),
        hops in 0usize..4,
    ) {
        let tree = chain(&kinds);
        let root = tree.root();

        prop_assert!(!inside(target).matches(root));
        prop_assert!(not_ancestor_within(target, hops).matches(root));
    }

    #[test]
    fn cut_text_bounds_label_length(text in "\\PC{0,80}", max in 0usize..60) {
        let cut = cut_text(&text, max);
        let len = text.chars().count();

        if len <= max {
            prop_assert_eq!(cut, text);
        } else {
            prop_assert_eq!(cut.chars().count(), max + 1);
            prop_assert!(cut.ends_with('…'));
            prop_assert!(text.starts_with(cut.trim_end_matches('…')));
        }
    }

    #[test]
    fn merging_a_list_with_itself_is_idempotent(
        names in prop::collection::vec("[a-z!]{1,6}", 0..24),
    ) {
        let once = merge_builtin_lists(&names, &[]);
        let twice = merge_builtin_lists(&names, &names);

        let once_names: Vec<&str> = once.iter().map(|symbol| symbol.name.as_str()).collect();
        let twice_names: Vec<&str> = twice.iter().map(|symbol| symbol.name.as_str()).collect();
        prop_assert_eq!(&once_names, &twice_names);

        let unique: HashSet<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(twice.len(), unique.len());
        prop_assert!(twice.iter().all(|symbol| symbol.availability == Availability::Both));
    }
}
