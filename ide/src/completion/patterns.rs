//! Position patterns: pure predicates over the cursor's anchoring leaf.
//!
//! Patterns are plain data (an expression tree), built once when the registry is set up and
//! evaluated per query. Evaluation is total: any node, including a parentless root, yields a
//! boolean.

use syntax::{SyntaxKind, SyntaxNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Any,
    /// Some strict ancestor has this kind.
    Inside(SyntaxKind),
    /// The immediate parent has this kind.
    WithParent(SyntaxKind),
    /// One of the `hops` nearest strict ancestors has this kind.
    ///
    /// Shorter ancestor chains are scanned in full.
    AncestorWithin { kind: SyntaxKind, hops: usize },
    /// The previous non-trivia leaf has exactly this text.
    AfterLeaf(String),
    /// All members match (vacuously true when empty).
    And(Vec<Pattern>),
    /// Some member matches (false when empty).
    AnyOf(Vec<Pattern>),
    Not(Box<Pattern>),
}

pub fn inside(kind: SyntaxKind) -> Pattern {
    Pattern::Inside(kind)
}

pub fn with_parent(kind: SyntaxKind) -> Pattern {
    Pattern::WithParent(kind)
}

pub fn ancestor_within(kind: SyntaxKind, hops: usize) -> Pattern {
    Pattern::AncestorWithin { kind, hops }
}

/// None of the `hops` nearest strict ancestors has `kind`.
pub fn not_ancestor_within(kind: SyntaxKind, hops: usize) -> Pattern {
    not(ancestor_within(kind, hops))
}

pub fn after_leaf(text: impl Into<String>) -> Pattern {
    Pattern::AfterLeaf(text.into())
}

pub fn any_of(patterns: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern::AnyOf(patterns.into_iter().collect())
}

pub fn not(pattern: Pattern) -> Pattern {
    Pattern::Not(Box::new(pattern))
}

impl Pattern {
    pub fn and(self, other: Pattern) -> Pattern {
        match self {
            Pattern::And(mut all) => {
                all.push(other);
                Pattern::And(all)
            }
            Pattern::Any => other,
            first => Pattern::And(vec![first, other]),
        }
    }

    pub fn and_not(self, other: Pattern) -> Pattern {
        self.and(not(other))
    }

    pub fn matches(&self, node: SyntaxNode<'_>) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Inside(kind) => node.ancestors().any(|ancestor| ancestor.kind() == *kind),
            Pattern::WithParent(kind) => node.parent().is_some_and(|parent| parent.kind() == *kind),
            Pattern::AncestorWithin { kind, hops } => node
                .ancestors()
                .take(*hops)
                .any(|ancestor| ancestor.kind() == *kind),
            Pattern::AfterLeaf(text) => node.prev_leaf().is_some_and(|leaf| leaf.text() == text),
            Pattern::And(all) => all.iter().all(|pattern| pattern.matches(node)),
            Pattern::AnyOf(any) => any.iter().any(|pattern| pattern.matches(node)),
            Pattern::Not(pattern) => !pattern.matches(node),
        }
    }
}
