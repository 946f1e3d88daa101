//! Final ordering of the merged completion list.

use crate::completion::CompletionItem;

/// Stable sort, highest priority first.
///
/// Items with equal priority keep their relative order, so registration order decides ties.
pub fn sort_by_priority(items: &mut [CompletionItem]) {
    items.sort_by(|a, b| b.priority.cmp(&a.priority));
}
