//! Stable, order-preserving bucketing of expenses and checklist items.

use crate::model::{ExpenseItem, PreparationItem, GENERAL};
use indexmap::IndexMap;
use std::hash::Hash;

/// Buckets keyed by `K`, in the order each key was first seen. Items keep their relative order
/// inside a bucket.
pub type Grouped<K, V> = IndexMap<K, Vec<V>>;

/// Buckets `items` by `key` in a single pass.
pub fn group_by<I, K, F>(items: I, mut key: F) -> Grouped<K, I::Item>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut groups = Grouped::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Expenses bucketed by category.
pub fn group_expenses(items: &[ExpenseItem]) -> Grouped<&str, &ExpenseItem> {
    group_by(items, expense_category)
}

fn expense_category<'a>(item: &&'a ExpenseItem) -> &'a str {
    &item.category
}

/// Checklist items bucketed by category, then by sub-category.
pub type PreparationGroups<'a> = IndexMap<&'a str, Grouped<&'a str, &'a PreparationItem>>;

/// Checklist items bucketed by category and then by sub-category, where a missing sub-category is
/// `GENERAL`.
pub fn group_preparation(items: &[PreparationItem]) -> PreparationGroups<'_> {
    group_by(items, prep_category)
        .into_iter()
        .map(|(category, bucket)| (category, group_by(bucket, prep_sub_category)))
        .collect()
}

fn prep_category<'a>(item: &&'a PreparationItem) -> &'a str {
    &item.category
}

fn prep_sub_category<'a>(item: &&'a PreparationItem) -> &'a str {
    item.sub_category()
}

/// A sub-group heading is hidden only when it is the lone `GENERAL` group of its category.
pub fn show_sub_heading(sub_category: &str, sibling_count: usize) -> bool {
    sub_category != GENERAL || sibling_count > 1
}

/// The text shown for a sub-group heading.
pub fn sub_heading_label(sub_category: &str) -> &str {
    if sub_category == GENERAL {
        "Checklist"
    } else {
        sub_category
    }
}
