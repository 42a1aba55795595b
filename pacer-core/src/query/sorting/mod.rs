//! Stable multi-key sorting of pipeline rows
//!
//! This module provides:
//! - Sort keys that order heterogeneous JSON values
//! - Sort specifications (field plus direction) chained into compound sorts

pub mod keys;

#[cfg(test)]
mod tests;

pub use keys::*;

use super::types::{FieldPath, Row, SortOrder};
use std::cmp::Ordering;

/// One key of a compound sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: FieldPath,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: impl Into<FieldPath>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    pub fn ascending(field: impl Into<FieldPath>) -> Self {
        Self::new(field, SortOrder::Ascending)
    }

    pub fn descending(field: impl Into<FieldPath>) -> Self {
        Self::new(field, SortOrder::Descending)
    }

    fn compare(&self, a: &Row, b: &Row) -> Ordering {
        let left = ValueKey::new(self.field.resolve(a));
        let right = ValueKey::new(self.field.resolve(b));
        left.compare_with_order(&right, self.order.is_descending())
    }
}

/// Compare two rows key by key; the first non-equal key decides.
pub fn compare_rows(a: &Row, b: &Row, specs: &[SortSpec]) -> Ordering {
    specs
        .iter()
        .map(|spec| spec.compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Stable sort: rows that compare equal keep their relative order.
pub fn sort_rows(rows: &mut [Row], specs: &[SortSpec]) {
    if specs.is_empty() {
        return;
    }
    rows.sort_by(|a, b| compare_rows(a, b, specs));
}
