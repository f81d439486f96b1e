//! Applying a selector to a column.
//!
//! Single indices are bounds-checked; slices clamp to `[0, len]` and never fail.

use crate::error::ResolveError;
use crate::reference::{ColumnRef, Selector};
use serde_json::Value;

/// Map a possibly negative position onto `len`: `-1` is the last element.
/// The result may still be outside `[0, len)`.
pub fn normalize(index: i64, len: usize) -> i64 {
    if index < 0 {
        len as i64 + index
    } else {
        index
    }
}

/// Half-open `[start, end)` range for a slice, clamped to the column.
fn slice_bounds(start: Option<i64>, end: Option<i64>, len: usize) -> (usize, usize) {
    let clamp = |i: i64| i.clamp(0, len as i64) as usize;
    let lo = start.map_or(0, |s| clamp(normalize(s, len)));
    let hi = end.map_or(len, |e| clamp(normalize(e, len)));
    (lo, hi.max(lo))
}

/// Select from `column` as described by `reference`.
///
/// A scalar stored in place of a column is only accepted with no selector.
pub fn apply(reference: &ColumnRef, column: &Value) -> Result<Value, ResolveError> {
    match (reference.selector, column) {
        (Selector::Whole, v) => Ok(v.clone()),
        (Selector::Index(index), Value::Array(items)) => {
            let effective = normalize(index, items.len());
            if effective < 0 || effective as usize >= items.len() {
                return Err(ResolveError::IndexOutOfRange {
                    reference: reference.to_string(),
                    index,
                    len: items.len(),
                });
            }
            Ok(items[effective as usize].clone())
        }
        (Selector::Slice { start, end }, Value::Array(items)) => {
            let (lo, hi) = slice_bounds(start, end, items.len());
            Ok(Value::Array(items[lo..hi].to_vec()))
        }
        (_, _) => Err(ResolveError::NotASequence {
            reference: reference.to_string(),
        }),
    }
}
