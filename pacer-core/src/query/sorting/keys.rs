//! Sort keys over row values
//!
//! A key wraps the value extracted from a row and orders values of
//! different JSON types consistently. Missing and `null` values always sort
//! after present ones, whichever direction is requested.

use ordered_float::OrderedFloat;
use serde_json::{Number, Value};
use std::cmp::Ordering;

/// Borrowed sort key for one field of one row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueKey<'a>(Option<&'a Value>);

impl<'a> ValueKey<'a> {
    /// `null` is treated the same as an absent field.
    pub fn new(value: Option<&'a Value>) -> Self {
        ValueKey(value.filter(|v| !v.is_null()))
    }

    pub fn missing() -> Self {
        ValueKey(None)
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    /// Compare two keys while ensuring missing values always sort last
    pub fn compare_with_order(&self, other: &Self, reverse: bool) -> Ordering {
        match (self.0, other.0) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                if reverse {
                    compare_present(b, a)
                } else {
                    compare_present(a, b)
                }
            }
        }
    }
}

impl Eq for ValueKey<'_> {}

impl Ord for ValueKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_with_order(other, false)
    }
}

impl PartialOrd for ValueKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numbers < strings < lists < objects < booleans.
fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Number(_) => 0,
        Value::String(_) => 1,
        Value::Array(_) => 2,
        Value::Object(_) => 3,
        Value::Bool(_) => 4,
        Value::Null => 5,
    }
}

fn number_key(n: &Number) -> Option<OrderedFloat<f64>> {
    n.as_f64().map(OrderedFloat)
}

/// Total order over non-null values.
pub fn compare_present(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => number_key(x).cmp(&number_key(y)),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => x
            .iter()
            .zip(y.iter())
            .map(|(l, r)| ValueKey::new(Some(l)).cmp(&ValueKey::new(Some(r))))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        (Value::Object(_), Value::Object(_)) => a.to_string().cmp(&b.to_string()),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}
