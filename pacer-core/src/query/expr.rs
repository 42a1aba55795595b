//! Row predicates and projection expressions.

use serde_json::Value;

use super::types::{FieldPath, Row};
use super::value::{as_integer, as_number, number_value, round_half_away_from_zero, values_equal};

/// Condition evaluated against a single row.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Field equals the value. A missing field compares as `null`.
    Eq(FieldPath, Value),
    /// Set field holds the value. A scalar field must equal it.
    Contains(FieldPath, Value),
    IsTrue(FieldPath),
    IsFalse(FieldPath),
    /// Field is present and not `null`.
    Exists(FieldPath),
    /// Field is a list with more than `n` entries.
    SizeGreaterThan(FieldPath, usize),
    /// Field is a number strictly greater than the threshold.
    GreaterThan(FieldPath, f64),
    And(Vec<Predicate>),
}

impl Predicate {
    pub fn eq(field: impl Into<FieldPath>, value: impl Into<Value>) -> Self {
        Predicate::Eq(field.into(), value.into())
    }

    pub fn contains(field: impl Into<FieldPath>, value: impl Into<Value>) -> Self {
        Predicate::Contains(field.into(), value.into())
    }

    pub fn is_true(field: impl Into<FieldPath>) -> Self {
        Predicate::IsTrue(field.into())
    }

    pub fn is_false(field: impl Into<FieldPath>) -> Self {
        Predicate::IsFalse(field.into())
    }

    pub fn exists(field: impl Into<FieldPath>) -> Self {
        Predicate::Exists(field.into())
    }

    pub fn size_greater_than(field: impl Into<FieldPath>, n: usize) -> Self {
        Predicate::SizeGreaterThan(field.into(), n)
    }

    pub fn greater_than(field: impl Into<FieldPath>, threshold: f64) -> Self {
        Predicate::GreaterThan(field.into(), threshold)
    }

    pub fn and(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Predicate::And(predicates.into_iter().collect())
    }

    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Predicate::Eq(field, expected) => {
                values_equal(field.resolve(row).unwrap_or(&Value::Null), expected)
            }
            Predicate::Contains(field, expected) => match field.resolve(row) {
                Some(Value::Array(items)) => items.iter().any(|item| values_equal(item, expected)),
                Some(scalar) => values_equal(scalar, expected),
                None => false,
            },
            Predicate::IsTrue(field) => matches!(field.resolve(row), Some(Value::Bool(true))),
            Predicate::IsFalse(field) => matches!(field.resolve(row), Some(Value::Bool(false))),
            Predicate::Exists(field) => field.resolve(row).is_some_and(|v| !v.is_null()),
            Predicate::SizeGreaterThan(field, n) => {
                matches!(field.resolve(row), Some(Value::Array(items)) if items.len() > *n)
            }
            Predicate::GreaterThan(field, threshold) => field
                .resolve(row)
                .and_then(as_number)
                .is_some_and(|n| n > *threshold),
            Predicate::And(predicates) => predicates.iter().all(|p| p.matches(row)),
        }
    }
}

/// How a row's value relates to a reference scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    LessThan,
    GreaterThan,
}

impl Comparison {
    pub fn holds(self, value: f64, reference: f64) -> bool {
        match self {
            Comparison::LessThan => value < reference,
            Comparison::GreaterThan => value > reference,
        }
    }
}

/// Computed value for a projected field.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Field(FieldPath),
    Literal(Value),
    /// Length of a list value.
    Size(Box<Expr>),
    Multiply(Box<Expr>, Box<Expr>),
    /// `null` when the divisor is zero or either side is not a number.
    Divide(Box<Expr>, Box<Expr>),
    Round(Box<Expr>, u32),
}

impl Expr {
    pub fn field(path: impl Into<FieldPath>) -> Self {
        Expr::Field(path.into())
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn size(self) -> Self {
        Expr::Size(Box::new(self))
    }

    pub fn multiply(self, other: Expr) -> Self {
        Expr::Multiply(Box::new(self), Box::new(other))
    }

    pub fn divide(self, other: Expr) -> Self {
        Expr::Divide(Box::new(self), Box::new(other))
    }

    pub fn round(self, places: u32) -> Self {
        Expr::Round(Box::new(self), places)
    }

    pub fn evaluate(&self, row: &Row) -> Value {
        match self {
            Expr::Field(path) => path.resolve(row).cloned().unwrap_or(Value::Null),
            Expr::Literal(value) => value.clone(),
            Expr::Size(inner) => match inner.evaluate(row) {
                Value::Array(items) => Value::from(items.len() as u64),
                _ => Value::Null,
            },
            Expr::Multiply(left, right) => {
                let (left, right) = (left.evaluate(row), right.evaluate(row));
                if let (Some(a), Some(b)) = (as_integer(&left), as_integer(&right)) {
                    if let Some(product) = a.checked_mul(b) {
                        return Value::from(product);
                    }
                }
                match (as_number(&left), as_number(&right)) {
                    (Some(a), Some(b)) => number_value(a * b),
                    _ => Value::Null,
                }
            }
            Expr::Divide(left, right) => {
                match (as_number(&left.evaluate(row)), as_number(&right.evaluate(row))) {
                    (Some(_), Some(divisor)) if divisor == 0.0 => Value::Null,
                    (Some(a), Some(b)) => number_value(a / b),
                    _ => Value::Null,
                }
            }
            Expr::Round(inner, places) => {
                let value = inner.evaluate(row);
                if as_integer(&value).is_some() {
                    return value;
                }
                match as_number(&value) {
                    Some(n) => number_value(round_half_away_from_zero(n, *places)),
                    None => Value::Null,
                }
            }
        }
    }
}
