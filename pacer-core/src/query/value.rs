//! Numeric helpers over row values.
//!
//! JSON numbers keep integers and floats apart; aggregation compares and
//! combines them as one numeric domain. Non-finite results have no JSON
//! representation and become `null`, the same value used for undefined
//! aggregates.

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Number, Value};

pub fn as_number(value: &Value) -> Option<f64> {
    value.as_f64()
}

pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

/// `f64` to JSON; `NaN` and infinities become `null`.
pub fn number_value(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

/// Equality that treats `1` and `1.0` as the same number.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        _ => left == right,
    }
}

/// Round half away from zero to `places` decimals.
///
/// Rounds the shortest decimal form of `value`, so `20.025` goes to `20.03`
/// even though the nearest `f64` sits just below it. Values outside the
/// decimal range fall back to binary rounding.
pub fn round_half_away_from_zero(value: f64, places: u32) -> f64 {
    value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .and_then(|d| {
            d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
                .to_string()
                .parse::<f64>()
                .ok()
        })
        .unwrap_or_else(|| {
            let factor = 10f64.powi(places as i32);
            (value * factor).round() / factor
        })
}

/// Key under which a value is grouped. Values that serialize identically
/// share a group.
pub(crate) fn group_key(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_half_away_from_zero(66.666_666, 2), 66.67);
        assert_eq!(round_half_away_from_zero(2.5, 0), 3.0);
        assert_eq!(round_half_away_from_zero(-2.5, 0), -3.0);
        assert_eq!(round_half_away_from_zero(0.125, 2), 0.13);
    }

    #[test]
    fn rounds_decimal_midpoints_up() {
        assert_eq!(round_half_away_from_zero(4005.0 / 200.0, 2), 20.03);
        assert_eq!(round_half_away_from_zero(2300.0 / 160.0, 2), 14.38);
        assert_eq!(round_half_away_from_zero(1.005, 2), 1.01);
        assert_eq!(round_half_away_from_zero(-1.005, 2), -1.01);
    }

    #[test]
    fn non_finite_numbers_become_null() {
        assert_eq!(number_value(f64::NAN), Value::Null);
        assert_eq!(number_value(f64::INFINITY), Value::Null);
        assert_eq!(number_value(1.5), json!(1.5));
    }

    #[test]
    fn integers_and_floats_compare_numerically() {
        assert!(values_equal(&json!(1), &json!(1.0)));
        assert!(!values_equal(&json!(1), &json!("1")));
        assert!(values_equal(&json!("Pune"), &json!("Pune")));
    }
}
