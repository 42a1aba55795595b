//! Per-group aggregate functions.

use serde_json::Value;

use super::expr::Predicate;
use super::types::{FieldPath, Row};
use super::value::{as_integer, as_number, number_value, values_equal};

/// Aggregate computed over the rows of one group.
#[derive(Debug, Clone, PartialEq)]
pub enum Accumulator {
    Count,
    /// Sum of the numeric values of a field. An empty sum is `0`.
    Sum(FieldPath),
    CountWhere(Predicate),
    /// Arithmetic mean over the rows where the field is a number.
    /// `null` when no row contributes.
    Average(FieldPath),
    /// The first row of the group, in input order.
    First,
    /// Distinct non-null values of a field, in first-seen order.
    CollectDistinct(FieldPath),
}

impl Accumulator {
    pub fn sum(field: impl Into<FieldPath>) -> Self {
        Accumulator::Sum(field.into())
    }

    pub fn average(field: impl Into<FieldPath>) -> Self {
        Accumulator::Average(field.into())
    }

    pub fn collect_distinct(field: impl Into<FieldPath>) -> Self {
        Accumulator::CollectDistinct(field.into())
    }

    pub fn evaluate<'a, I>(&self, rows: I) -> Value
    where
        I: IntoIterator<Item = &'a Row>,
    {
        let mut rows = rows.into_iter();
        match self {
            Accumulator::Count => Value::from(rows.count() as u64),
            Accumulator::CountWhere(predicate) => {
                Value::from(rows.filter(|row| predicate.matches(row)).count() as u64)
            }
            Accumulator::Sum(field) => {
                let mut int_total: Option<i64> = Some(0);
                let mut float_total = 0.0;
                for value in rows.filter_map(|row| field.resolve(row)) {
                    let Some(n) = as_number(value) else { continue };
                    float_total += n;
                    int_total = match (int_total, as_integer(value)) {
                        (Some(total), Some(i)) => total.checked_add(i),
                        _ => None,
                    };
                }
                int_total.map_or_else(|| number_value(float_total), Value::from)
            }
            Accumulator::Average(field) => {
                let (total, count) = rows
                    .filter_map(|row| field.resolve(row).and_then(as_number))
                    .fold((0.0, 0u64), |(total, count), n| (total + n, count + 1));
                if count == 0 {
                    Value::Null
                } else {
                    number_value(total / count as f64)
                }
            }
            Accumulator::First => rows
                .next()
                .map_or(Value::Null, |row| Value::Object(row.clone())),
            Accumulator::CollectDistinct(field) => {
                let mut distinct: Vec<Value> = Vec::new();
                for value in rows.filter_map(|row| field.resolve(row)) {
                    if value.is_null() || distinct.iter().any(|seen| values_equal(seen, value)) {
                        continue;
                    }
                    distinct.push(value.clone());
                }
                Value::Array(distinct)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(values: Value) -> Vec<Row> {
        values
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect()
    }

    #[test]
    fn count_and_count_where() {
        let rows = rows(json!([
            {"didFinish": true}, {"didFinish": false}, {"didFinish": true}
        ]));
        assert_eq!(Accumulator::Count.evaluate(&rows), json!(3));
        assert_eq!(
            Accumulator::CountWhere(Predicate::is_true("didFinish")).evaluate(&rows),
            json!(2)
        );
    }

    #[test]
    fn sum_stays_integral_until_a_float_appears() {
        let ints = rows(json!([{"t": 10}, {"t": 5}, {"other": 1}]));
        assert_eq!(Accumulator::sum("t").evaluate(&ints), json!(15));

        let mixed = rows(json!([{"t": 10}, {"t": 0.5}]));
        assert_eq!(Accumulator::sum("t").evaluate(&mixed), json!(10.5));

        assert_eq!(Accumulator::sum("t").evaluate(&Vec::<Row>::new()), json!(0));
    }

    #[test]
    fn average_ignores_missing_and_is_null_when_empty() {
        let rows = rows(json!([{"t": 100}, {"t": 50}, {"t": null}, {}]));
        assert_eq!(Accumulator::average("t").evaluate(&rows), json!(75.0));
        assert_eq!(Accumulator::average("missing").evaluate(&rows), Value::Null);
    }

    #[test]
    fn first_returns_the_whole_row() {
        let rows = rows(json!([{"name": "a", "t": 1}, {"name": "b", "t": 0}]));
        assert_eq!(Accumulator::First.evaluate(&rows), json!({"name": "a", "t": 1}));
        assert_eq!(Accumulator::First.evaluate(&Vec::<Row>::new()), Value::Null);
    }

    #[test]
    fn collect_distinct_keeps_first_seen_order() {
        let rows = rows(json!([
            {"c": "10K"}, {"c": "Full Marathon"}, {"c": "10K"}, {"c": null}, {}
        ]));
        assert_eq!(
            Accumulator::collect_distinct("c").evaluate(&rows),
            json!(["10K", "Full Marathon"])
        );
    }
}
