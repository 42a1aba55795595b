//! Pipeline stages.
//!
//! Every stage is a pure transformation from an ordered sequence of rows to
//! an ordered sequence of rows. Stages are plain data so that a pipeline can
//! be cloned, compared and logged before it runs.

use std::collections::HashMap;

use serde_json::Value;

use super::accumulators::Accumulator;
use super::expr::{Comparison, Expr, Predicate};
use super::sorting::{SortSpec, sort_rows};
use super::types::{FieldPath, Row};
use super::value::{as_number, group_key};

/// Compare each row against a scalar computed from every row sharing its key.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelatedJoin {
    pub key: FieldPath,
    /// Evaluated once per key over the whole input.
    pub aggregate: Accumulator,
    pub field: FieldPath,
    pub compare: Comparison,
}

impl CorrelatedJoin {
    fn apply(&self, rows: Vec<Row>) -> Vec<Row> {
        let mut partitions: HashMap<String, Vec<&Row>> = HashMap::new();
        for row in &rows {
            let key = group_key(self.key.resolve(row).unwrap_or(&Value::Null));
            partitions.entry(key).or_default().push(row);
        }

        let scalars: HashMap<String, f64> = partitions
            .into_iter()
            .filter_map(|(key, members)| {
                as_number(&self.aggregate.evaluate(members)).map(|scalar| (key, scalar))
            })
            .collect();

        rows.into_iter()
            .filter(|row| {
                let key = group_key(self.key.resolve(row).unwrap_or(&Value::Null));
                let Some(scalar) = scalars.get(&key) else {
                    return false;
                };
                self.field
                    .resolve(row)
                    .and_then(as_number)
                    .is_some_and(|value| self.compare.holds(value, *scalar))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Filter(Predicate),
    /// Fan a list field out into one row per element.
    Unwind(FieldPath),
    /// One output row per distinct key value. The key is written under
    /// `output`, followed by each named accumulator.
    Group {
        key: FieldPath,
        output: String,
        accumulators: Vec<(String, Accumulator)>,
    },
    /// Replace each row with the listed fields, in order.
    Project(Vec<(String, Expr)>),
    Sort(Vec<SortSpec>),
    Limit(usize),
    CorrelatedJoin(CorrelatedJoin),
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Filter(_) => "filter",
            Stage::Unwind(_) => "unwind",
            Stage::Group { .. } => "group",
            Stage::Project(_) => "project",
            Stage::Sort(_) => "sort",
            Stage::Limit(_) => "limit",
            Stage::CorrelatedJoin(_) => "correlated_join",
        }
    }

    pub fn apply(&self, rows: Vec<Row>) -> Vec<Row> {
        match self {
            Stage::Filter(predicate) => rows
                .into_iter()
                .filter(|row| predicate.matches(row))
                .collect(),
            Stage::Unwind(field) => unwind(rows, field),
            Stage::Group {
                key,
                output,
                accumulators,
            } => group(&rows, key, output, accumulators),
            Stage::Project(fields) => rows
                .iter()
                .map(|row| {
                    fields
                        .iter()
                        .map(|(name, expr)| (name.clone(), expr.evaluate(row)))
                        .collect()
                })
                .collect(),
            Stage::Sort(specs) => {
                let mut rows = rows;
                sort_rows(&mut rows, specs);
                rows
            }
            Stage::Limit(n) => {
                let mut rows = rows;
                rows.truncate(*n);
                rows
            }
            Stage::CorrelatedJoin(join) => join.apply(rows),
        }
    }
}

fn unwind(rows: Vec<Row>, field: &FieldPath) -> Vec<Row> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let items = match field.resolve(&row) {
            Some(Value::Array(items)) => Some(items.clone()),
            Some(Value::Null) | None => continue,
            Some(_) => None,
        };
        // Scalars pass through untouched.
        let Some(items) = items else {
            out.push(row);
            continue;
        };
        for item in items {
            let mut fanned = row.clone();
            if let Some(slot) = field.resolve_mut(&mut fanned) {
                *slot = item;
            }
            out.push(fanned);
        }
    }
    out
}

fn group(
    rows: &[Row],
    key: &FieldPath,
    output: &str,
    accumulators: &[(String, Accumulator)],
) -> Vec<Row> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(Value, Vec<&Row>)> = Vec::new();

    for row in rows {
        let value = key.resolve(row).cloned().unwrap_or(Value::Null);
        let slot = *index.entry(group_key(&value)).or_insert_with(|| {
            groups.push((value, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(row);
    }

    groups
        .into_iter()
        .map(|(value, members)| {
            let mut out = Row::new();
            out.insert(output.to_string(), value);
            for (name, accumulator) in accumulators {
                out.insert(name.clone(), accumulator.evaluate(members.iter().copied()));
            }
            out
        })
        .collect()
}
