use tracing::trace;

use super::stages::Stage;
use super::types::Row;

/// Ordered composition of stages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// The identity pipeline: rows come back unchanged.
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage in order. Input rows are consumed; nothing outside the
    /// pipeline is touched.
    pub fn execute(&self, rows: Vec<Row>) -> Vec<Row> {
        self.stages.iter().enumerate().fold(rows, |rows, (index, stage)| {
            let input = rows.len();
            let output = stage.apply(rows);
            trace!(
                stage = stage.name(),
                index,
                rows_in = input,
                rows_out = output.len(),
                "pipeline stage applied"
            );
            output
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::builder::PipelineBuilder;
    use crate::query::expr::Predicate;
    use serde_json::{Value, json};

    fn rows(values: Value) -> Vec<Row> {
        values
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect()
    }

    #[test]
    fn identity_returns_input() {
        let input = rows(json!([{"a": 1}, {"a": 2}]));
        assert_eq!(Pipeline::identity().execute(input.clone()), input);
    }

    #[test]
    fn stages_run_in_order() {
        let input = rows(json!([
            {"n": 3, "keep": true}, {"n": 1, "keep": true},
            {"n": 2, "keep": false}, {"n": 0, "keep": true}
        ]));
        let pipeline = PipelineBuilder::new()
            .filter(Predicate::is_true("keep"))
            .sort_ascending("n")
            .limit(2)
            .build();

        let out = pipeline.execute(input);

        assert_eq!(pipeline.len(), 3);
        assert_eq!(out.iter().map(|r| r["n"].clone()).collect::<Vec<_>>(), vec![json!(0), json!(1)]);
    }
}
