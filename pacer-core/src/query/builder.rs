use super::accumulators::Accumulator;
use super::expr::{Comparison, Expr, Predicate};
use super::pipeline::Pipeline;
use super::sorting::SortSpec;
use super::stages::{CorrelatedJoin, Stage};
use super::types::{FieldPath, SortOrder};

/// Fluent API for composing pipelines
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    stages: Vec<Stage>,
}

impl PipelineBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    // === Row selection ===

    /// Keep rows matching the predicate
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.stages.push(Stage::Filter(predicate));
        self
    }

    /// Fan out a list field into one row per element
    pub fn unwind(mut self, field: impl Into<FieldPath>) -> Self {
        self.stages.push(Stage::Unwind(field.into()));
        self
    }

    /// Keep rows whose field compares against a per-key aggregate
    pub fn correlated_join(
        mut self,
        key: impl Into<FieldPath>,
        aggregate: Accumulator,
        field: impl Into<FieldPath>,
        compare: Comparison,
    ) -> Self {
        self.stages.push(Stage::CorrelatedJoin(CorrelatedJoin {
            key: key.into(),
            aggregate,
            field: field.into(),
            compare,
        }));
        self
    }

    // === Reshaping ===

    /// Group rows by `key`, writing the key value under `output`
    pub fn group<I, S>(mut self, key: impl Into<FieldPath>, output: impl Into<String>, accumulators: I) -> Self
    where
        I: IntoIterator<Item = (S, Accumulator)>,
        S: Into<String>,
    {
        self.stages.push(Stage::Group {
            key: key.into(),
            output: output.into(),
            accumulators: accumulators
                .into_iter()
                .map(|(name, acc)| (name.into(), acc))
                .collect(),
        });
        self
    }

    /// Replace each row with the listed fields
    pub fn project<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Expr)>,
        S: Into<String>,
    {
        self.stages.push(Stage::Project(
            fields
                .into_iter()
                .map(|(name, expr)| (name.into(), expr))
                .collect(),
        ));
        self
    }

    // === Sort methods ===

    /// Start a new sort stage
    pub fn sort_by(mut self, field: impl Into<FieldPath>, order: SortOrder) -> Self {
        self.stages
            .push(Stage::Sort(vec![SortSpec::new(field, order)]));
        self
    }

    pub fn sort_ascending(self, field: impl Into<FieldPath>) -> Self {
        self.sort_by(field, SortOrder::Ascending)
    }

    pub fn sort_descending(self, field: impl Into<FieldPath>) -> Self {
        self.sort_by(field, SortOrder::Descending)
    }

    /// Add a tie-breaking key to the sort stage just added. Without a
    /// preceding sort this starts one.
    pub fn then_by(mut self, field: impl Into<FieldPath>, order: SortOrder) -> Self {
        match self.stages.last_mut() {
            Some(Stage::Sort(specs)) => {
                specs.push(SortSpec::new(field, order));
                self
            }
            _ => self.sort_by(field, order),
        }
    }

    // === Truncation ===

    /// Keep only the first `n` rows
    pub fn limit(mut self, n: usize) -> Self {
        self.stages.push(Stage::Limit(n));
        self
    }

    // === Build method ===

    /// Build the final pipeline
    pub fn build(self) -> Pipeline {
        Pipeline::new(self.stages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn then_by_extends_the_last_sort() {
        let pipeline = PipelineBuilder::new()
            .sort_ascending("category")
            .then_by("finishTime", SortOrder::Ascending)
            .build();

        assert_eq!(
            pipeline.stages(),
            &[Stage::Sort(vec![
                SortSpec::ascending("category"),
                SortSpec::ascending("finishTime"),
            ])]
        );
    }

    #[test]
    fn then_by_without_sort_starts_one() {
        let pipeline = PipelineBuilder::new()
            .limit(3)
            .then_by("n", SortOrder::Descending)
            .build();

        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.stages()[1], Stage::Sort(vec![SortSpec::descending("n")]));
    }
}
