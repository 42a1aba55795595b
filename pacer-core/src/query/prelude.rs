//! Intentional query crate surface for callers composing their own pipelines.

pub use super::accumulators::Accumulator;
pub use super::builder::PipelineBuilder;
pub use super::expr::{Comparison, Expr, Predicate};
pub use super::pipeline::Pipeline;
pub use super::sorting::SortSpec;
pub use super::stages::Stage;
pub use super::types::{FieldPath, QueryParams, Row, SortOrder};
