//! Composable row pipelines.
//!
//! A [`Pipeline`] is an ordered list of [`Stage`]s applied to rows derived
//! from runner records. Catalog queries are pipelines built with
//! [`PipelineBuilder`].

pub mod accumulators;
pub mod builder;
pub mod expr;
pub mod pipeline;
pub mod prelude;
pub mod sorting;
pub mod stages;
pub mod types;
pub mod value;

pub use accumulators::Accumulator;
pub use builder::PipelineBuilder;
pub use expr::{Comparison, Expr, Predicate};
pub use pipeline::Pipeline;
pub use sorting::{SortSpec, sort_rows};
pub use stages::{CorrelatedJoin, Stage};
pub use types::*;
