//! Core data model definitions shared across Pacer crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod prelude;
pub mod runner;
pub mod stats;
pub mod time;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use ids::RunnerID;
pub use runner::{NewRunner, RunnerRecord, split_list};
pub use stats::{
    BetterThanAverage, CategoryAverage, CategoryFastest, CategoryPopularity,
    CityParticipation, CityStats, RankedFinisher, SponsorCoverage,
    StallPopularity,
};
pub use time::TimeOfDay;
