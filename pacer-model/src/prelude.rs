//! Snapshot of the types surface for HTTP clients and report tooling.
//! Prefer importing from this module instead of individual tree nodes when
//! decoding analytics rows.

pub use super::error::ModelError;
pub use super::ids::RunnerID;
pub use super::runner::{NewRunner, RunnerRecord};
pub use super::stats::{
    BetterThanAverage, CategoryAverage, CategoryFastest, CategoryPopularity,
    CityParticipation, CityStats, RankedFinisher, SponsorCoverage,
    StallPopularity,
};
pub use super::time::TimeOfDay;
