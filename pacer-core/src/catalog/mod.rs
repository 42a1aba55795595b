//! Named, fixed compositions of pipeline stages.
//!
//! Each [`CatalogEntry`] maps a public query name to a factory that turns the
//! caller's [`QueryParams`] into a [`Pipeline`]. The standard catalog holds
//! every report the HTTP layer exposes under `/api/runners/{query}`.

pub mod queries;

use std::fmt;

use crate::error::{PacerError, Result};
use crate::query::{Pipeline, QueryParams};

pub use queries::{
    FULL_MARATHON, HALF_MARATHON, HALF_MARATHON_PODIUM, POPULAR_CATEGORY_MIN_RUNNERS,
    POPULAR_STALL_MIN_RUNNERS, TOP_COMPLETION_CITIES,
};

pub type PipelineFactory = fn(&QueryParams) -> Result<Pipeline>;

#[derive(Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
    factory: PipelineFactory,
}

impl CatalogEntry {
    pub const fn new(name: &'static str, description: &'static str, factory: PipelineFactory) -> Self {
        Self {
            name,
            description,
            factory,
        }
    }

    pub fn pipeline(&self, params: &QueryParams) -> Result<Pipeline> {
        (self.factory)(params)
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

const STANDARD_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::new("all", "Every runner record", queries::all),
    CatalogEntry::new(
        "did-not-finish",
        "Runners who did not finish",
        queries::did_not_finish,
    ),
    CatalogEntry::new(
        "full-marathon-finishers",
        "Finishers registered for the Full Marathon",
        queries::full_marathon_finishers,
    ),
    CatalogEntry::new(
        "medal-winners",
        "Runners who received a medal",
        queries::medal_winners,
    ),
    CatalogEntry::new(
        "certificate-receivers",
        "Runners who received a certificate",
        queries::certificate_receivers,
    ),
    CatalogEntry::new(
        "by-city",
        "Runners from the city given by the `city` parameter",
        queries::by_city,
    ),
    CatalogEntry::new(
        "completion-rate-by-city",
        "Finished share of runners per city, highest first",
        queries::completion_rate_by_city,
    ),
    CatalogEntry::new(
        "top-completion-cities",
        "The three cities with the highest completion rate",
        queries::top_completion_cities,
    ),
    CatalogEntry::new(
        "fastest-by-category",
        "Fastest finisher in each category",
        queries::fastest_by_category,
    ),
    CatalogEntry::new(
        "average-time-by-category",
        "Mean finish time per category, fastest first",
        queries::average_time_by_category,
    ),
    CatalogEntry::new(
        "multi-category-sponsors",
        "Sponsors backing runners in more than one category",
        queries::multi_category_sponsors,
    ),
    CatalogEntry::new(
        "multi-category-runners",
        "Runners registered in more than one category",
        queries::multi_category_runners,
    ),
    CatalogEntry::new(
        "top-3-half-marathon",
        "Three fastest Half Marathon finishers",
        queries::top_3_half_marathon,
    ),
    CatalogEntry::new(
        "popular-stalls",
        "Refreshment stalls visited by more than 50 runners",
        queries::popular_stalls,
    ),
    CatalogEntry::new(
        "popular-categories",
        "Categories with more than 200 runners",
        queries::popular_categories,
    ),
    CatalogEntry::new(
        "better-than-average",
        "Finishers faster than their category average",
        queries::better_than_average,
    ),
    CatalogEntry::new(
        "top-participation-cities",
        "Cities ranked by number of participants",
        queries::top_participation_cities,
    ),
];

/// Registry of named queries, in registration order.
#[derive(Debug, Clone, Default)]
pub struct QueryCatalog {
    entries: Vec<CatalogEntry>,
}

impl QueryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding every built-in report.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_ENTRIES.to_vec(),
        }
    }

    /// Add an entry; an existing entry with the same name is replaced in place.
    pub fn register(&mut self, entry: CatalogEntry) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve `name` and build its pipeline.
    pub fn build(&self, name: &str, params: &QueryParams) -> Result<Pipeline> {
        self.get(name)
            .ok_or_else(|| PacerError::UnknownQuery(name.to_string()))?
            .pipeline(params)
    }
}
