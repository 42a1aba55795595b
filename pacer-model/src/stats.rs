//! Typed views of analytics result rows.
//!
//! The query engine returns schema-less rows; these types decode the rows
//! of a given catalog query. They are produced fresh per query and never
//! persisted. Aggregates that are undefined for a group (an average over
//! zero contributing runners, a rate over zero runners) decode as `None`,
//! which is distinct from a computed `0`.

/// Row of `completion-rate-by-city` and `top-completion-cities`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CityStats {
    pub city: Option<String>,
    pub total_runners: u64,
    pub finished_runners: u64,
    /// Percentage rounded to two decimals.
    pub completion_rate: Option<f64>,
}

/// Row of `average-time-by-category`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CategoryAverage {
    pub category: String,
    pub average_time: Option<f64>,
}

/// Row of `fastest-by-category`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CategoryFastest {
    pub category: String,
    pub name: String,
    pub city: String,
    pub finish_time: i64,
}

/// Row of `multi-category-sponsors`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SponsorCoverage {
    pub sponsor: String,
    pub category_count: u64,
    pub categories: Vec<String>,
}

/// Row of `popular-stalls`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StallPopularity {
    pub stall: String,
    pub runner_count: u64,
}

/// Row of `popular-categories`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryPopularity {
    pub category: String,
    pub count: u64,
}

/// Row of `top-participation-cities`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CityParticipation {
    pub city: Option<String>,
    pub participant_count: u64,
}

/// Row of `top-3-half-marathon`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RankedFinisher {
    pub name: String,
    pub bib_number: String,
    pub city: String,
    pub finish_time: i64,
}

/// Row of `better-than-average`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BetterThanAverage {
    pub name: String,
    pub bib_number: String,
    pub city: String,
    pub category: String,
    pub finish_time: i64,
}
