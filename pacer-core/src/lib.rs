//! # Pacer Core
//!
//! Core library for Pacer, the marathon event analytics service.
//!
//! ## Overview
//!
//! - **Derivation**: turn raw submissions into stored runner records with a
//!   computed finish time
//! - **Pipelines**: composable stages (filter, unwind, group, project, sort,
//!   limit, correlated join) over JSON rows
//! - **Catalog**: the fixed set of named analytics reports
//! - **Engine**: run a named report against a point-in-time snapshot
//! - **Storage**: the [`database::RunnerStore`] port with in-memory and
//!   PostgreSQL adapters
//!
//! ## Feature Flags
//!
//! - `database`: PostgreSQL store and embedded migrations (SQLx)
//!
//! ## Examples
//!
//! ```
//! use pacer_core::{QueryEngine, derivation::ingest, query::QueryParams};
//! use pacer_model::{NewRunner, RunnerID};
//!
//! let submission = NewRunner {
//!     name: "Asha".into(),
//!     city: "Pune".into(),
//!     categories: vec!["Half Marathon".into()],
//!     start_time: "08:00".into(),
//!     end_time: "10:15".into(),
//!     did_finish: true,
//!     ..Default::default()
//! };
//! let record = ingest(submission, RunnerID::new(), chrono::Utc::now())?;
//! assert_eq!(record.finish_time, Some(135));
//!
//! let rows = QueryEngine::standard().run("top-3-half-marathon", &[record], &QueryParams::new())?;
//! assert_eq!(rows[0]["name"], "Asha");
//! # Ok::<(), pacer_core::PacerError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Application services (submission and query facade)
pub mod application;

/// Named analytics reports
pub mod catalog;

/// Runner persistence port and adapters
pub mod database;

#[cfg(feature = "database")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Finish-time derivation at ingestion
pub mod derivation;

/// Query engine driver
pub mod engine;

/// Error types
pub mod error;

/// Row pipeline stage library
pub mod query;

pub use application::RunnerService;
pub use catalog::{CatalogEntry, QueryCatalog};
pub use database::{InMemoryRunnerStore, RunnerStore};
#[cfg(feature = "database")]
pub use database::PostgresRunnerStore;
pub use engine::QueryEngine;
pub use error::{PacerError, Result};

/// Query helper exports for callers composing pipelines
pub use query::prelude as query_prelude;
