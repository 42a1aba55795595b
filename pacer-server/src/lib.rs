//! # Pacer Server
//!
//! HTTP front end for the Pacer marathon analytics engine.
//!
//! ## Routes
//!
//! - `GET /health`
//! - `POST /api/runners` submit one runner
//! - `GET /api/runners/{query}` run a catalog query, e.g. `/api/runners/all`
//! - `GET /api/runners/by-city/{city}`
//! - `GET /api/queries` list the catalog

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use infra::config::Config;
pub use infra::errors::{AppError, AppResult};
