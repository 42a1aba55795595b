//! HTTP request handlers organized by functionality

pub mod queries;
pub mod runners;

// Re-export commonly used handlers
pub use queries::{health_handler, list_queries_handler};
pub use runners::{run_query_handler, runners_by_city_handler, submit_runner_handler};
