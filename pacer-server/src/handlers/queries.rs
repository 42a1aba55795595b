use axum::{Json, extract::State};
use serde::Serialize;

use crate::infra::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct QueryDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

/// List the catalog in registration order
pub async fn list_queries_handler(State(state): State<AppState>) -> Json<Vec<QueryDescriptor>> {
    let queries = state
        .service()
        .catalog()
        .entries()
        .iter()
        .map(|entry| QueryDescriptor {
            name: entry.name,
            description: entry.description,
        })
        .collect();
    Json(queries)
}

pub async fn health_handler() -> &'static str {
    "Server is healthy"
}
