use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use pacer_core::query::{QueryParams, Row};
use pacer_model::{NewRunner, RunnerID};
use serde::Serialize;

use crate::infra::{
    app_state::AppState,
    errors::{ApiJson, AppResult},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRunnerResponse {
    pub message: &'static str,
    pub id: RunnerID,
    pub finish_time: Option<i64>,
}

/// Accept one runner submission
pub async fn submit_runner_handler(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<NewRunner>,
) -> AppResult<(StatusCode, Json<SubmitRunnerResponse>)> {
    let record = state.service().submit(submission).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitRunnerResponse {
            message: "Runner submitted!",
            id: record.id,
            finish_time: record.finish_time,
        }),
    ))
}

/// Run any catalog query. Query-string pairs become query parameters.
pub async fn run_query_handler(
    State(state): State<AppState>,
    Path(query): Path<String>,
    Query(params): Query<QueryParams>,
) -> AppResult<Json<Vec<Row>>> {
    let rows = state.service().run_query(&query, &params).await?;
    Ok(Json(rows))
}

pub async fn runners_by_city_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> AppResult<Json<Vec<Row>>> {
    let params = QueryParams::new().with("city", city);
    let rows = state.service().run_query("by-city", &params).await?;
    Ok(Json(rows))
}
