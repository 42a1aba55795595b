use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::AppState;
use crate::handlers::{
    health_handler, list_queries_handler, run_query_handler, runners_by_city_handler,
    submit_runner_handler,
};
use crate::infra::config::Config;

/// Create the `/api` routes
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/api/runners", post(submit_runner_handler))
        .route("/api/runners/by-city/{city}", get(runners_by_city_handler))
        .route("/api/runners/{query}", get(run_query_handler))
        .route("/api/queries", get(list_queries_handler))
}

/// Full application: API routes, health check, static assets and the
/// tracing and CORS layers.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = build_cors_layer(state.config());

    let mut app = Router::new()
        .route("/health", get(health_handler))
        .merge(create_api_router());

    if let Some(dir) = state.config().static_dir.as_ref() {
        if dir.is_dir() {
            info!(path = %dir.display(), "Serving static assets");
            app = app.fallback_service(ServeDir::new(dir));
        } else {
            warn!(path = %dir.display(), "STATIC_DIR is not a directory; static assets disabled");
        }
    }

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer),
    )
    .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
