#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use axum_test::TestServer;
use pacer_core::{InMemoryRunnerStore, RunnerService};
use pacer_server::{AppState, Config, routes};

/// In-memory application state for route tests.
pub fn test_state(config: Config) -> AppState {
    let service = RunnerService::with_store(Arc::new(InMemoryRunnerStore::new()));
    AppState::new(service, config)
}

pub fn build_test_server(config: Config) -> Result<TestServer> {
    let router = routes::create_app(test_state(config));
    let make_service = router.into_make_service_with_connect_info::<SocketAddr>();
    TestServer::builder()
        .http_transport()
        .build(make_service)
        .map_err(|err| anyhow!(err.to_string()))
}
