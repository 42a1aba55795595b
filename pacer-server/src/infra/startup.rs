use std::sync::Arc;

use anyhow::{Context, Result};
use pacer_core::{InMemoryRunnerStore, PostgresRunnerStore, RunnerService, RunnerStore};
use tracing::{info, warn};

use crate::infra::{app_state::AppState, config::Config};

/// Open the configured store. PostgreSQL when a database URL is set
/// (migrations are applied before the first request), otherwise the
/// process-local store.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn RunnerStore>> {
    match config.database_url.as_deref() {
        Some(url) => {
            let store = PostgresRunnerStore::new(url)
                .await
                .context("failed to connect to PostgreSQL")?;
            store
                .initialize_schema()
                .await
                .context("failed to apply database migrations")?;
            info!("Using PostgreSQL runner store");
            Ok(Arc::new(store))
        }
        None => {
            warn!("DATABASE_URL not set; runner records are kept in memory and lost on restart");
            Ok(Arc::new(InMemoryRunnerStore::new()))
        }
    }
}

pub async fn build_state(config: Config) -> Result<AppState> {
    let store = connect_store(&config).await?;
    let service = RunnerService::with_store(store);
    info!(
        queries = service.catalog().len(),
        backend = service.store().backend(),
        "Query engine ready"
    );
    Ok(AppState::new(service, config))
}
