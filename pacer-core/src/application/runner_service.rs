use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use pacer_model::{NewRunner, RunnerID, RunnerRecord};
use tracing::{info, warn};

use crate::catalog::QueryCatalog;
use crate::database::ports::RunnerStore;
use crate::derivation::ingest;
use crate::engine::QueryEngine;
use crate::error::{PacerError, Result};
use crate::query::{QueryParams, Row};

/// Application facade tying the store to the derivation step and the
/// query engine.
#[derive(Clone)]
pub struct RunnerService {
    store: Arc<dyn RunnerStore>,
    engine: Arc<QueryEngine>,
}

impl fmt::Debug for RunnerService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunnerService")
            .field("backend", &self.store.backend())
            .field("queries", &self.engine.catalog().len())
            .finish()
    }
}

impl RunnerService {
    pub fn new(store: Arc<dyn RunnerStore>, engine: Arc<QueryEngine>) -> Self {
        Self { store, engine }
    }

    /// Service over `store` with the standard catalog.
    pub fn with_store(store: Arc<dyn RunnerStore>) -> Self {
        Self::new(store, Arc::new(QueryEngine::standard()))
    }

    pub fn catalog(&self) -> &QueryCatalog {
        self.engine.catalog()
    }

    pub fn store(&self) -> &Arc<dyn RunnerStore> {
        &self.store
    }

    /// Derive and persist a submission. Nothing is stored when the times do
    /// not parse.
    pub async fn submit(&self, submission: NewRunner) -> Result<RunnerRecord> {
        let record = match ingest(submission, RunnerID::new(), Utc::now()) {
            Ok(record) => record,
            Err(err) => {
                warn!(error = %err, "rejected runner submission");
                return Err(err);
            }
        };

        self.store.insert(record.clone()).await?;
        info!(
            runner.id = %record.id,
            bib = %record.bib_number,
            finish_time = ?record.finish_time,
            "runner stored"
        );
        Ok(record)
    }

    /// Snapshot the store and evaluate a catalog query against it.
    pub async fn run_query(&self, name: &str, params: &QueryParams) -> Result<Vec<Row>> {
        // Fail fast on unknown names without a store round-trip.
        if !self.engine.catalog().contains(name) {
            return Err(PacerError::UnknownQuery(name.to_string()));
        }

        let snapshot = self.store.snapshot().await?;
        let rows = self.engine.run(name, &snapshot, params)?;
        info!(
            query = name,
            backend = self.store.backend(),
            records = snapshot.len(),
            results = rows.len(),
            "query served"
        );
        Ok(rows)
    }
}
