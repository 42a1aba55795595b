//! Engine driver: resolve a catalog query and run it against a snapshot.

use std::time::Instant;

use pacer_model::RunnerRecord;
use serde_json::Value;
use tracing::debug;

use crate::catalog::QueryCatalog;
use crate::error::{PacerError, Result};
use crate::query::{QueryParams, Row};

/// Stateless query executor.
///
/// Holds only the catalog, which is never mutated after construction, so a
/// single engine can be shared behind an `Arc` by any number of tasks.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    catalog: QueryCatalog,
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl QueryEngine {
    pub fn new(catalog: QueryCatalog) -> Self {
        Self { catalog }
    }

    pub fn standard() -> Self {
        Self::new(QueryCatalog::standard())
    }

    pub fn catalog(&self) -> &QueryCatalog {
        &self.catalog
    }

    /// Evaluate `name` over `snapshot`. The full pipeline is rebuilt and
    /// re-run on every call.
    pub fn run(
        &self,
        name: &str,
        snapshot: &[RunnerRecord],
        params: &QueryParams,
    ) -> Result<Vec<Row>> {
        let pipeline = self.catalog.build(name, params)?;
        let started = Instant::now();
        let rows = records_to_rows(snapshot)?;
        let results = pipeline.execute(rows);

        debug!(
            query = name,
            stages = pipeline.len(),
            snapshot = snapshot.len(),
            results = results.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "catalog query evaluated"
        );
        Ok(results)
    }
}

/// Serialize records into pipeline rows.
pub fn records_to_rows(records: &[RunnerRecord]) -> Result<Vec<Row>> {
    records
        .iter()
        .map(|record| match serde_json::to_value(record)? {
            Value::Object(row) => Ok(row),
            other => Err(PacerError::Internal(format!(
                "runner record serialized to non-object {other}"
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pacer_model::{NewRunner, RunnerID};

    use crate::derivation::ingest;

    fn record(city: &str, did_finish: bool) -> RunnerRecord {
        let submission = NewRunner {
            name: format!("runner from {city}"),
            city: city.into(),
            categories: vec!["10K".into()],
            start_time: "08:00".into(),
            end_time: "09:00".into(),
            did_finish,
            ..Default::default()
        };
        ingest(submission, RunnerID::new(), Utc::now()).unwrap()
    }

    #[test]
    fn rows_use_wire_field_names() {
        let rows = records_to_rows(&[record("Pune", true)]).unwrap();
        let row = &rows[0];

        assert_eq!(row["city"], "Pune");
        assert_eq!(row["didFinish"], true);
        assert_eq!(row["finishTime"], 60);
        assert_eq!(row["startTime"], "08:00");
        assert!(row.contains_key("bibNumber"));
    }

    #[test]
    fn run_filters_snapshot() {
        let engine = QueryEngine::standard();
        let snapshot = vec![record("Pune", true), record("Mumbai", false)];

        let rows = engine
            .run("did-not-finish", &snapshot, &QueryParams::new())
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["city"], "Mumbai");
    }

    #[test]
    fn run_rejects_unknown_query_before_touching_rows() {
        let engine = QueryEngine::standard();
        let err = engine.run("nope", &[], &QueryParams::new()).unwrap_err();
        assert!(matches!(err, PacerError::UnknownQuery(_)));
    }
}
