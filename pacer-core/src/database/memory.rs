use async_trait::async_trait;
use pacer_model::RunnerRecord;
use tokio::sync::RwLock;

use crate::database::ports::RunnerStore;
use crate::error::Result;

/// Process-local store used when no database is configured and in tests.
#[derive(Debug, Default)]
pub struct InMemoryRunnerStore {
    records: RwLock<Vec<RunnerRecord>>,
}

impl InMemoryRunnerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, e.g. from a fixture file.
    pub fn with_records(records: Vec<RunnerRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RunnerStore for InMemoryRunnerStore {
    async fn insert(&self, record: RunnerRecord) -> Result<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<RunnerRecord>> {
        Ok(self.records.read().await.clone())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
