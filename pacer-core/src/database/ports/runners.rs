use async_trait::async_trait;
use pacer_model::RunnerRecord;

use crate::error::Result;

/// Persistence port for runner records.
///
/// Records are append-only: the engine never mutates them and there is no
/// update or delete path.
#[async_trait]
pub trait RunnerStore: Send + Sync {
    async fn insert(&self, record: RunnerRecord) -> Result<()>;

    /// Every stored record in insertion order (`created_at`, then `id`),
    /// taken at a single point in time.
    async fn snapshot(&self) -> Result<Vec<RunnerRecord>>;

    /// Backend name for logs.
    fn backend(&self) -> &'static str;
}
