use async_trait::async_trait;
use pacer_model::RunnerRecord;
use sqlx::{PgPool, postgres::PgPoolOptions, types::Json};
use std::{fmt, time::Duration};
use tracing::info;

use crate::database::ports::RunnerStore;
use crate::error::{PacerError, Result};

/// Runner store backed by a single PostgreSQL table of JSONB documents.
#[derive(Clone)]
pub struct PostgresRunnerStore {
    pool: PgPool,
    max_connections: u32,
    min_connections: u32,
}

impl fmt::Debug for PostgresRunnerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresRunnerStore")
            .field("pool_size", &self.pool.size())
            .field("idle_connections", &self.pool.num_idle())
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

fn env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(default)
}

impl PostgresRunnerStore {
    pub async fn new(connection_string: &str) -> Result<Self> {
        let max_connections = env_u32("DB_MAX_CONNECTIONS", 10);
        let min_connections = env_u32("DB_MIN_CONNECTIONS", 1);

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(connection_string)
            .await
            .map_err(|e| PacerError::Internal(format!("Database connection failed: {}", e)))?;

        info!(
            "Database pool initialized with max_connections={}, min_connections={}",
            max_connections, min_connections
        );

        Ok(Self {
            pool,
            max_connections,
            min_connections,
        })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        let max_connections = pool.options().get_max_connections();
        let min_connections = pool.options().get_min_connections();
        Self {
            pool,
            max_connections,
            min_connections,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn initialize_schema(&self) -> Result<()> {
        crate::MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| PacerError::Internal(format!("Migration failed: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl RunnerStore for PostgresRunnerStore {
    async fn insert(&self, record: RunnerRecord) -> Result<()> {
        sqlx::query("INSERT INTO runners (id, document, created_at) VALUES ($1, $2, $3)")
            .bind(record.id.to_uuid())
            .bind(Json(&record))
            .bind(record.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<RunnerRecord>> {
        // A single statement reads from one MVCC snapshot.
        let rows: Vec<(Json<RunnerRecord>,)> =
            sqlx::query_as("SELECT document FROM runners ORDER BY created_at, id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(Json(record),)| record).collect())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
