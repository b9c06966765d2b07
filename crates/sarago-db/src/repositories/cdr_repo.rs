//! CDR (Call Detail Record) repository implementation
//!
//! Read-only access to the `cdrs` table. Uses runtime queries (not
//! compile-time macros) so no database is needed at build time.

use crate::query::{bind_filter, count_sql, page_sql};
use async_trait::async_trait;
use sarago_core::{models::Cdr, traits::CdrRepository, AppError, AppResult, CdrFilter};
use sqlx::MySqlPool;
use tracing::{debug, error, instrument};

/// MySQL implementation of CdrRepository
pub struct MySqlCdrRepository {
    pool: MySqlPool,
}

impl MySqlCdrRepository {
    /// Create a new CDR repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CdrRepository for MySqlCdrRepository {
    #[instrument(skip(self))]
    async fn count(&self, filter: &CdrFilter) -> AppResult<i64> {
        let sql = count_sql(filter);
        debug!(sql = %sql, "Counting CDRs");

        let result: (i64,) = bind_filter(sqlx::query_as(&sql), filter)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error counting CDRs: {}", e);
                AppError::Database(format!("Failed to count CDRs: {}", e))
            })?;

        Ok(result.0)
    }

    #[instrument(skip(self))]
    async fn fetch(&self, filter: &CdrFilter, offset: i64, limit: i64) -> AppResult<Vec<Cdr>> {
        let sql = page_sql(filter);
        debug!(sql = %sql, offset, limit, "Fetching CDR page");

        let rows = bind_filter(sqlx::query_as::<_, CdrRow>(&sql), filter)
            .bind(limit)
            .bind(offset.max(0))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error fetching CDRs: {}", e);
                AppError::Database(format!("Failed to fetch CDRs: {}", e))
            })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// Helper struct for mapping database rows to domain model
#[derive(Debug, sqlx::FromRow)]
struct CdrRow {
    cdrid: String,
    direction: String,
    duration: String,
    connected: String,
    aphone: String,
    bphone: String,
    folderid: i64,
}

impl From<CdrRow> for Cdr {
    fn from(row: CdrRow) -> Self {
        Self {
            id: row.cdrid,
            direction: row.direction,
            duration: row.duration,
            connected: row.connected,
            caller_number: row.aphone,
            called_number: row.bphone,
            folder_id: row.folderid,
        }
    }
}
