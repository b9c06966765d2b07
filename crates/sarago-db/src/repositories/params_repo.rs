//! Params repository implementation
//!
//! The `params` table holds a single row; reads take the first row and the
//! update applies to every row, as the table is never expected to hold more.

use async_trait::async_trait;
use sarago_core::{models::Params, traits::ParamsRepository, AppError, AppResult};
use sqlx::MySqlPool;
use tracing::{error, info, instrument};

/// MySQL implementation of ParamsRepository
pub struct MySqlParamsRepository {
    pool: MySqlPool,
}

impl MySqlParamsRepository {
    /// Create a new params repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Read the params row
    #[instrument(skip(self))]
    pub async fn find(&self) -> AppResult<Option<Params>> {
        let row = sqlx::query_as::<_, ParamsRow>(
            "SELECT CAST(IFNULL(dbname, '') AS CHAR) AS dbname FROM params LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error reading params: {}", e);
            AppError::Database(format!("Failed to read params: {}", e))
        })?;

        Ok(row.map(Into::into))
    }
}

#[async_trait]
impl ParamsRepository for MySqlParamsRepository {
    async fn display_name(&self) -> AppResult<Option<String>> {
        Ok(self.find().await?.map(|p| p.dbname))
    }

    #[instrument(skip(self))]
    async fn set_display_name(&self, name: &str) -> AppResult<u64> {
        let result = sqlx::query("UPDATE params SET dbname = ?")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error updating params: {}", e);
                AppError::Database(format!("Failed to update database name: {}", e))
            })?;

        info!(dbname = name, "Database display name updated");

        Ok(result.rows_affected())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ParamsRow {
    dbname: String,
}

impl From<ParamsRow> for Params {
    fn from(row: ParamsRow) -> Self {
        Params { dbname: row.dbname }
    }
}
