//! Recording folder repository implementation

use async_trait::async_trait;
use sarago_core::{models::Folder, traits::FolderRepository, AppError, AppResult};
use sqlx::MySqlPool;
use tracing::{debug, error, info, instrument};

/// MySQL implementation of FolderRepository
pub struct MySqlFolderRepository {
    pool: MySqlPool,
}

impl MySqlFolderRepository {
    /// Create a new folder repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderRepository for MySqlFolderRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> AppResult<Vec<Folder>> {
        let rows = sqlx::query_as::<_, FolderRow>(
            "SELECT CAST(folderid AS SIGNED) AS folderid, CAST(IFNULL(datapath, '') AS CHAR) AS datapath FROM folders ORDER BY folderid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error listing folders: {}", e);
            AppError::Database(format!("Failed to list folders: {}", e))
        })?;

        debug!("Found {} recording folders", rows.len());

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn update_path(&self, id: i64, path: &str) -> AppResult<bool> {
        let result = sqlx::query("UPDATE folders SET datapath = ? WHERE folderid = ?")
            .bind(path)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error updating folder {}: {}", id, e);
                AppError::Database(format!("Failed to update folder {}: {}", id, e))
            })?;

        info!(folder = id, path, "Folder path updated");

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct FolderRow {
    folderid: i64,
    datapath: String,
}

impl From<FolderRow> for Folder {
    fn from(row: FolderRow) -> Self {
        Folder::new(row.folderid, row.datapath)
    }
}
