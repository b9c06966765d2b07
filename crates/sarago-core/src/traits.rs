//! Common traits for repositories
//!
//! Defines the database abstractions the pages are written against, plus
//! the offset-based pager used for previous/next navigation.

use crate::error::AppError;
use crate::filter::CdrFilter;
use crate::models::{Cdr, Folder};
use async_trait::async_trait;

/// CDR repository
#[async_trait]
pub trait CdrRepository: Send + Sync {
    /// Count CDRs matching the filter
    async fn count(&self, filter: &CdrFilter) -> Result<i64, AppError>;

    /// Fetch one page of CDRs matching the filter
    async fn fetch(&self, filter: &CdrFilter, offset: i64, limit: i64)
        -> Result<Vec<Cdr>, AppError>;
}

/// Recording folder repository
#[async_trait]
pub trait FolderRepository: Send + Sync {
    /// All folders ordered by id
    async fn list(&self) -> Result<Vec<Folder>, AppError>;

    /// Change a folder's filesystem path; `false` when no such folder
    async fn update_path(&self, id: i64, path: &str) -> Result<bool, AppError>;
}

/// Repository for the single-row `params` table
#[async_trait]
pub trait ParamsRepository: Send + Sync {
    /// Display name of the database instance, `None` when the row is missing
    async fn display_name(&self) -> Result<Option<String>, AppError>;

    /// Set the display name; returns the number of rows changed
    async fn set_display_name(&self, name: &str) -> Result<u64, AppError>;
}

/// Offset pagination state of one lookup page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetPager {
    pub offset: i64,
    pub page_size: i64,
    pub total: i64,
}

impl OffsetPager {
    pub fn new(offset: i64, page_size: i64, total: i64) -> Self {
        Self {
            offset: offset.max(0),
            page_size: page_size.max(1),
            total: total.max(0),
        }
    }

    /// Offset of the previous page, `None` on the first page
    ///
    /// Never negative: stepping back from inside the first page lands on 0.
    pub fn previous_offset(&self) -> Option<i64> {
        if self.offset <= 0 {
            return None;
        }
        Some((self.offset - self.page_size).max(0))
    }

    /// Offset of the next page, `None` when the rest fits on this page
    pub fn next_offset(&self) -> Option<i64> {
        if self.total - self.offset > self.page_size {
            Some(self.offset + self.page_size)
        } else {
            None
        }
    }
}
