//! Recording folder model

use serde::Serialize;
use std::path::PathBuf;

use super::Cdr;

/// A filesystem folder holding voice recordings for one batch of CDRs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Folder {
    /// Folder identifier referenced by `cdrs.folderid`
    pub id: i64,

    /// Filesystem path of the folder
    pub path: String,
}

impl Folder {
    pub fn new(id: i64, path: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
        }
    }

    /// URL prefix the folder is served under
    pub fn url_prefix(&self) -> String {
        Cdr::folder_prefix(self.id)
    }

    pub fn fs_path(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}
