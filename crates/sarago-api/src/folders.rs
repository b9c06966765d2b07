//! Voice-recording folder mounts
//!
//! Each configured folder is served read-only under `/cdr{id}/`. The mapping
//! is built once at startup from the `folders` table and never changes while
//! the process runs.

use actix_files::Files;
use actix_web::web;
use sarago_core::{models::Folder, traits::FolderRepository, AppResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Extensions never served from the site root
const HIDDEN_EXTENSIONS: &[&str] = &["yml", "yaml", "env"];

/// Whether a file under the site root may be served
pub fn is_public_file(path: &Path) -> bool {
    let hidden_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'));
    let hidden_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| HIDDEN_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
    !(hidden_name || hidden_ext)
}

/// Static file service for `/`, serving `root` with directory listings
///
/// Must be registered after every other service, as it matches any path.
pub fn site_files(root: &Path) -> Files {
    Files::new("/", root)
        .index_file("index.html")
        .show_files_listing()
        .path_filter(|path, _| is_public_file(path))
}

/// One folder exposed over HTTP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderMount {
    /// Folder identifier
    pub id: i64,
    /// URL prefix, `/cdr{id}`
    pub prefix: String,
    /// Directory served under the prefix
    pub path: PathBuf,
}

/// Immutable folder id → directory mapping
#[derive(Debug, Clone, Default)]
pub struct FolderMap {
    mounts: BTreeMap<i64, FolderMount>,
}

impl FolderMap {
    /// Build the mapping; the first folder listed for an id wins
    pub fn new(folders: impl IntoIterator<Item = Folder>) -> Self {
        let mut mounts = BTreeMap::new();
        for folder in folders {
            if mounts.contains_key(&folder.id) {
                warn!(
                    folder = folder.id,
                    path = %folder.path,
                    "Duplicate folder id, keeping the first path"
                );
                continue;
            }
            mounts.insert(
                folder.id,
                FolderMount {
                    id: folder.id,
                    prefix: folder.url_prefix(),
                    path: folder.fs_path(),
                },
            );
        }
        Self { mounts }
    }

    /// Read every folder from the repository
    ///
    /// # Errors
    ///
    /// Propagates the repository error; callers treat it as fatal.
    pub async fn load(repo: &dyn FolderRepository) -> AppResult<Self> {
        let map = Self::new(repo.list().await?);
        for mount in map.mounts() {
            info!(
                "Voice Recordings folder [{}] - {}",
                mount.id,
                mount.path.display()
            );
        }
        Ok(map)
    }

    /// Mounts in folder id order
    pub fn mounts(&self) -> impl Iterator<Item = &FolderMount> {
        self.mounts.values()
    }

    /// Number of mounted folders
    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    /// Whether no folder is mounted
    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }

    /// Register one read-only static file service per folder
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        for mount in self.mounts() {
            cfg.service(Files::new(&mount.prefix, &mount.path));
        }
    }
}
