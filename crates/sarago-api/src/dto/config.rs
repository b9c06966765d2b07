//! Configuration form fields

use tracing::warn;

/// Changes submitted on the configuration page
///
/// The form carries one `folderid`/`datapath` pair per folder; pairs are
/// matched up in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    /// New database display name
    pub dbname: Option<String>,
    /// `(folder id, new path)` for every pair with a non-empty path
    pub folders: Vec<(i64, String)>,
}

impl ConfigUpdate {
    /// Collect updates from decoded form pairs
    ///
    /// Empty values mean "leave unchanged". A path whose folder id is not an
    /// integer is dropped.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut dbname = None;
        let mut ids = Vec::new();
        let mut paths = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "dbname" if dbname.is_none() && !value.trim().is_empty() => {
                    dbname = Some(value.trim().to_string());
                }
                "folderid" => ids.push(value.trim()),
                "datapath" => paths.push(value.trim()),
                _ => {}
            }
        }

        let folders = ids
            .into_iter()
            .zip(paths)
            .filter(|(_, path)| !path.is_empty())
            .filter_map(|(id, path)| match id.parse::<i64>() {
                Ok(id) => Some((id, path.to_string())),
                Err(_) => {
                    warn!(folderid = id, "Ignoring folder path with invalid folder id");
                    None
                }
            })
            .collect();

        Self { dbname, folders }
    }

    /// Whether the submission asks for any change
    pub fn is_empty(&self) -> bool {
        self.dbname.is_none() && self.folders.is_empty()
    }
}
