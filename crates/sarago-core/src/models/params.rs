//! Database instance parameters

use serde::Serialize;

/// Single-row `params` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Params {
    /// Display name of the current database instance
    pub dbname: String,
}
