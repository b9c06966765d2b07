//! Domain models for sarago
//!
//! Read-only views of the externally managed `cdrs`, `folders` and `params`
//! tables, plus the per-request search criteria.

pub mod cdr;
pub mod folder;
pub mod params;
pub mod search;

pub use cdr::Cdr;
pub use folder::Folder;
pub use params::Params;
pub use search::{DateRange, SearchCriteria};
