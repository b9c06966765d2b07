//! sarago Database Layer
//!
//! This crate provides MySQL access and repository implementations over the
//! pre-existing `cdrs`, `folders` and `params` tables. It includes:
//!
//! - Connection pool management with sqlx
//! - SQL text for filtered count and page queries, with bound parameters
//! - Repository implementations for CDRs, folders and params
//!
//! The schema is never created or migrated here.

pub mod pool;
pub mod query;
pub mod repositories;

pub use pool::{connect_options, create_pool};
pub use repositories::*;

// Re-export commonly used types
pub use sarago_core::{AppError, AppResult};
pub use sqlx::{MySql, MySqlPool};
