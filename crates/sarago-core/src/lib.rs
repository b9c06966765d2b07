//! sarago Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the sarago CDR browser. It includes:
//!
//! - Domain models (CDR, Folder, Params, search criteria)
//! - Repository traits and the offset pager
//! - Display formatting for durations, dates and counts
//! - The CDR filter (query builder conditions)
//! - Unified error handling with HTTP response mapping
//! - Application configuration

pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;
pub use filter::{CdrFilter, FilterCondition, FilterValue};

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
