//! HTTP layer for sarago
//!
//! HTML pages for CDR lookup and configuration, plus read-only static mounts
//! for the voice-recording folders.

#![forbid(unsafe_code)]
#![warn(clippy::all, missing_docs)]

pub mod context;
pub mod dto;
pub mod folders;
pub mod handlers;
pub mod render;

pub use context::SiteContext;
pub use folders::{site_files, FolderMap, FolderMount};
pub use handlers::{compose_config_page, compose_lookup_page, configure};
pub use render::Templates;
