//! Read-only per-process context shared by the page handlers

use crate::render::Templates;
use std::path::PathBuf;
use tracing::warn;

/// Everything the pages need besides the database, fixed at startup
#[derive(Debug, Clone)]
pub struct SiteContext {
    /// HTML fragments served around the generated markup
    pub templates: Templates,
    /// Rows per lookup page
    pub page_size: i64,
    /// Host name shown on the configuration page
    pub host_name: String,
    /// Absolute working directory shown on the configuration page
    pub working_dir: PathBuf,
}

impl SiteContext {
    /// Build the context, resolving host name and working directory once
    pub fn new(templates: Templates, page_size: i64) -> Self {
        let host_name = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_else(|e| {
                warn!("Could not determine host name: {}", e);
                String::new()
            });
        let working_dir = std::env::current_dir()
            .and_then(|d| d.canonicalize())
            .unwrap_or_else(|e| {
                warn!("Could not determine working directory: {}", e);
                PathBuf::from(".")
            });

        Self {
            templates,
            page_size: page_size.max(1),
            host_name,
            working_dir,
        }
    }
}
