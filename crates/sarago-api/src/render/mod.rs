//! HTML composition
//!
//! Pages are the head template followed by generated markup. Errors met
//! while a page is being composed are written into the page at that point.

pub mod config;
pub mod lookup;

use sarago_core::{AppError, AppResult};
use std::path::Path;
use tracing::info;

/// Page head, opens every page
pub const HEAD_TEMPLATE: &str = "htmlhead.html";

/// Search form shown on the lookup page
pub const LOOKUP_TEMPLATE: &str = "htmllookup.html";

/// HTML templates, read once at startup and served verbatim
#[derive(Debug, Clone, Default)]
pub struct Templates {
    /// Contents of `htmlhead.html`
    pub head: String,
    /// Contents of `htmllookup.html`
    pub lookup: String,
}

impl Templates {
    /// Read the templates from `dir`
    ///
    /// # Errors
    ///
    /// Returns `Template` when the head or lookup template cannot be read.
    pub fn load(dir: &Path) -> AppResult<Self> {
        let read = |name: &str| {
            std::fs::read_to_string(dir.join(name)).map_err(|e| {
                AppError::Template(format!("{}: {}", dir.join(name).display(), e))
            })
        };

        let head = read(HEAD_TEMPLATE)?;
        let lookup = read(LOOKUP_TEMPLATE)?;

        info!(dir = %dir.display(), "HTML templates loaded");

        Ok(Self { head, lookup })
    }

    /// Templates from literal text
    pub fn from_parts(head: impl Into<String>, lookup: impl Into<String>) -> Self {
        Self {
            head: head.into(),
            lookup: lookup.into(),
        }
    }
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A page under composition
pub struct PageBuilder<'a> {
    templates: &'a Templates,
    body: String,
}

impl<'a> PageBuilder<'a> {
    /// Start a page with the head template
    pub fn new(templates: &'a Templates) -> Self {
        Self {
            templates,
            body: templates.head.clone(),
        }
    }

    /// Append raw markup
    pub fn push_html(&mut self, html: &str) {
        self.body.push_str(html);
    }

    /// Append an `<h2>` heading with escaped text
    pub fn heading(&mut self, text: &str) {
        self.body.push_str(&format!("<h2>{}</h2>", escape_html(text)));
    }

    /// Append the search form template
    pub fn lookup_form(&mut self) {
        self.body.push_str(&self.templates.lookup);
    }

    /// Append an inline error message
    pub fn error(&mut self, err: &AppError) {
        self.body.push_str(&format!(
            "<p class=\"error\">{}</p>",
            escape_html(&err.to_string())
        ));
    }

    /// The composed page
    pub fn finish(self) -> String {
        self.body
    }
}
