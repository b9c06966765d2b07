//! Request payloads for the HTML forms

pub mod config;
pub mod lookup;

pub use config::*;
pub use lookup::*;
