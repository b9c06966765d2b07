//! CDR (Call Detail Record) model
//!
//! Rows are written by the telephony system; this service only reads them.

use crate::format::{show_datetime, show_duration};
use serde::Serialize;

/// CDR (Call Detail Record)
///
/// Column values are kept as the text the database returns; formatting for
/// display happens on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cdr {
    /// Record identifier, also the recording file stem
    pub id: String,

    /// Call direction as recorded (inbound/outbound marker)
    pub direction: String,

    /// Call duration as `H:M:S` text
    pub duration: String,

    /// Connection timestamp text
    pub connected: String,

    /// Caller number (empty when unknown)
    pub caller_number: String,

    /// Callee number (empty when unknown)
    pub called_number: String,

    /// Folder holding the voice recording
    pub folder_id: i64,
}

impl Cdr {
    /// URL prefix under which recordings of `folder_id` are served
    #[inline]
    pub fn folder_prefix(folder_id: i64) -> String {
        format!("/cdr{}", folder_id)
    }

    /// URL of this call's voice recording
    ///
    /// Recording files are named after the CDR id wrapped in braces.
    pub fn recording_url(&self) -> String {
        format!("{}/{{{}}}.osf", Self::folder_prefix(self.folder_id), self.id)
    }

    /// Duration for display, e.g. `1h 5m 30s `
    pub fn display_duration(&self) -> String {
        show_duration(&self.duration)
    }

    /// Connection time for display, e.g. `1 Jun 2023 2:30pm Thu`
    pub fn display_connected(&self) -> String {
        show_datetime(&self.connected)
    }
}
