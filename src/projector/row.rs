//! Projection of HAR entries into report rows.
//!
//! Each entry becomes one [`OutputRow`] in capture order. Entries whose
//! start time cannot be parsed are reported to a [`WarningSink`] and
//! dropped; they never abort the projection.

use super::timestamp::to_display_time;
use super::timing::{format_total_time, total_time};
use crate::parser::schema::{HarDocument, HarEntry};
use crate::utils::error::TimestampError;
use log::{debug, warn};

/// One spreadsheet row, in header column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    /// Start time at the display offset, RFC3339
    pub started_at: String,
    pub method: String,
    pub url: String,
    /// Total time in milliseconds, two decimal places
    pub total_time: String,
    pub post_data_text: String,
    pub status: i64,
    pub status_text: String,
    pub content_text: String,
}

/// An entry dropped from the report
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    /// Position of the entry in the document
    pub index: usize,
    pub error: TimestampError,
}

/// Receiver for recoverable per-entry problems
pub trait WarningSink {
    fn entry_skipped(&mut self, skipped: SkippedEntry);
}

/// Sink that forwards to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn entry_skipped(&mut self, skipped: SkippedEntry) {
        warn!("Skipping entry {}: {}", skipped.index, skipped.error);
    }
}

impl WarningSink for Vec<SkippedEntry> {
    fn entry_skipped(&mut self, skipped: SkippedEntry) {
        self.push(skipped);
    }
}

impl<S: WarningSink + ?Sized> WarningSink for &mut S {
    fn entry_skipped(&mut self, skipped: SkippedEntry) {
        (**self).entry_skipped(skipped);
    }
}

/// Project every entry of a document into report rows
///
/// **Public** - main entry point for row projection
///
/// Rows keep entry order. Entries with an unparsable `startedDateTime`
/// are reported to `sink` and produce no row.
pub fn project<S: WarningSink>(document: &HarDocument, mut sink: S) -> Vec<OutputRow> {
    let entries = document.entries();
    let mut rows = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        match project_entry(entry) {
            Ok(row) => rows.push(row),
            Err(error) => sink.entry_skipped(SkippedEntry { index, error }),
        }
    }

    debug!("Projected {} of {} entries", rows.len(), entries.len());
    rows
}

/// Build the row for a single entry
///
/// **Public** - useful for tests and single-entry callers
///
/// # Errors
/// * `TimestampError` - the entry's start time is not RFC3339
pub fn project_entry(entry: &HarEntry) -> Result<OutputRow, TimestampError> {
    let total_ms = total_time(&entry.timings);
    let started_at = to_display_time(&entry.started_date_time)?;

    let row = OutputRow {
        started_at,
        method: entry.request.method.clone(),
        url: entry.request.url.clone(),
        total_time: format_total_time(total_ms),
        post_data_text: entry.request.post_data.text.clone(),
        status: entry.response.status,
        status_text: entry.response.status_text.clone(),
        content_text: entry.response.content.text.clone(),
    };

    debug!("Started at: {}", row.started_at);
    debug!("Request: {} {}", row.method, row.url);
    debug!("Request.PostData.Text: {}", row.post_data_text);
    debug!("Response: {} {}", row.status, row.status_text);
    debug!("Response.Content.Text: {}", row.content_text);
    debug!("Total Time: {} ms", row.total_time);

    Ok(row)
}
