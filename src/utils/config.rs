//! Configuration and constants for the converter.

use chrono::FixedOffset;

/// Name of the worksheet holding the exported entries
pub const SHEET_NAME: &str = "HAR Data";

/// Header row, in output column order
pub const HEADERS: [&str; 8] = [
    "Started at",
    "Request.Method",
    "Request.URL",
    "Total Time (ms)",
    "Request.PostData.Text",
    "Response.Status",
    "Response.StatusText",
    "Response.Content.Text",
];

/// Display timezone offset from UTC, in seconds (+09:00)
pub const DISPLAY_UTC_OFFSET_SECS: i32 = 9 * 60 * 60;

/// Decimal places used when rendering total time
pub const TOTAL_TIME_PRECISION: usize = 2;

/// Excel rejects cell text longer than this (counted in characters)
pub const MAX_CELL_CHARS: usize = 32_767;

/// Fixed display offset used for every exported timestamp.
///
/// No DST rules apply and no timezone database is consulted.
pub const DISPLAY_OFFSET: FixedOffset = match FixedOffset::east_opt(DISPLAY_UTC_OFFSET_SECS) {
    Some(offset) => offset,
    None => panic!("display offset must be within +/-24h"),
};
