//! Start-time normalization to the display timezone.

use crate::utils::config::DISPLAY_OFFSET;
use crate::utils::error::{TimestampError, TimestampReason};
use chrono::{DateTime, FixedOffset, SecondsFormat, Timelike};

/// Parse an RFC3339 timestamp and re-render it at the display offset
///
/// **Public** - used by the row projector
///
/// Sub-second precision is dropped from the rendered value.
///
/// # Errors
/// * `TimestampError` - `raw` is not RFC3339
pub fn to_display_time(raw: &str) -> Result<String, TimestampError> {
    let parsed = parse_started_at(raw).map_err(|reason| TimestampError {
        raw: raw.to_string(),
        reason,
    })?;
    Ok(parsed
        .with_timezone(&DISPLAY_OFFSET)
        .to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Strict RFC3339: chrono alone also takes a space separator and `:60`
fn parse_started_at(raw: &str) -> Result<DateTime<FixedOffset>, TimestampReason> {
    let parsed = DateTime::parse_from_rfc3339(raw)?;

    if !matches!(raw.as_bytes().get(10), Some(b'T' | b't')) {
        return Err(TimestampReason::MissingSeparator);
    }
    // chrono folds a leap second into the nanosecond field
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(TimestampReason::LeapSecond);
    }

    Ok(parsed)
}
