//! Total elapsed time from a HAR timing breakdown.

use crate::parser::schema::Timings;

/// Sum the sequential timing phases of an entry, in milliseconds
///
/// **Public** - used by the row projector
///
/// Phases are `blocked`, `dns`, `connect`, `send`, `wait` and `receive`.
/// A phase contributes only when it is present and strictly positive; HAR
/// uses `-1` for "not applicable", and zero is treated the same way.
/// `ssl` is never added: HAR already counts it inside `connect`.
pub fn total_time(timings: &Timings) -> f64 {
    [
        timings.blocked,
        timings.dns,
        timings.connect,
        timings.send,
        timings.wait,
        timings.receive,
    ]
    .into_iter()
    .flatten()
    .filter(|ms| *ms > 0.0)
    .sum()
}

/// Render a total time with the fixed report precision
pub fn format_total_time(total_ms: f64) -> String {
    format!(
        "{:.*}",
        crate::utils::config::TOTAL_TIME_PRECISION,
        total_ms
    )
}
