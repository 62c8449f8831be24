//! Projection of a loaded HAR document into report rows.
//!
//! This module computes:
//! - Total time per entry from its timing phases
//! - Start times at the fixed display offset
//! - One ordered row per entry with a valid start time

pub mod row;
pub mod timestamp;
pub mod timing;

// Re-export main types and functions
pub use row::{project, project_entry, LogSink, OutputRow, SkippedEntry, WarningSink};
pub use timestamp::to_display_time;
pub use timing::{format_total_time, total_time};
