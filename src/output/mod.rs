//! Output writers for report data.
//!
//! This module handles writing report rows to disk as an xlsx workbook.

pub mod xlsx;

// Re-export main functions
pub use xlsx::{build_workbook, write_workbook};
