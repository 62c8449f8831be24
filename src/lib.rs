//! har2xlsx
//!
//! Converts HTTP Archive (.har) captures into xlsx spreadsheets for review.
//!
//! The pipeline has two stages:
//!
//! - [`parser`] decodes a HAR document into a typed model
//! - [`projector`] turns each entry into a report row: total time from the
//!   timing phases, start time at +09:00, and the request/response fields
//!
//! Rows are then written by [`output`]. [`commands`] ties the stages together
//! for the `har2xlsx` CLI.
//!
//! ```bash
//! har2xlsx -i capture.har -o capture.xlsx
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod projector;
pub mod utils;
