//! HAR parsing and schema definitions.
//!
//! This module handles:
//! - Defining the typed HAR model
//! - Decoding a HAR document from a file or stream

pub mod har;
pub mod schema;

// Re-export main types
pub use har::{load, load_file};
pub use schema::{Content, Creator, HarDocument, HarEntry, HarLog, NameValue, PostData, Request, Response, Timings};
