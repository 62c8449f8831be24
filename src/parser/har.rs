//! HAR document loader.
//!
//! Reads a whole HAR document from a stream into the typed model.
//! Any read or syntax failure is fatal: no partial document is returned.

use super::schema::HarDocument;
use crate::utils::error::LoadError;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Decode a HAR document from a reader
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `LoadError::Io` - The stream could not be read
/// * `LoadError::Decode` - The document is not valid JSON or has the wrong shape
pub fn load<R: Read>(reader: R) -> Result<HarDocument, LoadError> {
    // A bare `null` document carries no entries
    let document = serde_json::from_reader::<_, Option<HarDocument>>(BufReader::new(reader))?
        .unwrap_or_default();

    debug!(
        "Loaded HAR {} ({} {}) with {} entries",
        if document.log.version.is_empty() { "?" } else { document.log.version.as_str() },
        document.log.creator.name,
        document.log.creator.version,
        document.entries().len()
    );

    Ok(document)
}

/// Open and decode a HAR file
///
/// **Public** - convenience wrapper over [`load`]
pub fn load_file(input_path: impl AsRef<Path>) -> Result<HarDocument, LoadError> {
    let input_path = input_path.as_ref();

    debug!("Reading HAR from: {}", input_path.display());

    let file = File::open(input_path)?;
    load(file)
}
