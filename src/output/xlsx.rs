//! Spreadsheet output writer.
//!
//! Writes report rows into a single-sheet xlsx workbook: a bold header row
//! followed by one row per entry, in order, starting at the second row.

use crate::projector::OutputRow;
use crate::utils::config::{HEADERS, MAX_CELL_CHARS, SHEET_NAME};
use crate::utils::error::OutputError;
use log::{debug, info};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::borrow::Cow;
use std::path::Path;

/// Write report rows to an xlsx file
///
/// **Public** - main entry point for spreadsheet output
///
/// # Arguments
/// * `rows` - Rows to write, in display order
/// * `output_path` - Path to the xlsx file
///
/// # Returns
/// Size of the written file in bytes
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::Xlsx` - Workbook could not be built or saved
pub fn write_workbook(rows: &[OutputRow], output_path: impl AsRef<Path>) -> Result<u64, OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} rows to: {}", rows.len(), output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
            })?;
        }
    }

    let mut workbook = build_workbook(rows)?;
    workbook.save(output_path)?;

    let size = std::fs::metadata(output_path)?.len();
    debug!("Workbook saved ({} bytes)", size);

    Ok(size)
}

/// Build the in-memory workbook for a set of rows
///
/// **Public** - useful for tests and callers that persist elsewhere
pub fn build_workbook(rows: &[OutputRow]) -> Result<Workbook, OutputError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    write_header(worksheet)?;
    for (offset, row) in rows.iter().enumerate() {
        // Header occupies row 0
        let index = u32::try_from(offset + 1).map_err(|_| OutputError::TooManyRows(rows.len()))?;
        write_row(worksheet, index, row)?;
    }

    Ok(workbook)
}

fn write_header(worksheet: &mut Worksheet) -> Result<(), OutputError> {
    let bold = Format::new().set_bold();
    for (col, title) in (0u16..).zip(HEADERS) {
        worksheet.write_string_with_format(0, col, title, &bold)?;
    }
    Ok(())
}

fn write_row(worksheet: &mut Worksheet, index: u32, row: &OutputRow) -> Result<(), OutputError> {
    worksheet.write_string(index, 0, cell_text(&row.started_at))?;
    worksheet.write_string(index, 1, cell_text(&row.method))?;
    worksheet.write_string(index, 2, cell_text(&row.url))?;
    worksheet.write_string(index, 3, cell_text(&row.total_time))?;
    worksheet.write_string(index, 4, cell_text(&row.post_data_text))?;
    worksheet.write_number(index, 5, row.status as f64)?;
    worksheet.write_string(index, 6, cell_text(&row.status_text))?;
    worksheet.write_string(index, 7, cell_text(&row.content_text))?;
    Ok(())
}

/// Clamp text to what a single Excel cell accepts
fn cell_text(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => {
            debug!(
                "Truncating cell text from {} to {} characters",
                text.chars().count(),
                MAX_CELL_CHARS
            );
            Cow::Owned(text[..cut].to_string())
        }
        None => Cow::Borrowed(text),
    }
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
