//! Convert command implementation.
//!
//! The convert command:
//! 1. Loads the HAR document
//! 2. Projects entries into report rows
//! 3. Writes the xlsx workbook

use crate::output::write_workbook;
use crate::parser::load_file;
use crate::projector::{project, LogSink, SkippedEntry, WarningSink};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    /// HAR file to read
    pub input: PathBuf,

    /// xlsx file to write
    pub output: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertReport {
    /// Entries found in the HAR document
    pub entries: usize,
    /// Rows written to the sheet
    pub rows: usize,
    /// Entries dropped because of an unparsable start time
    pub skipped: usize,
    /// Size of the written workbook
    pub bytes: u64,
    pub elapsed: Duration,
}

/// Logs every skipped entry and keeps a tally
#[derive(Debug, Default)]
struct CountingSink {
    skipped: usize,
}

impl WarningSink for CountingSink {
    fn entry_skipped(&mut self, skipped: SkippedEntry) {
        self.skipped += 1;
        LogSink.entry_skipped(skipped);
    }
}

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * HAR file cannot be read or is not valid JSON
/// * Workbook cannot be written
///
/// No output file is written when loading fails.
pub fn execute_convert(args: &ConvertArgs) -> Result<ConvertReport> {
    let start_time = Instant::now();

    info!("Converting {} -> {}", args.input.display(), args.output.display());

    // Step 1: Load HAR
    debug!("Step 1/3: Loading HAR document...");
    let document = load_file(&args.input)
        .with_context(|| format!("Failed to load HAR file {}", args.input.display()))?;

    // Step 2: Project rows
    debug!("Step 2/3: Projecting {} entries...", document.entries().len());
    let mut sink = CountingSink::default();
    let rows = project(&document, &mut sink);

    // Step 3: Write workbook
    debug!("Step 3/3: Writing workbook...");
    let bytes = write_workbook(&rows, &args.output)
        .with_context(|| format!("Failed to write workbook {}", args.output.display()))?;

    let report = ConvertReport {
        entries: document.entries().len(),
        rows: rows.len(),
        skipped: sink.skipped,
        bytes,
        elapsed: start_time.elapsed(),
    };

    info!("HAR data has been written to {}", args.output.display());
    if report.skipped > 0 {
        info!("{} of {} entries skipped", report.skipped, report.entries);
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("CONVERSION SUMMARY");
        println!("{}", "=".repeat(60));
        println!("Input:        {}", args.input.display());
        println!("Output:       {}", args.output.display());
        println!("Entries:      {}", report.entries);
        println!("Rows written: {}", report.rows);
        println!("Skipped:      {}", report.skipped);
        println!("Elapsed:      {:.2}s", report.elapsed.as_secs_f64());
        println!("{}", "=".repeat(60));
    }

    Ok(report)
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.input == args.output {
        anyhow::bail!("Input and output must be different files");
    }

    if !args.input.is_file() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_valid() {
        let input = NamedTempFile::new().unwrap();
        let args = ConvertArgs {
            input: input.path().to_path_buf(),
            output: PathBuf::from("out.xlsx"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = ConvertArgs {
            output: PathBuf::from("out.xlsx"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output() {
        let input = NamedTempFile::new().unwrap();
        let args = ConvertArgs {
            input: input.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_same_path() {
        let input = NamedTempFile::new().unwrap();
        let args = ConvertArgs {
            input: input.path().to_path_buf(),
            output: input.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let args = ConvertArgs {
            input: dir.path().join("absent.har"),
            output: dir.path().join("out.xlsx"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_counting_sink_counts() {
        let mut sink = CountingSink::default();
        let error = crate::projector::to_display_time("nope").unwrap_err();
        sink.entry_skipped(SkippedEntry { index: 3, error });
        assert_eq!(sink.skipped, 1);
    }
}
