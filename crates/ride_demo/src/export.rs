//! Run summary export.
//!
//! This module provides functions to export a [`RunSummary`] to JSON and CSV
//! for offline analysis of a demonstration run.

use std::fs::File;
use std::path::Path;

use crate::metrics::RunSummary;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;

fn create_output_file(path: impl AsRef<Path>) -> Result<File, Box<dyn std::error::Error>> {
    Ok(File::create(path)?)
}

/// Export a run summary to JSON format.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_to_json(
    summary: &RunSummary,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = create_output_file(path)?;
    json::export_to_json_impl(summary, file)
}

/// Export a run summary to CSV format: one row per party (drivers first),
/// with ride counts and monetary totals.
///
/// # Errors
///
/// Returns an error if file creation or CSV writing fails.
pub fn export_to_csv(
    summary: &RunSummary,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = create_output_file(path)?;
    csv::export_to_csv_impl(summary, file)
}
