//! JSON export of the dashboard snapshot
//!
//! Writes the snapshot as a single pretty-printed (2-space indented) JSON
//! document. The target file is overwritten unconditionally.

use crate::types::{DashboardError, DashboardSnapshot};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Default export file name, relative to the working directory
pub const DEFAULT_EXPORT_FILE: &str = "dashboard_data.json";

/// Serialize a snapshot to any writer
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn write_json(
    snapshot: &DashboardSnapshot<'_>,
    output: &mut dyn Write,
) -> Result<(), DashboardError> {
    serde_json::to_writer_pretty(&mut *output, snapshot)?;
    output.flush()?;
    Ok(())
}

/// Write a snapshot to `path`, replacing any existing file
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn export_json(snapshot: &DashboardSnapshot<'_>, path: &Path) -> Result<(), DashboardError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_json(snapshot, &mut writer)?;

    info!(path = %path.display(), "dashboard data exported");
    Ok(())
}
