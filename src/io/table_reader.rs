//! Synchronous CSV table reader
//!
//! Reads one delimited file of the data directory into typed rows.
//!
//! # Design
//!
//! `TableReader` wraps `csv::Reader` and deserializes each row using the header
//! row as column names. It yields rows one at a time in file order and tracks
//! the line number so conversion errors can point at the offending row.
//!
//! The `load_*` functions collect a whole table and implement the dataset
//! rules:
//! - A missing file is logged as a warning and loads as an empty table
//! - Any other I/O error, malformed row or failed conversion aborts the load
//!
//! ```no_run
//! use atelier_dashboard::io::table_reader::load_table;
//! use std::path::Path;
//!
//! let rows = load_table(Path::new("public/data"), "customers.csv").unwrap();
//! println!("{} customers", rows.len());
//! ```

use crate::types::{DashboardError, Record};
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Synchronous CSV reader over rows of type `T`
pub struct TableReader<T> {
    file_name: String,
    rows: csv::DeserializeRecordsIntoIter<File, T>,
    line_num: u64,
}

impl<T: DeserializeOwned> TableReader<T> {
    /// Open a CSV file for reading
    ///
    /// The reader is configured to:
    /// - Treat the first row as headers
    /// - Allow flexible field counts (short rows surface as missing fields)
    /// - Leave values untrimmed; status strings are matched exactly
    ///
    /// # Errors
    ///
    /// Returns the raw `std::io::Error` so callers can tell a missing file
    /// apart from other failures.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let rows = ReaderBuilder::new()
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file)
            .into_deserialize();

        Ok(Self {
            file_name,
            rows,
            line_num: 1,
        })
    }

    /// Line number of the most recently yielded row (the header is line 1)
    pub fn line(&self) -> u64 {
        self.line_num
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl<T: DeserializeOwned> Iterator for TableReader<T> {
    type Item = Result<T, DashboardError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.rows.next()?;
        self.line_num += 1;
        Some(result.map_err(|e| DashboardError::csv(&self.file_name, e)))
    }
}

/// Load `dir/file_name` into typed rows, converting each with `convert`
///
/// Rows keep file order. Conversion errors are tagged with the file name and
/// line number.
pub fn load_converted<T, U, F>(
    dir: &Path,
    file_name: &str,
    mut convert: F,
) -> Result<Vec<U>, DashboardError>
where
    T: DeserializeOwned,
    F: FnMut(T) -> Result<U, DashboardError>,
{
    let path = dir.join(file_name);
    let mut reader = match TableReader::<T>::open(&path) {
        Ok(reader) => reader,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("{} not found", file_name);
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut rows = Vec::new();
    while let Some(row) = reader.next() {
        let converted = convert(row?).map_err(|e| e.at(file_name, reader.line()))?;
        rows.push(converted);
    }

    debug!(file = file_name, rows = rows.len(), "table loaded");
    Ok(rows)
}

/// Load `dir/file_name` straight into serde rows
pub fn load_rows<T: DeserializeOwned>(
    dir: &Path,
    file_name: &str,
) -> Result<Vec<T>, DashboardError> {
    load_converted(dir, file_name, Ok)
}

/// Load `dir/file_name` as raw records (column name to string value)
pub fn load_table(dir: &Path, file_name: &str) -> Result<Vec<Record>, DashboardError> {
    load_rows(dir, file_name)
}
