//! I/O module
//!
//! Handles CSV input and the two dashboard outputs.
//!
//! # Components
//!
//! - `table_reader` - CSV reader; missing files load as empty tables
//! - `csv_format` - Conversion of raw CSV rows into typed records
//! - `report` - Human-readable text report
//! - `json_export` - JSON document export

pub mod csv_format;
pub mod json_export;
pub mod report;
pub mod table_reader;

pub use csv_format::{convert_customer, convert_order, OrderCsvRecord};
pub use json_export::{export_json, write_json, DEFAULT_EXPORT_FILE};
pub use report::{render_report, DEFAULT_TOP_SERVICES};
pub use table_reader::{load_converted, load_rows, load_table, TableReader};
