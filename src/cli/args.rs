use crate::core::dataset::DEFAULT_DATA_DIR;
use crate::io::json_export::DEFAULT_EXPORT_FILE;
use crate::pipeline::DashboardConfig;
use clap::Parser;
use std::path::PathBuf;

/// Aggregate atelier business records into a dashboard report and JSON export
#[derive(Parser, Debug)]
#[command(name = "atelier-dashboard")]
#[command(
    about = "Aggregate atelier business records into a dashboard report and JSON export",
    long_about = None
)]
pub struct CliArgs {
    /// Directory containing the input CSV files
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = DEFAULT_DATA_DIR,
        help = "Directory containing the seven input CSV files"
    )]
    pub data_dir: PathBuf,

    /// Output path for the JSON export
    #[arg(
        long = "output",
        value_name = "FILE",
        default_value = DEFAULT_EXPORT_FILE,
        help = "Path of the exported JSON document (overwritten if present)"
    )]
    pub output: PathBuf,

    /// Number of services listed in the report
    #[arg(
        long = "top-services",
        value_name = "COUNT",
        help = "Number of services listed under TOP SERVICES (default: 5)"
    )]
    pub top_services: Option<usize>,

    /// Log verbosity
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level: error, warn, info, debug or trace (RUST_LOG takes precedence)"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Create a DashboardConfig from CLI arguments
    ///
    /// Unset options fall back to the defaults.
    pub fn to_config(&self) -> DashboardConfig {
        let default = DashboardConfig::default();
        DashboardConfig::new(
            self.data_dir.clone(),
            self.output.clone(),
            self.top_services.unwrap_or(default.top_services),
        )
    }
}
