//! Dashboard pipeline
//!
//! Runs one dashboard invocation end to end:
//!
//! ```text
//! data dir → Dataset::load → MetricsEngine → render_report (output writer)
//!                                         └→ export_json   (output file)
//! ```
//!
//! Every step runs once, in order, on the calling thread. The first error
//! aborts the run, so either both the report and the export are produced or
//! the run fails.

use crate::core::dataset::DEFAULT_DATA_DIR;
use crate::core::{Dataset, MetricsEngine};
use crate::io::json_export::{export_json, DEFAULT_EXPORT_FILE};
use crate::io::report::{render_report, DEFAULT_TOP_SERVICES};
use crate::types::DashboardError;
use chrono::{Local, NaiveDateTime};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Configuration for a dashboard run
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// Directory holding the seven CSV files
    pub data_dir: PathBuf,
    /// Path the JSON document is written to
    pub output_path: PathBuf,
    /// Number of services listed in the report
    pub top_services: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            output_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            top_services: DEFAULT_TOP_SERVICES,
        }
    }
}

impl DashboardConfig {
    /// Create a DashboardConfig with custom values
    ///
    /// A `top_services` of zero falls back to the default.
    pub fn new(data_dir: PathBuf, output_path: PathBuf, top_services: usize) -> Self {
        let top_services = if top_services == 0 {
            warn!(
                "Invalid top_services ({}), using default ({})",
                top_services, DEFAULT_TOP_SERVICES
            );
            DEFAULT_TOP_SERVICES
        } else {
            top_services
        };

        Self {
            data_dir,
            output_path,
            top_services,
        }
    }
}

/// Load → report → export, once
#[derive(Debug, Clone)]
pub struct DashboardPipeline {
    config: DashboardConfig,
}

impl DashboardPipeline {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Run the pipeline, stamping the export with the current local time
    ///
    /// The report and the export confirmation are written to `output`.
    ///
    /// # Returns
    ///
    /// The path of the exported JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if a present input file is unreadable or malformed,
    /// if writing the report fails, or if the export cannot be written.
    pub fn run(&self, output: &mut dyn Write) -> Result<PathBuf, DashboardError> {
        self.run_at(output, Local::now().naive_local())
    }

    /// Run the pipeline with an explicit export timestamp
    pub fn run_at(
        &self,
        output: &mut dyn Write,
        timestamp: NaiveDateTime,
    ) -> Result<PathBuf, DashboardError> {
        let dataset = Dataset::load(&self.config.data_dir)?;
        let engine = MetricsEngine::new(&dataset);

        render_report(&engine, self.config.top_services, output)?;

        let snapshot = engine.snapshot(timestamp);
        export_json(&snapshot, &self.config.output_path)?;

        writeln!(
            output,
            "✅ Data exported to {}",
            self.config.output_path.display()
        )?;
        info!(
            output_path = %self.config.output_path.display(),
            "dashboard run complete"
        );

        Ok(self.config.output_path.clone())
    }
}
