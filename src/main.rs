//! Atelier Dashboard CLI
//!
//! Loads the atelier CSV datasets, prints the dashboard report and exports
//! the metrics as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --data-dir public/data --output dashboard_data.json
//! cargo run -- --top-services 10 --log-level info
//! ```
//!
//! With no arguments the program reads `public/data/`, prints the report to
//! stdout and writes `dashboard_data.json` in the working directory.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unreadable or malformed input, export not writable, etc.)

use atelier_dashboard::cli;
use atelier_dashboard::pipeline::DashboardPipeline;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::setup_logging(&args.log_level);

    let pipeline = DashboardPipeline::new(args.to_config());

    // Report and export confirmation go to stdout
    let mut output = std::io::stdout();
    if let Err(e) = pipeline.run(&mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
