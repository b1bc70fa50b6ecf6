// CLI module
// Command-line interface, argument parsing and logging setup

mod args;

pub use args::CliArgs;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g. unknown flag, or --help), clap prints an error
/// message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Initialise the global `tracing` subscriber
///
/// `RUST_LOG` wins when set; otherwise `log_level` is used, falling back to
/// `warn` if it is not a valid filter directive. Logs go to stderr so they
/// never interleave with the report on stdout.
pub fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}
