//! Core business logic module
//!
//! This module contains the dashboard computation components:
//! - `dataset` - The immutable store of loaded datasets
//! - `metrics` - Pure metric computations over a dataset

pub mod dataset;
pub mod metrics;

pub use dataset::Dataset;
pub use metrics::MetricsEngine;
