//! Atelier Dashboard Library
//! # Overview
//!
//! This library aggregates the business records of a luxury restoration
//! atelier into dashboard metrics, renders them as a text report and exports
//! them as a JSON document.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (records, metrics, errors)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Business logic components:
//!   - [`core::dataset`] - The immutable store of loaded datasets
//!   - [`core::metrics`] - Pure metric computations
//! - [`io`] - CSV loading, text report and JSON export
//! - [`pipeline`] - Load → report → export orchestration
//!
//! # Datasets
//!
//! Seven CSV files are read from the data directory (default `public/data`):
//!
//! - **customers.csv**: segment and lifetime value per customer
//! - **services.csv**: the service catalogue
//! - **orders.csv**: status, satisfaction score and booked services
//! - **memberships.csv**: membership status
//! - **inventory.csv**: material stock and reorder levels
//! - **authentication_records.csv**: authentication check outcomes
//! - **revenue.csv**: monthly revenue breakdown in AED
//!
//! A missing file is treated as an empty dataset.
//!
//! # Metrics
//!
//! - Dashboard statistics (counts, total revenue, satisfaction, authentication rate)
//! - Customers by segment
//! - Revenue by month
//! - Service utilization
//! - Low-stock inventory alerts
//! - Lifetime value by segment

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use core::{Dataset, MetricsEngine};
pub use io::{export_json, render_report};
pub use pipeline::{DashboardConfig, DashboardPipeline};
pub use types::{
    Customer, DashboardError, DashboardSnapshot, DashboardStats, InventoryAlert, MonthlyRevenue,
    SegmentLtv,
};
