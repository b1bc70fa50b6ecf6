//! Dataset store
//!
//! Holds the seven datasets of one dashboard run. A `Dataset` is built once,
//! either by [`Dataset::load`] from a data directory or directly from its
//! public fields in tests, and is only ever read afterwards.

use crate::io::csv_format::{convert_customer, convert_order};
use crate::io::table_reader::{load_converted, load_rows};
use crate::types::{
    AuthenticationRecord, Customer, DashboardError, InventoryItem, Membership, Order, RevenueRow,
    Service,
};
use std::path::Path;
use tracing::info;

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "public/data";

pub const CUSTOMERS_FILE: &str = "customers.csv";
pub const SERVICES_FILE: &str = "services.csv";
pub const ORDERS_FILE: &str = "orders.csv";
pub const MEMBERSHIPS_FILE: &str = "memberships.csv";
pub const INVENTORY_FILE: &str = "inventory.csv";
pub const AUTHENTICATION_FILE: &str = "authentication_records.csv";
pub const REVENUE_FILE: &str = "revenue.csv";

/// In-memory store of all loaded datasets
///
/// Every sequence keeps the row order of its source file. A dataset whose file
/// was absent is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub services: Vec<Service>,
    pub orders: Vec<Order>,
    pub memberships: Vec<Membership>,
    pub inventory: Vec<InventoryItem>,
    pub auth_records: Vec<AuthenticationRecord>,
    pub revenue: Vec<RevenueRow>,
}

impl Dataset {
    /// Load all seven datasets from `data_dir`
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be read or contains a row
    /// that does not convert to its typed record. Missing files are not errors.
    pub fn load(data_dir: &Path) -> Result<Self, DashboardError> {
        let dataset = Dataset {
            customers: load_converted(data_dir, CUSTOMERS_FILE, convert_customer)?,
            services: load_rows(data_dir, SERVICES_FILE)?,
            orders: load_converted(data_dir, ORDERS_FILE, convert_order)?,
            memberships: load_rows(data_dir, MEMBERSHIPS_FILE)?,
            inventory: load_rows(data_dir, INVENTORY_FILE)?,
            auth_records: load_rows(data_dir, AUTHENTICATION_FILE)?,
            revenue: load_rows(data_dir, REVENUE_FILE)?,
        };

        info!(
            data_dir = %data_dir.display(),
            customers = dataset.customers.len(),
            services = dataset.services.len(),
            orders = dataset.orders.len(),
            memberships = dataset.memberships.len(),
            inventory = dataset.inventory.len(),
            auth_records = dataset.auth_records.len(),
            revenue = dataset.revenue.len(),
            "datasets loaded"
        );

        Ok(dataset)
    }
}
