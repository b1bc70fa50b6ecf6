//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: Raw CSV rows and the insertion-ordered map behind them
//! - `customer`: Customers with their raw row kept for export
//! - `order`: Orders, order status and the service catalogue
//! - `operations`: Memberships, inventory, authentication checks and revenue rows
//! - `metrics`: Derived views and the export snapshot
//! - `error`: Error types for the dashboard

pub mod customer;
pub mod error;
pub mod metrics;
pub mod operations;
pub mod order;
pub mod record;

pub use customer::Customer;
pub use error::DashboardError;
pub use metrics::{
    CustomerSegments, DashboardSnapshot, DashboardStats, InventoryAlert, LtvAnalysis,
    MonthlyRevenue, SegmentLtv, ServiceUsage, LOW_STOCK_STATUS,
};
pub use operations::{
    AuthResult, AuthenticationRecord, InventoryItem, Membership, MembershipStatus, RevenueRow,
};
pub use order::{Order, OrderStatus, Service};
pub use record::{OrderedMap, Record};
