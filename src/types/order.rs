//! Order and service catalogue types
//!
//! Orders reference services through a comma-joined `service_ids` column.
//! The list is split and trimmed at load time so the metrics can work with
//! individual ids.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Lifecycle state of an order
///
/// Only the two states the dashboard counts are modelled; every other value
/// from the CSV is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum OrderStatus {
    /// "In Progress"
    InProgress,
    /// "Completed"
    Completed,
    /// Any other status string, matched case-sensitively
    Other(String),
}

impl From<String> for OrderStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "In Progress" => OrderStatus::InProgress,
            "Completed" => OrderStatus::Completed,
            _ => OrderStatus::Other(status),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(status: &str) -> Self {
        OrderStatus::from(status.to_string())
    }
}

/// Restoration order loaded from `orders.csv`
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub status: OrderStatus,

    /// Customer satisfaction score
    ///
    /// None when the CSV cell is empty (typically orders not yet delivered).
    pub satisfaction_score: Option<Decimal>,

    /// Service ids booked on this order, whitespace-trimmed, in CSV order
    ///
    /// An empty cell yields a single empty id, which matches no service.
    pub service_ids: Vec<String>,
}

/// Catalogue service loaded from `services.csv`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Service {
    pub service_id: String,
    pub service_name: String,
}
