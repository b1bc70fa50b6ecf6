//! Derived views produced by the metrics engine
//!
//! Every type here serializes into the shape of the exported JSON document.
//! Decimal values are written as JSON numbers.

use super::customer::Customer;
use super::record::OrderedMap;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Status label attached to every low-stock alert
pub const LOW_STOCK_STATUS: &str = "LOW STOCK - REORDER NOW";

/// Customers grouped by segment, segments in first-seen order
pub type CustomerSegments<'a> = OrderedMap<Vec<&'a Customer>>;

/// LTV summary per segment, segments in first-seen order
pub type LtvAnalysis = OrderedMap<SegmentLtv>;

/// (service name, number of order lines using it), most used first
pub type ServiceUsage = Vec<(String, u64)>;

/// Headline dashboard figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_customers: usize,

    /// Orders with status "In Progress"
    pub active_orders: usize,

    pub completed_orders: usize,

    /// Memberships with status "Active"
    pub active_memberships: usize,

    /// Sum of `total_revenue_aed` over all revenue rows
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,

    /// Sum of all present satisfaction scores divided by the completed-order count
    ///
    /// Rounded to one decimal place.
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_satisfaction: Decimal,

    /// Percentage of authentication checks returning "Authentic", one decimal place
    ///
    /// The exact quotient is rounded half-to-even, so a true tie such as
    /// 51 of 80 (63.75) gives 63.8 rather than a binary-float rounding.
    #[serde(with = "rust_decimal::serde::float")]
    pub authentication_rate: Decimal,
}

impl DashboardStats {
    /// Field names and display values in report order
    pub fn labelled_values(&self) -> [(&'static str, String); 7] {
        [
            ("total_customers", self.total_customers.to_string()),
            ("active_orders", self.active_orders.to_string()),
            ("completed_orders", self.completed_orders.to_string()),
            ("active_memberships", self.active_memberships.to_string()),
            ("total_revenue", format!("{:.1}", self.total_revenue)),
            ("avg_satisfaction", format!("{:.1}", self.avg_satisfaction)),
            ("authentication_rate", format!("{:.1}", self.authentication_rate)),
        ]
    }
}

/// Revenue breakdown for one month (AED)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub service_revenue: i64,
    pub membership_revenue: i64,
    pub resale_commission: i64,
    pub total_revenue: i64,
}

/// Material at or below its reorder level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryAlert {
    pub material_id: String,
    pub material_name: String,
    pub current_stock: i64,
    pub reorder_level: i64,
    pub status: String,
}

/// Lifetime-value summary of one customer segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentLtv {
    pub count: usize,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_ltv: Decimal,

    /// `total_ltv / count`, rounded to a whole AED
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_ltv: Decimal,
}

/// Everything the exporter writes, computed at one instant
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot<'a> {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub dashboard_stats: DashboardStats,
    pub customer_segments: CustomerSegments<'a>,
    pub revenue_analysis: Vec<MonthlyRevenue>,
    pub service_utilization: ServiceUsage,
    pub inventory_status: Vec<InventoryAlert>,
    pub customer_ltv_analysis: LtvAnalysis,
}

/// ISO-8601 local time with microseconds and no offset
fn serialize_timestamp<S: Serializer>(
    timestamp: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format("%Y-%m-%dT%H:%M:%S%.6f"))
}
