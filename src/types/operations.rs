//! Operational datasets: memberships, inventory, authentication checks and revenue
//!
//! These rows deserialize straight from CSV. Integer cells may carry
//! surrounding whitespace; a non-numeric stock or revenue cell fails the load.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Parse an integer cell, ignoring surrounding whitespace
///
/// Only numeric columns are trimmed; status columns stay exact.
fn trimmed_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .parse()
        .map_err(|e| D::Error::custom(format!("invalid integer '{}': {}", raw, e)))
}

/// Membership status
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum MembershipStatus {
    Active,
    Other(String),
}

impl From<String> for MembershipStatus {
    fn from(status: String) -> Self {
        if status == "Active" {
            MembershipStatus::Active
        } else {
            MembershipStatus::Other(status)
        }
    }
}

/// Membership loaded from `memberships.csv`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Membership {
    pub status: MembershipStatus,
}

/// Material stock level loaded from `inventory.csv`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InventoryItem {
    pub material_id: String,
    pub material_name: String,

    #[serde(deserialize_with = "trimmed_i64")]
    pub current_stock: i64,

    /// Stock level at or below which the material must be reordered
    #[serde(deserialize_with = "trimmed_i64")]
    pub reorder_level: i64,
}

impl InventoryItem {
    /// Whether the item is at or below its reorder threshold
    pub fn needs_reorder(&self) -> bool {
        self.current_stock <= self.reorder_level
    }
}

/// Outcome of an authentication check
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum AuthResult {
    Authentic,
    Other(String),
}

impl From<String> for AuthResult {
    fn from(result: String) -> Self {
        if result == "Authentic" {
            AuthResult::Authentic
        } else {
            AuthResult::Other(result)
        }
    }
}

/// Authentication check loaded from `authentication_records.csv`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticationRecord {
    pub overall_result: AuthResult,
}

/// Monthly revenue row loaded from `revenue.csv` (all amounts in AED)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RevenueRow {
    pub month: String,
    #[serde(deserialize_with = "trimmed_i64")]
    pub service_revenue_aed: i64,
    #[serde(deserialize_with = "trimmed_i64")]
    pub membership_revenue_aed: i64,
    #[serde(deserialize_with = "trimmed_i64")]
    pub resale_commission_aed: i64,
    #[serde(deserialize_with = "trimmed_i64")]
    pub total_revenue_aed: i64,
}
