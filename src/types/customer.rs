//! Customer records
//!
//! A customer keeps its full raw CSV row alongside the two typed fields the
//! metrics use, because the JSON export publishes customers verbatim inside
//! their segment buckets.

use super::record::Record;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Customer loaded from `customers.csv`
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Cohort the customer belongs to (e.g. "VIP", "Collector")
    pub segment: String,

    /// Lifetime value in AED
    pub ltv: Decimal,

    /// Every column of the source row, in header order
    pub fields: Record,
}

impl Customer {
    /// Look up any raw column of the source row
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

impl Serialize for Customer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
