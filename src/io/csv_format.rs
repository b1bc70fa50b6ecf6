//! CSV format handling for dashboard datasets
//!
//! This module centralizes the conversions from raw CSV rows to typed records
//! for the datasets that need more than plain deserialization:
//! - Customers keep their full raw row, with `ltv` parsed as a decimal
//! - Orders get their satisfaction score parsed and `service_ids` split
//!
//! All functions are pure (no I/O) for easy testing. Errors carry no file or
//! line; the table reader attaches that context.

use crate::types::{Customer, DashboardError, Order, OrderStatus, Record};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// CSV record structure for `orders.csv`
///
/// Other columns of the file are ignored.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OrderCsvRecord {
    pub status: String,
    pub satisfaction_score: Option<String>,
    pub service_ids: String,
}

/// Convert a raw `customers.csv` row into a Customer
///
/// # Errors
///
/// - `segment` or `ltv` column absent from the row
/// - `ltv` not a decimal number
pub fn convert_customer(record: Record) -> Result<Customer, DashboardError> {
    let segment = record
        .get("segment")
        .ok_or_else(|| DashboardError::missing_field("segment"))?
        .clone();

    let ltv_str = record
        .get("ltv")
        .ok_or_else(|| DashboardError::missing_field("ltv"))?;
    let ltv = Decimal::from_str(ltv_str.trim())
        .map_err(|_| DashboardError::invalid_field("ltv", ltv_str))?;

    Ok(Customer {
        segment,
        ltv,
        fields: record,
    })
}

/// Convert an OrderCsvRecord into an Order
///
/// An empty or whitespace-only score means "not scored". A blank-looking
/// cell such as `"   "` is therefore skipped instead of failing the load;
/// any other non-numeric score is an `InvalidField` error. Service ids are
/// split on commas and trimmed; empty ids are kept.
pub fn convert_order(csv_record: OrderCsvRecord) -> Result<Order, DashboardError> {
    let satisfaction_score = match csv_record.satisfaction_score {
        Some(score_str) if !score_str.trim().is_empty() => Some(
            Decimal::from_str(score_str.trim())
                .map_err(|_| DashboardError::invalid_field("satisfaction_score", &score_str))?,
        ),
        _ => None,
    };

    let service_ids = csv_record
        .service_ids
        .split(',')
        .map(|id| id.trim().to_string())
        .collect();

    Ok(Order {
        status: OrderStatus::from(csv_record.status),
        satisfaction_score,
        service_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn customer_row(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn order_record(status: &str, score: Option<&str>, service_ids: &str) -> OrderCsvRecord {
        OrderCsvRecord {
            status: status.to_string(),
            satisfaction_score: score.map(|s| s.to_string()),
            service_ids: service_ids.to_string(),
        }
    }

    #[test]
    fn test_convert_customer_keeps_raw_row() {
        let row = customer_row(&[
            ("customer_id", "C001"),
            ("name", "Aisha Al Mansoori"),
            ("segment", "VIP"),
            ("ltv", "85000"),
        ]);

        let customer = convert_customer(row.clone()).unwrap();
        assert_eq!(customer.segment, "VIP");
        assert_eq!(customer.ltv, Decimal::new(85000, 0));
        assert_eq!(customer.fields, row);
        assert_eq!(customer.field("name"), Some("Aisha Al Mansoori"));
    }

    #[rstest]
    #[case("12500.50", Decimal::new(1250050, 2))]
    #[case("  42000  ", Decimal::new(42000, 0))]
    #[case("0", Decimal::ZERO)]
    fn test_convert_customer_ltv_parsing(#[case] ltv: &str, #[case] expected: Decimal) {
        let row = customer_row(&[("segment", "Collector"), ("ltv", ltv)]);
        assert_eq!(convert_customer(row).unwrap().ltv, expected);
    }

    #[rstest]
    #[case::non_numeric_ltv(&[("segment", "VIP"), ("ltv", "unknown")], "Invalid ltv 'unknown'")]
    #[case::empty_ltv(&[("segment", "VIP"), ("ltv", "")], "Invalid ltv ''")]
    #[case::missing_ltv(&[("segment", "VIP")], "missing field `ltv`")]
    #[case::missing_segment(&[("ltv", "100")], "missing field `segment`")]
    fn test_convert_customer_errors(#[case] pairs: &[(&str, &str)], #[case] expected: &str) {
        let result = convert_customer(customer_row(pairs));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(expected));
    }

    #[rstest]
    #[case::in_progress("In Progress", OrderStatus::InProgress)]
    #[case::completed("Completed", OrderStatus::Completed)]
    #[case::case_sensitive("completed", OrderStatus::Other("completed".to_string()))]
    #[case::other("Awaiting Parts", OrderStatus::Other("Awaiting Parts".to_string()))]
    fn test_convert_order_status(#[case] status: &str, #[case] expected: OrderStatus) {
        let order = convert_order(order_record(status, None, "S001")).unwrap();
        assert_eq!(order.status, expected);
    }

    #[rstest]
    #[case::present(Some("9"), Some(Decimal::new(9, 0)))]
    #[case::fractional(Some("4.5"), Some(Decimal::new(45, 1)))]
    #[case::empty(Some(""), None)]
    #[case::whitespace(Some("   "), None)]
    #[case::absent(None, None)]
    fn test_convert_order_satisfaction(
        #[case] score: Option<&str>,
        #[case] expected: Option<Decimal>,
    ) {
        let order = convert_order(order_record("Completed", score, "S001")).unwrap();
        assert_eq!(order.satisfaction_score, expected);
    }

    #[test]
    fn test_convert_order_invalid_score() {
        let result = convert_order(order_record("Completed", Some("great"), "S001"));
        assert_eq!(
            result.unwrap_err(),
            DashboardError::invalid_field("satisfaction_score", "great")
        );
    }

    #[rstest]
    #[case::single("S001", vec!["S001"])]
    #[case::trimmed("S001, S003 ,S004", vec!["S001", "S003", "S004"])]
    #[case::empty("", vec![""])]
    #[case::trailing_comma("S002,", vec!["S002", ""])]
    fn test_convert_order_service_ids(#[case] raw: &str, #[case] expected: Vec<&str>) {
        let order = convert_order(order_record("Completed", None, raw)).unwrap();
        assert_eq!(order.service_ids, expected);
    }
}
