//! Metrics engine
//!
//! This module derives every dashboard view from a loaded [`Dataset`]. The
//! engine only borrows the dataset; each method recomputes its result from
//! scratch, so two calls on the same dataset always agree.
//!
//! Business rules enforced here:
//! - Status matching is exact ("In Progress", "Completed", "Active", "Authentic")
//! - Average satisfaction divides the sum of all present scores by the number
//!   of completed orders, not by the number of scored orders
//! - Inventory at or below its reorder level raises an alert
//! - Service usage ties keep the order in which service names were first used

use crate::core::dataset::Dataset;
use crate::types::{
    AuthResult, CustomerSegments, DashboardSnapshot, DashboardStats, InventoryAlert,
    LtvAnalysis, MembershipStatus, MonthlyRevenue, OrderStatus, OrderedMap, SegmentLtv,
    ServiceUsage, LOW_STOCK_STATUS,
};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

/// Read-only metrics over a dataset
#[derive(Debug, Clone, Copy)]
pub struct MetricsEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> MetricsEngine<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        MetricsEngine { dataset }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Compute the headline dashboard figures
    ///
    /// Ratios are zero when their denominator is empty. `avg_satisfaction`
    /// and `authentication_rate` are rounded half-to-even to one decimal.
    pub fn dashboard_stats(&self) -> DashboardStats {
        let orders = &self.dataset.orders;

        let active_orders = orders
            .iter()
            .filter(|o| o.status == OrderStatus::InProgress)
            .count();
        let completed_orders = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .count();
        let active_memberships = self
            .dataset
            .memberships
            .iter()
            .filter(|m| m.status == MembershipStatus::Active)
            .count();

        let total_revenue: Decimal = self
            .dataset
            .revenue
            .iter()
            .map(|r| Decimal::from(r.total_revenue_aed))
            .sum();

        // Scores of orders in any status count towards the sum; only the
        // divisor is restricted to completed orders.
        let score_sum: Decimal = orders.iter().filter_map(|o| o.satisfaction_score).sum();
        let avg_satisfaction = if completed_orders > 0 {
            score_sum / Decimal::from(completed_orders)
        } else {
            Decimal::ZERO
        };

        let auth_records = &self.dataset.auth_records;
        let auth_pass = auth_records
            .iter()
            .filter(|a| a.overall_result == AuthResult::Authentic)
            .count();
        let authentication_rate = if auth_records.is_empty() {
            Decimal::ZERO
        } else {
            Decimal::from(auth_pass) / Decimal::from(auth_records.len()) * Decimal::ONE_HUNDRED
        };

        DashboardStats {
            total_customers: self.dataset.customers.len(),
            active_orders,
            completed_orders,
            active_memberships,
            total_revenue,
            avg_satisfaction: avg_satisfaction.round_dp(1),
            authentication_rate: authentication_rate.round_dp(1),
        }
    }

    /// Group customers by segment
    ///
    /// Segments appear in the order they were first seen; customers keep
    /// their file order within a segment.
    pub fn customer_segments(&self) -> CustomerSegments<'a> {
        let mut segments = CustomerSegments::new();
        for customer in &self.dataset.customers {
            segments
                .get_or_insert_with(&customer.segment, Vec::new)
                .push(customer);
        }
        segments
    }

    /// Project revenue rows into the monthly breakdown, in file order
    pub fn revenue_by_month(&self) -> Vec<MonthlyRevenue> {
        self.dataset
            .revenue
            .iter()
            .map(|r| MonthlyRevenue {
                month: r.month.clone(),
                service_revenue: r.service_revenue_aed,
                membership_revenue: r.membership_revenue_aed,
                resale_commission: r.resale_commission_aed,
                total_revenue: r.total_revenue_aed,
            })
            .collect()
    }

    /// Count how many order lines use each service
    ///
    /// Every service id on every order increments each catalogue service with
    /// that id. Ids with no catalogue entry are skipped. The result is sorted
    /// by count, most used first; the sort is stable so equal counts keep
    /// first-use order.
    pub fn service_utilization(&self) -> ServiceUsage {
        let mut names_by_id: HashMap<&str, Vec<&str>> = HashMap::new();
        for service in &self.dataset.services {
            names_by_id
                .entry(service.service_id.as_str())
                .or_default()
                .push(service.service_name.as_str());
        }

        let mut usage: ServiceUsage = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for order in &self.dataset.orders {
            for service_id in &order.service_ids {
                let Some(names) = names_by_id.get(service_id.as_str()) else {
                    debug!(service_id = %service_id, "order references unknown service");
                    continue;
                };

                for &name in names {
                    let index = *positions.entry(name).or_insert_with(|| {
                        usage.push((name.to_string(), 0));
                        usage.len() - 1
                    });
                    usage[index].1 += 1;
                }
            }
        }

        usage.sort_by(|a, b| b.1.cmp(&a.1));
        usage
    }

    /// List materials at or below their reorder level, in inventory order
    pub fn inventory_status(&self) -> Vec<InventoryAlert> {
        self.dataset
            .inventory
            .iter()
            .filter(|item| item.needs_reorder())
            .map(|item| InventoryAlert {
                material_id: item.material_id.clone(),
                material_name: item.material_name.clone(),
                current_stock: item.current_stock,
                reorder_level: item.reorder_level,
                status: LOW_STOCK_STATUS.to_string(),
            })
            .collect()
    }

    /// Summarize lifetime value per customer segment
    ///
    /// `avg_ltv` is rounded half-to-even to a whole AED.
    pub fn customer_ltv_analysis(&self) -> LtvAnalysis {
        self.customer_segments()
            .into_iter()
            .map(|(segment, customers)| {
                let count = customers.len();
                let total_ltv: Decimal = customers.iter().map(|c| c.ltv).sum();
                let avg_ltv = if count > 0 {
                    (total_ltv / Decimal::from(count)).round_dp(0)
                } else {
                    Decimal::ZERO
                };

                (
                    segment,
                    SegmentLtv {
                        count,
                        total_ltv,
                        avg_ltv,
                    },
                )
            })
            .collect::<OrderedMap<SegmentLtv>>()
    }

    /// Compute every view at once for export
    pub fn snapshot(&self, timestamp: NaiveDateTime) -> DashboardSnapshot<'a> {
        DashboardSnapshot {
            timestamp,
            dashboard_stats: self.dashboard_stats(),
            customer_segments: self.customer_segments(),
            revenue_analysis: self.revenue_by_month(),
            service_utilization: self.service_utilization(),
            inventory_status: self.inventory_status(),
            customer_ltv_analysis: self.customer_ltv_analysis(),
        }
    }
}
