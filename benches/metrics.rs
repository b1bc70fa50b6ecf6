//! Benchmark suite for the dashboard metrics and the CSV loader
//!
//! Datasets are generated in memory, so no fixture files are needed.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! Sizes are the number of orders; customers, inventory and authentication
//! checks scale with them.

use atelier_dashboard::types::{
    AuthResult, AuthenticationRecord, Customer, InventoryItem, Membership, MembershipStatus,
    Order, OrderStatus, Record, RevenueRow, Service,
};
use atelier_dashboard::{Dataset, MetricsEngine};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt::Write as _;
use std::fs;
use tempfile::TempDir;

const SIZES: &[usize] = &[100, 1_000, 100_000];
const SEGMENTS: &[&str] = &["VIP", "Collector", "Regular", "New"];
const SERVICE_COUNT: usize = 20;

fn main() {
    divan::main();
}

fn synthetic_dataset(size: usize) -> Dataset {
    let customers = (0..size / 4 + 1)
        .map(|i| {
            let segment = SEGMENTS[i % SEGMENTS.len()].to_string();
            let ltv = Decimal::from(1_000 + (i as i64 * 37) % 90_000);
            let fields: Record = [
                ("customer_id".to_string(), format!("C{:06}", i)),
                ("segment".to_string(), segment.clone()),
                ("ltv".to_string(), ltv.to_string()),
            ]
            .into_iter()
            .collect();
            Customer {
                segment,
                ltv,
                fields,
            }
        })
        .collect();

    let services = (0..SERVICE_COUNT)
        .map(|i| Service {
            service_id: format!("S{:03}", i),
            service_name: format!("Service {}", i),
        })
        .collect();

    let orders = (0..size)
        .map(|i| Order {
            status: match i % 3 {
                0 => OrderStatus::Completed,
                1 => OrderStatus::InProgress,
                _ => OrderStatus::from("Delivered"),
            },
            satisfaction_score: (i % 2 == 0).then(|| Decimal::from(5 + i % 6)),
            service_ids: vec![
                format!("S{:03}", i % SERVICE_COUNT),
                format!("S{:03}", (i * 7) % (SERVICE_COUNT + 2)),
            ],
        })
        .collect();

    let memberships = (0..size / 10 + 1)
        .map(|i| Membership {
            status: if i % 3 == 0 {
                MembershipStatus::Other("Expired".to_string())
            } else {
                MembershipStatus::Active
            },
        })
        .collect();

    let inventory = (0..size / 20 + 1)
        .map(|i| InventoryItem {
            material_id: format!("M{:04}", i),
            material_name: format!("Material {}", i),
            current_stock: (i as i64 * 13) % 50,
            reorder_level: 10,
        })
        .collect();

    let auth_records = (0..size / 5 + 1)
        .map(|i| AuthenticationRecord {
            overall_result: if i % 9 == 0 {
                AuthResult::Other("Counterfeit".to_string())
            } else {
                AuthResult::Authentic
            },
        })
        .collect();

    let revenue = (1..=12)
        .map(|m| RevenueRow {
            month: format!("2025-{:02}", m),
            service_revenue_aed: 150_000 + m * 1_000,
            membership_revenue_aed: 40_000,
            resale_commission_aed: 20_000,
            total_revenue_aed: 210_000 + m * 1_000,
        })
        .collect();

    Dataset {
        customers,
        services,
        orders,
        memberships,
        inventory,
        auth_records,
        revenue,
    }
}

#[divan::bench(args = SIZES)]
fn dashboard_stats(bencher: divan::Bencher, size: usize) {
    let dataset = synthetic_dataset(size);
    let engine = MetricsEngine::new(&dataset);
    bencher.bench_local(|| engine.dashboard_stats());
}

#[divan::bench(args = SIZES)]
fn service_utilization(bencher: divan::Bencher, size: usize) {
    let dataset = synthetic_dataset(size);
    let engine = MetricsEngine::new(&dataset);
    bencher.bench_local(|| engine.service_utilization());
}

#[divan::bench(args = SIZES)]
fn customer_ltv_analysis(bencher: divan::Bencher, size: usize) {
    let dataset = synthetic_dataset(size);
    let engine = MetricsEngine::new(&dataset);
    bencher.bench_local(|| engine.customer_ltv_analysis());
}

/// Full snapshot plus pretty-printed JSON, as the exporter produces it
#[divan::bench(args = SIZES)]
fn snapshot_to_json(bencher: divan::Bencher, size: usize) {
    let dataset = synthetic_dataset(size);
    let engine = MetricsEngine::new(&dataset);
    let timestamp = NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid timestamp");

    bencher.bench_local(|| {
        let mut buffer = Vec::new();
        serde_json::to_writer_pretty(&mut buffer, &engine.snapshot(timestamp))
            .expect("Serialization failed");
        buffer
    });
}

/// Load customers and orders from CSV files written to a temp directory
#[divan::bench(args = SIZES)]
fn load_from_csv(bencher: divan::Bencher, size: usize) {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let mut customers = String::from("customer_id,name,segment,ltv\n");
    for i in 0..size / 4 + 1 {
        let _ = writeln!(
            customers,
            "C{:06},Customer {},{},{}",
            i,
            i,
            SEGMENTS[i % SEGMENTS.len()],
            1_000 + i * 37
        );
    }
    let mut orders = String::from("order_id,status,service_ids,satisfaction_score\n");
    for i in 0..size {
        let status = if i % 2 == 0 { "Completed" } else { "In Progress" };
        let score = if i % 2 == 0 { "8" } else { "" };
        let _ = writeln!(
            orders,
            "O{:06},{},\"S{:03}, S{:03}\",{}",
            i,
            status,
            i % SERVICE_COUNT,
            (i + 1) % SERVICE_COUNT,
            score
        );
    }
    fs::write(dir.path().join("customers.csv"), customers).expect("Failed to write customers");
    fs::write(dir.path().join("orders.csv"), orders).expect("Failed to write orders");

    bencher.bench_local(|| Dataset::load(dir.path()).expect("Load failed"));
}
