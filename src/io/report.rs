//! Human-readable dashboard report
//!
//! Renders the metrics as a fixed sequence of sections:
//! statistics, customer segments, monthly revenue, top services, inventory
//! alerts and LTV by segment. Output goes to any writer; the binary passes
//! stdout.

use crate::core::MetricsEngine;
use std::io::{self, Write};

/// Number of services listed under TOP SERVICES unless configured otherwise
pub const DEFAULT_TOP_SERVICES: usize = 5;

const REPORT_TITLE: &str = "ATELIER 8 - LUXURY RESTORATION DASHBOARD REPORT";
const RULE_WIDTH: usize = 70;

/// Write the full report for `engine` to `output`
///
/// # Errors
///
/// Returns an error only if writing to `output` fails.
pub fn render_report(
    engine: &MetricsEngine<'_>,
    top_services: usize,
    output: &mut dyn Write,
) -> io::Result<()> {
    let heavy_rule = "=".repeat(RULE_WIDTH);

    writeln!(output, "\n{}", heavy_rule)?;
    writeln!(output, "{}", REPORT_TITLE)?;
    writeln!(output, "{}", heavy_rule)?;

    section(output, "📊 DASHBOARD STATISTICS")?;
    for (key, value) in engine.dashboard_stats().labelled_values() {
        writeln!(output, "  {}: {}", title_case(key), value)?;
    }

    section(output, "👥 CUSTOMER SEGMENTS")?;
    for (segment, customers) in engine.customer_segments().iter() {
        writeln!(output, "  {}: {} customers", segment, customers.len())?;
    }

    section(output, "💰 MONTHLY REVENUE")?;
    for month in engine.revenue_by_month() {
        writeln!(
            output,
            "  {}: {} AED",
            month.month,
            group_thousands(&month.total_revenue.to_string())
        )?;
    }

    section(output, "🔧 TOP SERVICES")?;
    for (service, count) in engine.service_utilization().iter().take(top_services) {
        writeln!(output, "  {}: {} orders", service, count)?;
    }

    section(output, "📦 INVENTORY STATUS")?;
    let alerts = engine.inventory_status();
    if alerts.is_empty() {
        writeln!(output, "  ✅ All inventory levels normal")?;
    } else {
        for alert in &alerts {
            writeln!(
                output,
                "  ⚠️  {}: {} units",
                alert.material_name, alert.current_stock
            )?;
        }
    }

    section(output, "💎 CUSTOMER LTV BY SEGMENT")?;
    for (segment, analysis) in engine.customer_ltv_analysis().iter() {
        writeln!(output, "  {}:", segment)?;
        writeln!(
            output,
            "    Count: {} | Avg LTV: {} AED",
            analysis.count,
            group_thousands(&format!("{:.0}", analysis.avg_ltv))
        )?;
    }

    writeln!(output, "\n{}\n", heavy_rule)?;
    output.flush()
}

fn section(output: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(output, "\n{}", heading)?;
    writeln!(output, "{}", "-".repeat(RULE_WIDTH))
}

/// Turn a snake_case key into a label: `avg_satisfaction` → `Avg Satisfaction`
fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Insert commas every three digits in the integer part of a number string
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let remainder = digits.len() % 3;
    for (i, &c) in digits.iter().enumerate() {
        if i != 0 && i % 3 == remainder {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}{}", sign, grouped, fraction)
}
