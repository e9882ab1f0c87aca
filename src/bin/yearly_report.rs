//! Yearly projection report across the full subscription list
//!
//! Computes per-month totals for one calendar year in parallel and writes
//! them as CSV. Supports JSON output for API integration via --json.
//! Accepts config via environment variables:
//!   REPORT_YEAR, SUBSCRIPTIONS_CSV

use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use rayon::prelude::*;
use serde::Serialize;

use subzero::recurrence::{cost_within_interval, DateInterval};
use subzero::report::MonthTotal;
use subzero::subscription::{load_subscriptions, loader::DEFAULT_SUBSCRIPTIONS_PATH, Subscription};

#[derive(Serialize)]
struct YearlyReport {
    year: i32,
    subscription_count: usize,
    active_count: usize,
    monthly: Vec<MonthTotal>,
    yearly_total: f64,
    execution_time_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");

    let year = match env::var("REPORT_YEAR") {
        Ok(value) => value
            .parse()
            .context("REPORT_YEAR must be a calendar year")?,
        Err(_) => Local::now().year(),
    };
    let input =
        env::var("SUBSCRIPTIONS_CSV").unwrap_or_else(|_| DEFAULT_SUBSCRIPTIONS_PATH.to_string());

    let start = Instant::now();
    let subscriptions =
        load_subscriptions(&input).with_context(|| format!("failed to load {}", input))?;
    log::info!("loaded {} subscriptions from {}", subscriptions.len(), input);

    // Fan out per subscription; every projection call is pure
    let per_subscription: Vec<[f64; 12]> = subscriptions
        .par_iter()
        .map(|sub| month_costs(sub, year))
        .collect();

    let mut monthly: Vec<MonthTotal> = (1..=12)
        .map(|month| MonthTotal {
            year,
            month,
            total: 0.0,
        })
        .collect();
    for costs in &per_subscription {
        for (row, cost) in monthly.iter_mut().zip(costs) {
            row.total += cost;
        }
    }
    let yearly_total: f64 = monthly.iter().map(|row| row.total).sum();
    let active_count = subscriptions.iter().filter(|sub| sub.active).count();

    if json_output {
        let report = YearlyReport {
            year,
            subscription_count: subscriptions.len(),
            active_count,
            monthly,
            yearly_total,
            execution_time_ms: start.elapsed().as_millis() as u64,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let output_path = "yearly_report.csv";
    let mut file = File::create(output_path)?;
    writeln!(file, "Year,Month,Total")?;
    for row in &monthly {
        writeln!(file, "{},{},{:.2}", row.year, row.month, row.total)?;
    }

    println!(
        "Yearly report for {} ({} subscriptions, {} active)\n",
        year,
        subscriptions.len(),
        active_count
    );
    println!("{:>5} {:>12}", "Month", "Total");
    println!("{}", "-".repeat(18));
    for row in &monthly {
        println!("{:>5} {:>12.2}", row.month, row.total);
    }
    println!("{}", "-".repeat(18));
    println!("{:>5} {:>12.2}", "Year", yearly_total);

    println!(
        "\nOutput written to {} in {:?}",
        output_path,
        start.elapsed()
    );

    Ok(())
}

/// Twelve month-bounded totals for a single subscription
fn month_costs(sub: &Subscription, year: i32) -> [f64; 12] {
    let mut costs = [0.0; 12];
    for month in 1..=12u32 {
        if let Some(interval) = DateInterval::calendar_month(year, month) {
            costs[(month - 1) as usize] = cost_within_interval(sub, interval);
        }
    }
    costs
}
