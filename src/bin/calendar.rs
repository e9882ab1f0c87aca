//! Render the day-by-day charge calendar for one month

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;

use subzero::recurrence::{payments_by_day, DateInterval};
use subzero::report::total_cost_in_interval;
use subzero::subscription::load_subscriptions;

#[derive(Parser)]
#[command(version, about = "Print the payment calendar for a month")]
struct Args {
    /// Calendar year (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Month number 1-12 (defaults to the current month)
    #[arg(long)]
    month: Option<u32>,

    /// Subscription export to read
    #[arg(long, default_value = "subscriptions.csv")]
    input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let today = Local::now().date_naive();
    let year = args.year.unwrap_or(today.year());
    let month = args.month.unwrap_or(today.month());

    let interval = DateInterval::calendar_month(year, month)
        .with_context(|| format!("{} is not a valid month", month))?;

    let subscriptions = load_subscriptions(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let payments = payments_by_day(&subscriptions, interval);

    println!("Payments for {:04}-{:02}", year, month);
    println!("{}", "-".repeat(44));

    if payments.is_empty() {
        println!("  no charges this month");
    }
    for day in 1..=interval.end.day() {
        if let Some(subs) = payments.get(&day) {
            let entries: Vec<String> = subs
                .iter()
                .map(|sub| format!("{} (${:.2})", sub.name, sub.price))
                .collect();
            println!("{:>3}  {}", day, entries.join(", "));
        }
    }

    println!("{}", "-".repeat(44));
    println!(
        "Month total: ${:.2}",
        total_cost_in_interval(&subscriptions, interval)
    );

    Ok(())
}
