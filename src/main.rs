//! SubZero CLI
//!
//! Command-line dashboard for the subscription tracker core

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};

use subzero::recurrence::{self, DateInterval};
use subzero::report;
use subzero::subscription::{load_subscriptions, Category, Period, Subscription};

fn main() -> Result<()> {
    env_logger::init();

    println!("SubZero v0.1.0");
    println!("==============\n");

    let subscriptions = if Path::new("subscriptions.csv").exists() {
        load_subscriptions("subscriptions.csv")?
    } else {
        sample_subscriptions()
    };

    // Per-card view
    println!(
        "{:>3} {:<16} {:>8} {:<16} {:<13} {:>7}",
        "Id", "Name", "Price", "Cycle", "Category", "Due in"
    );
    println!("{}", "-".repeat(70));
    for sub in &subscriptions {
        let due = if sub.is_projectable() {
            let days =
                recurrence::days_until_next_payment(sub.start_date, sub.period, sub.frequency);
            format!("{}d", days)
        } else {
            "frozen".to_string()
        };
        println!(
            "{:>3} {:<16} {:>8.2} {:<16} {:<13} {:>7}",
            sub.id,
            sub.name,
            sub.price,
            sub.cycle_description(),
            sub.category.as_str(),
            due
        );
    }

    // Dashboard stats
    let summary = report::dashboard_summary(&subscriptions);
    println!("\nSummary:");
    println!(
        "  Active: {}  Frozen: {}",
        summary.active_count, summary.frozen_count
    );
    println!("  Expenses this month: ${:.2}", summary.monthly_total);
    println!("  Yearly projection:   ${:.2}", summary.yearly_total);
    if let Some(next) = &summary.next_payment {
        println!(
            "  Next charge: {} (${:.2}) in {} days",
            next.name, next.price, next.days_until
        );
    }

    let today = Local::now().date_naive();
    let breakdown = report::category_totals(&subscriptions, DateInterval::year_of(today));
    println!("\nSpend by category ({}):", today.year());
    for row in &breakdown {
        println!("  {:<14} ${:>9.2}", row.category.as_str(), row.total);
    }

    // Write the twelve-month projection to CSV
    let rows = report::monthly_projection(&subscriptions, today.year());
    let csv_path = "monthly_projection.csv";
    let mut file = File::create(csv_path)?;
    writeln!(file, "Year,Month,Total")?;
    for row in &rows {
        writeln!(file, "{},{},{:.2}", row.year, row.month, row.total)?;
    }
    println!("\nMonthly projection written to: {}", csv_path);

    Ok(())
}

/// Demo data used when no subscriptions.csv is present
fn sample_subscriptions() -> Vec<Subscription> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date");

    let mut netflix = Subscription::new(
        1,
        "Netflix",
        15.99,
        Period::Monthly,
        1,
        date(2024, 1, 1),
        Category::Entertainment,
    );
    netflix.icon = Some("tv".to_string());
    netflix.color = Some("#e50914".to_string());

    let mut gym = Subscription::new(
        5,
        "Gym",
        45.0,
        Period::Monthly,
        1,
        date(2024, 1, 17),
        Category::Health,
    );
    gym.active = false;

    vec![
        netflix,
        Subscription::new(
            2,
            "Spotify",
            9.99,
            Period::Monthly,
            1,
            date(2023, 11, 10),
            Category::Entertainment,
        ),
        Subscription::new(
            3,
            "Adobe CC",
            54.99,
            Period::Monthly,
            1,
            date(2024, 2, 20),
            Category::Software,
        ),
        Subscription::new(
            4,
            "iCloud+",
            2.99,
            Period::Monthly,
            1,
            date(2023, 5, 5),
            Category::Software,
        ),
        gym,
        Subscription::new(
            6,
            "Amazon Prime",
            139.0,
            Period::Yearly,
            1,
            date(2024, 3, 12),
            Category::Shopping,
        ),
        Subscription::new(
            7,
            "Commuter Pass",
            89.5,
            Period::Monthly,
            1,
            date(2024, 4, 1),
            Category::Transport,
        ),
        Subscription::new(
            8,
            "Meal Kit",
            9.99,
            Period::Weekly,
            2,
            date(2024, 1, 15),
            Category::Shopping,
        ),
    ]
}
