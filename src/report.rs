//! Dashboard aggregates built on the projection engine
//!
//! Everything here is a fold over `recurrence` results; the structs are
//! the rows the dashboard and report binaries render.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::recurrence::{self, DateInterval};
use crate::subscription::{Category, Subscription};

/// Summed cost of every subscription across `interval`
pub fn total_cost_in_interval(subscriptions: &[Subscription], interval: DateInterval) -> f64 {
    subscriptions
        .iter()
        .map(|sub| recurrence::cost_within_interval(sub, interval))
        .sum()
}

/// Expected spend for the month containing today
pub fn expected_monthly_cost(subscriptions: &[Subscription]) -> f64 {
    total_cost_in_interval(subscriptions, DateInterval::current_month())
}

/// Expected spend for the year containing today
pub fn expected_yearly_cost(subscriptions: &[Subscription]) -> f64 {
    total_cost_in_interval(subscriptions, DateInterval::current_year())
}

/// Spend for one category inside an interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Per-category breakdown inside `interval`.
/// Categories appear in declaration order; zero-spend categories are
/// omitted.
pub fn category_totals(subscriptions: &[Subscription], interval: DateInterval) -> Vec<CategoryTotal> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let total: f64 = subscriptions
                .iter()
                .filter(|sub| sub.category == category)
                .map(|sub| recurrence::cost_within_interval(sub, interval))
                .sum();
            (total > 0.0).then_some(CategoryTotal { category, total })
        })
        .collect()
}

/// Projected spend for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthTotal {
    pub year: i32,
    pub month: u32,
    pub total: f64,
}

/// Twelve per-month totals for `year`
pub fn monthly_projection(subscriptions: &[Subscription], year: i32) -> Vec<MonthTotal> {
    let rows = (1..=12)
        .filter_map(|month| {
            let interval = DateInterval::calendar_month(year, month)?;
            Some(MonthTotal {
                year,
                month,
                total: total_cost_in_interval(subscriptions, interval),
            })
        })
        .collect();
    log::debug!("projected {} subscriptions across {}", subscriptions.len(), year);
    rows
}

/// The next charge to land for a subscription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingPayment {
    pub subscription_id: u32,
    pub name: String,
    pub days_until: i64,
    pub price: f64,
}

/// Headline numbers for the dashboard stats row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub active_count: usize,
    pub frozen_count: usize,
    pub monthly_total: f64,
    pub yearly_total: f64,
    /// Soonest upcoming charge across active subscriptions
    pub next_payment: Option<UpcomingPayment>,
}

/// Dashboard summary as of `today`
pub fn dashboard_summary_on(subscriptions: &[Subscription], today: NaiveDate) -> DashboardSummary {
    let active_count = subscriptions.iter().filter(|sub| sub.active).count();

    let next_payment = subscriptions
        .iter()
        .filter(|sub| sub.is_projectable())
        .map(|sub| UpcomingPayment {
            subscription_id: sub.id,
            name: sub.name.clone(),
            days_until: recurrence::days_until_next_payment_from(
                sub.start_date,
                sub.period,
                sub.frequency,
                today,
            ),
            price: sub.price,
        })
        .min_by_key(|payment| payment.days_until);

    DashboardSummary {
        active_count,
        frozen_count: subscriptions.len() - active_count,
        monthly_total: total_cost_in_interval(subscriptions, DateInterval::month_of(today)),
        yearly_total: total_cost_in_interval(subscriptions, DateInterval::year_of(today)),
        next_payment,
    }
}

/// Dashboard summary as of the local clock
pub fn dashboard_summary(subscriptions: &[Subscription]) -> DashboardSummary {
    dashboard_summary_on(subscriptions, Local::now().date_naive())
}
