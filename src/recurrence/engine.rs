//! Recurring-payment projection
//!
//! Pure calendar arithmetic over subscription records: next-occurrence
//! lookup, interval-bounded cost totals, and day-bucketed occurrence maps.
//! Occurrence dates form a strictly increasing sequence starting at the
//! record's start date; every query recomputes from scratch.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Local, Months, NaiveDate};

use super::interval::DateInterval;
use crate::subscription::{Period, Subscription};

/// Add one billing cycle (`frequency` units of `period`) to `date`.
///
/// Calendar-aware: monthly and yearly steps clamp the day-of-month when the
/// target month is shorter (Jan 31 + 1 month lands on Feb 28/29). Returns
/// `None` only when the step would leave the representable date range, so
/// every occurrence walk treats `None` as a terminator.
pub fn advance(date: NaiveDate, period: Period, frequency: u32) -> Option<NaiveDate> {
    match period {
        Period::Daily => date.checked_add_days(Days::new(frequency as u64)),
        Period::Weekly => date.checked_add_days(Days::new(7 * frequency as u64)),
        Period::Monthly => date.checked_add_months(Months::new(frequency)),
        Period::Yearly => date.checked_add_months(Months::new(frequency.checked_mul(12)?)),
    }
}

/// First occurrence strictly after `after`, walking from `start_date`.
///
/// Returns `None` for a zero frequency (the walk would never move) or on
/// calendar overflow. Termination is bounded by
/// (after - start_date) / cycle length steps: `advance` is strictly
/// increasing for any positive frequency.
pub fn next_occurrence_after(
    start_date: NaiveDate,
    period: Period,
    frequency: u32,
    after: NaiveDate,
) -> Option<NaiveDate> {
    if frequency == 0 {
        return None;
    }

    let mut occurrence = start_date;
    while occurrence <= after {
        occurrence = advance(occurrence, period, frequency)?;
    }
    Some(occurrence)
}

/// Whole calendar days from `today` until the next billing occurrence.
///
/// A non-positive frequency is a malformed record and reports 0 days
/// rather than iterating.
pub fn days_until_next_payment_from(
    start_date: NaiveDate,
    period: Period,
    frequency: i32,
    today: NaiveDate,
) -> i64 {
    if frequency <= 0 {
        return 0;
    }

    match next_occurrence_after(start_date, period, frequency as u32, today) {
        Some(next) => (next - today).num_days(),
        None => 0,
    }
}

/// Days until the next occurrence, measured from the local clock
pub fn days_until_next_payment(start_date: NaiveDate, period: Period, frequency: i32) -> i64 {
    days_until_next_payment_from(start_date, period, frequency, Local::now().date_naive())
}

/// First occurrence on or after `from` (the fast-forward phase: earlier
/// occurrences are skipped without accruing anything)
fn first_occurrence_on_or_after(
    start_date: NaiveDate,
    period: Period,
    frequency: u32,
    from: NaiveDate,
) -> Option<NaiveDate> {
    let mut occurrence = start_date;
    while occurrence < from {
        occurrence = advance(occurrence, period, frequency)?;
    }
    Some(occurrence)
}

/// Total cost of a subscription's occurrences inside `interval`.
///
/// Frozen records and records with a non-positive frequency contribute
/// zero without iterating. Both interval bounds are inclusive: an
/// occurrence landing exactly on `interval.start` or `interval.end`
/// counts.
pub fn cost_within_interval(sub: &Subscription, interval: DateInterval) -> f64 {
    if !sub.is_projectable() {
        return 0.0;
    }
    let frequency = sub.frequency as u32;

    let mut occurrence =
        match first_occurrence_on_or_after(sub.start_date, sub.period, frequency, interval.start) {
            Some(date) => date,
            None => return 0.0,
        };

    let mut total = 0.0;
    while occurrence <= interval.end {
        if interval.contains(occurrence) {
            total += sub.price;
        }
        occurrence = match advance(occurrence, sub.period, frequency) {
            Some(next) => next,
            None => break,
        };
    }

    total
}

/// Bucket every occurrence inside `interval` by its day of month.
///
/// Callers supply month boundaries as the interval, so bucket keys never
/// collide across months. Within a day, subscriptions keep the order of
/// the input slice. Frozen and malformed records never appear.
pub fn payments_by_day<'a>(
    subscriptions: &'a [Subscription],
    interval: DateInterval,
) -> BTreeMap<u32, Vec<&'a Subscription>> {
    let mut payments: BTreeMap<u32, Vec<&'a Subscription>> = BTreeMap::new();

    for sub in subscriptions {
        if !sub.is_projectable() {
            continue;
        }
        let frequency = sub.frequency as u32;

        let mut occurrence = match first_occurrence_on_or_after(
            sub.start_date,
            sub.period,
            frequency,
            interval.start,
        ) {
            Some(date) => date,
            None => continue,
        };

        while occurrence <= interval.end {
            if interval.contains(occurrence) {
                payments.entry(occurrence.day()).or_default().push(sub);
            }
            occurrence = match advance(occurrence, sub.period, frequency) {
                Some(next) => next,
                None => break,
            };
        }
    }

    payments
}
