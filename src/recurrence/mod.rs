//! Recurring-payment projection engine

mod engine;
mod interval;

pub use engine::{
    advance, cost_within_interval, days_until_next_payment, days_until_next_payment_from,
    next_occurrence_after, payments_by_day,
};
pub use interval::DateInterval;
