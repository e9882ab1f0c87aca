//! Subscription records and list loading

mod data;
pub mod loader;

pub use data::{Category, Period, Subscription, ValidationError};
pub use loader::{load_default_subscriptions, load_subscriptions, load_subscriptions_from_reader};
