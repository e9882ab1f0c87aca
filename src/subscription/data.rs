//! Subscription data structures matching the tracker's stored record format

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Calendar unit advanced per billing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    /// Every `frequency` calendar days
    Daily,
    /// Every `frequency` weeks (7 x frequency days)
    Weekly,
    /// Every `frequency` calendar months
    Monthly,
    /// Every `frequency` calendar years
    Yearly,
}

impl Period {
    /// Get the string representation matching the export format
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "DAILY",
            Period::Weekly => "WEEKLY",
            Period::Monthly => "MONTHLY",
            Period::Yearly => "YEARLY",
        }
    }

    /// Unit name used when describing a cycle ("week", "month", ...)
    pub fn unit_name(&self) -> &'static str {
        match self {
            Period::Daily => "day",
            Period::Weekly => "week",
            Period::Monthly => "month",
            Period::Yearly => "year",
        }
    }
}

/// Spending category assigned to a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Entertainment,
    Software,
    Health,
    Finance,
    Transport,
    Education,
    Utilities,
    Shopping,
    Other,
}

impl Category {
    /// All categories in declaration order, for breakdown tables
    pub const ALL: [Category; 9] = [
        Category::Entertainment,
        Category::Software,
        Category::Health,
        Category::Finance,
        Category::Transport,
        Category::Education,
        Category::Utilities,
        Category::Shopping,
        Category::Other,
    ];

    /// Get the string representation matching the export format
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Entertainment => "ENTERTAINMENT",
            Category::Software => "SOFTWARE",
            Category::Health => "HEALTH",
            Category::Finance => "FINANCE",
            Category::Transport => "TRANSPORT",
            Category::Education => "EDUCATION",
            Category::Utilities => "UTILITIES",
            Category::Shopping => "SHOPPING",
            Category::Other => "OTHER",
        }
    }
}

/// Rejection reasons at the create/edit boundary
///
/// Projection never raises these; malformed records are masked to zero
/// contribution there. Validation exists so callers can reject bad data
/// before it is stored.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("price must be non-negative, got {0}")]
    NegativePrice(f64),
    #[error("frequency must be at least 1, got {0}")]
    NonPositiveFrequency(i32),
}

/// A single subscription record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique record identifier
    pub id: u32,

    /// Service name shown on the dashboard card
    pub name: String,

    /// Amount charged per occurrence
    pub price: f64,

    /// Calendar unit advanced per billing cycle
    pub period: Period,

    /// Cycle multiplier; one cycle = `frequency` units of `period`
    /// (e.g. frequency 3 with Monthly bills quarterly)
    pub frequency: i32,

    /// Date of the first billing occurrence
    pub start_date: NaiveDate,

    /// Spending category
    pub category: Category,

    /// Optional icon hint for the card UI
    #[serde(default)]
    pub icon: Option<String>,

    /// Optional accent color for the card UI
    #[serde(default)]
    pub color: Option<String>,

    /// Frozen subscriptions keep their descriptor but are excluded from
    /// all projections and totals
    pub active: bool,
}

impl Subscription {
    /// Create an active subscription with the required fields
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: f64,
        period: Period,
        frequency: i32,
        start_date: NaiveDate,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            period,
            frequency,
            start_date,
            category,
            icon: None,
            color: None,
            active: true,
        }
    }

    /// Whether this record produces occurrences at all.
    /// Frozen records and records with a non-positive frequency do not.
    pub fn is_projectable(&self) -> bool {
        self.active && self.frequency >= 1
    }

    /// Human-readable cycle length ("monthly", "every 2 weeks", ...)
    pub fn cycle_description(&self) -> String {
        match (self.frequency, self.period) {
            (1, Period::Daily) => "daily".to_string(),
            (1, Period::Weekly) => "weekly".to_string(),
            (1, Period::Monthly) => "monthly".to_string(),
            (1, Period::Yearly) => "yearly".to_string(),
            (n, period) => format!("every {} {}s", n, period.unit_name()),
        }
    }

    /// Entry-boundary checks mirroring the subscription form rules
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.price < 0.0 {
            return Err(ValidationError::NegativePrice(self.price));
        }
        if self.frequency < 1 {
            return Err(ValidationError::NonPositiveFrequency(self.frequency));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_defaults() {
        let sub = Subscription::new(
            1,
            "Netflix",
            15.99,
            Period::Monthly,
            1,
            date(2024, 1, 1),
            Category::Entertainment,
        );

        assert!(sub.active);
        assert!(sub.icon.is_none());
        assert!(sub.color.is_none());
        assert!(sub.is_projectable());
    }

    #[test]
    fn test_projectable_guards() {
        let mut sub = Subscription::new(
            2,
            "Gym",
            45.0,
            Period::Monthly,
            1,
            date(2024, 1, 1),
            Category::Health,
        );

        sub.active = false;
        assert!(!sub.is_projectable());

        sub.active = true;
        sub.frequency = 0;
        assert!(!sub.is_projectable());

        sub.frequency = -3;
        assert!(!sub.is_projectable());
    }

    #[test]
    fn test_cycle_description() {
        let mut sub = Subscription::new(
            3,
            "Spotify",
            9.99,
            Period::Monthly,
            1,
            date(2024, 1, 1),
            Category::Entertainment,
        );
        assert_eq!(sub.cycle_description(), "monthly");

        sub.period = Period::Weekly;
        sub.frequency = 2;
        assert_eq!(sub.cycle_description(), "every 2 weeks");

        sub.period = Period::Monthly;
        sub.frequency = 3;
        assert_eq!(sub.cycle_description(), "every 3 months");
    }

    #[test]
    fn test_validate() {
        let valid = Subscription::new(
            4,
            "iCloud",
            2.99,
            Period::Monthly,
            1,
            date(2024, 1, 1),
            Category::Software,
        );
        assert_eq!(valid.validate(), Ok(()));

        let mut sub = valid.clone();
        sub.name = "  ".to_string();
        assert_eq!(sub.validate(), Err(ValidationError::EmptyName));

        let mut sub = valid.clone();
        sub.price = -1.0;
        assert_eq!(sub.validate(), Err(ValidationError::NegativePrice(-1.0)));

        let mut sub = valid;
        sub.frequency = 0;
        assert_eq!(sub.validate(), Err(ValidationError::NonPositiveFrequency(0)));
    }
}
