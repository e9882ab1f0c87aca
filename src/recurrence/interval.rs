//! Closed date intervals for cost aggregation and calendar rendering

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A closed date range; both bounds are part of the interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    /// Create an interval from explicit bounds
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls within the interval, bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The calendar month containing `date`, `[first day, last day]`
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next_month| next_month.pred_opt())
            .unwrap_or(date);
        Self { start, end }
    }

    /// The calendar year containing `date`, `[Jan 1, Dec 31]`
    pub fn year_of(date: NaiveDate) -> Self {
        let start = date.with_month(1).and_then(|d| d.with_day(1)).unwrap_or(date);
        let end = date.with_month(12).and_then(|d| d.with_day(31)).unwrap_or(date);
        Self { start, end }
    }

    /// A specific calendar month; `None` if `month` is not 1-12
    pub fn calendar_month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::month_of)
    }

    /// A specific calendar year
    pub fn calendar_year(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 1, 1).map(Self::year_of)
    }

    /// The month containing today, per the local clock
    pub fn current_month() -> Self {
        Self::month_of(Local::now().date_naive())
    }

    /// The year containing today, per the local clock
    pub fn current_year() -> Self {
        Self::year_of(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_contains_is_inclusive_on_both_bounds() {
        let interval = DateInterval::new(date(2024, 1, 1), date(2024, 1, 31));

        assert!(interval.contains(date(2024, 1, 1)));
        assert!(interval.contains(date(2024, 1, 31)));
        assert!(interval.contains(date(2024, 1, 15)));
        assert!(!interval.contains(date(2023, 12, 31)));
        assert!(!interval.contains(date(2024, 2, 1)));
    }

    #[test]
    fn test_calendar_month_bounds() {
        let january = DateInterval::calendar_month(2024, 1).unwrap();
        assert_eq!(january.start, date(2024, 1, 1));
        assert_eq!(january.end, date(2024, 1, 31));

        // 2024 is a leap year
        let february = DateInterval::calendar_month(2024, 2).unwrap();
        assert_eq!(february.end, date(2024, 2, 29));

        let february = DateInterval::calendar_month(2025, 2).unwrap();
        assert_eq!(february.end, date(2025, 2, 28));

        let december = DateInterval::calendar_month(2024, 12).unwrap();
        assert_eq!(december.end, date(2024, 12, 31));

        assert!(DateInterval::calendar_month(2024, 13).is_none());
    }

    #[test]
    fn test_month_of_and_year_of() {
        let interval = DateInterval::month_of(date(2024, 2, 14));
        assert_eq!(interval.start, date(2024, 2, 1));
        assert_eq!(interval.end, date(2024, 2, 29));

        let year = DateInterval::year_of(date(2024, 7, 4));
        assert_eq!(year.start, date(2024, 1, 1));
        assert_eq!(year.end, date(2024, 12, 31));
    }
}
