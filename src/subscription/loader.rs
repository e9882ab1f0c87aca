//! Load subscription lists from CSV exports

use super::{Category, Period, Subscription};
use chrono::NaiveDate;
use csv::Reader;
use std::path::Path;
use thiserror::Error;

/// Default export file consumed by the report binaries
pub const DEFAULT_SUBSCRIPTIONS_PATH: &str = "subscriptions.csv";

/// Errors raised while reading a subscription export
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed CSV record")]
    Csv(#[from] csv::Error),
    #[error("record {record}: {message}")]
    Field { record: usize, message: String },
}

/// Raw CSV row matching the export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Id")]
    id: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Period")]
    period: String,
    #[serde(rename = "Frequency")]
    frequency: i32,
    #[serde(rename = "StartDate")]
    start_date: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Icon")]
    icon: Option<String>,
    #[serde(rename = "Color")]
    color: Option<String>,
    #[serde(rename = "Active")]
    active: bool,
}

impl CsvRow {
    fn to_subscription(self, record: usize) -> Result<Subscription, LoadError> {
        let field = |message: String| LoadError::Field { record, message };

        let period = match self.period.as_str() {
            "DAILY" => Period::Daily,
            "WEEKLY" => Period::Weekly,
            "MONTHLY" => Period::Monthly,
            "YEARLY" => Period::Yearly,
            other => return Err(field(format!("unknown Period: {}", other))),
        };

        let category = match self.category.as_str() {
            "ENTERTAINMENT" => Category::Entertainment,
            "SOFTWARE" => Category::Software,
            "HEALTH" => Category::Health,
            "FINANCE" => Category::Finance,
            "TRANSPORT" => Category::Transport,
            "EDUCATION" => Category::Education,
            "UTILITIES" => Category::Utilities,
            "SHOPPING" => Category::Shopping,
            "OTHER" => Category::Other,
            other => return Err(field(format!("unknown Category: {}", other))),
        };

        let start_date = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d")
            .map_err(|e| field(format!("bad StartDate {:?}: {}", self.start_date, e)))?;

        Ok(Subscription {
            id: self.id,
            name: self.name,
            price: self.price,
            period,
            frequency: self.frequency,
            start_date,
            category,
            icon: self.icon,
            color: self.color,
            active: self.active,
        })
    }
}

/// Load all subscriptions from a CSV file
pub fn load_subscriptions<P: AsRef<Path>>(path: P) -> Result<Vec<Subscription>, LoadError> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load subscriptions from any reader (e.g. string buffer, network stream)
pub fn load_subscriptions_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<Subscription>, LoadError> {
    collect_rows(Reader::from_reader(reader))
}

/// Load subscriptions from the default export location
pub fn load_default_subscriptions() -> Result<Vec<Subscription>, LoadError> {
    load_subscriptions(DEFAULT_SUBSCRIPTIONS_PATH)
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Subscription>, LoadError> {
    let mut subscriptions = Vec::new();

    for (i, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        subscriptions.push(row.to_subscription(i + 1)?);
    }

    log::debug!("loaded {} subscription records", subscriptions.len());
    Ok(subscriptions)
}
