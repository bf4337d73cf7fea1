//! Release year extraction from date-like cells.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::Value;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================

/// `YYYY-MM-DD` / `YYYY/MM/DD`, optionally followed by a time.
static YEAR_FIRST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})[-/.](\d{1,2})[-/.](\d{1,2})(?:[ T].*)?$").unwrap());

/// `MM/DD/YYYY` or `DD-MM-YYYY`, optionally followed by a time.
static YEAR_LAST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[-/.](\d{1,2})[-/.](\d{4})(?:[ T].*)?$").unwrap());

/// `YYYY-MM`.
static YEAR_MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})[-/](\d{1,2})$").unwrap());

/// Bare four-digit year.
static BARE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})$").unwrap());

/// Month-name layouts, tried in order.
const NAMED_MONTH_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d-%b-%Y",
];

/// Numbers in this range are taken as years rather than timestamps.
const NUMERIC_YEARS: std::ops::RangeInclusive<i64> = 1000..=9999;

/// Extract a release year from a cell.
///
/// Returns `None` when the cell holds no recognizable date or the year is 0.
pub fn release_year(value: &Value) -> Option<i32> {
    let year = match value {
        Value::Missing | Value::Bool(_) => None,
        Value::Int(i) => numeric_year(*i as f64),
        Value::Float(f) => numeric_year(*f),
        Value::Text(s) => parse_year(s),
    }?;
    (year != 0).then_some(year)
}

fn numeric_year(value: f64) -> Option<i32> {
    if value.fract() != 0.0 || !NUMERIC_YEARS.contains(&(value as i64)) {
        return None;
    }
    Some(value as i32)
}

/// Parse the year out of date text.
pub fn parse_year(text: &str) -> Option<i32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    // A float rendering of a year, e.g. "2019.0"
    if let Ok(number) = text.parse::<f64>() {
        if let Some(year) = numeric_year(number) {
            return Some(year);
        }
    }

    if let Some(caps) = BARE_YEAR.captures(text) {
        return caps[1].parse().ok();
    }

    if let Some(caps) = YEAR_FIRST.captures(text) {
        let (year, month, day) = (num(&caps[1])?, num(&caps[2])?, num(&caps[3])?);
        return valid_date(year, month, day);
    }

    if let Some(caps) = YEAR_LAST.captures(text) {
        let (first, second, year) = (num(&caps[1])?, num(&caps[2])?, num(&caps[3])?);
        // Month first, then day first
        return valid_date(year, first, second).or_else(|| valid_date(year, second, first));
    }

    if let Some(caps) = YEAR_MONTH.captures(text) {
        return valid_date(num(&caps[1])?, num(&caps[2])?, 1);
    }

    NAMED_MONTH_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .map(|date| date.year())
        .or_else(|| named_month_and_year(text))
}

/// `March 2019` / `Mar 2019`.
fn named_month_and_year(text: &str) -> Option<i32> {
    ["%B %Y", "%b %Y"].iter().find_map(|format| {
        NaiveDate::parse_from_str(&format!("1 {}", text), &format!("%d {}", format))
            .ok()
            .map(|date| date.year())
    })
}

fn num(digits: &str) -> Option<u32> {
    digits.parse().ok()
}

fn valid_date(year: u32, month: u32, day: u32) -> Option<i32> {
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day).map(|date| date.year())
}
