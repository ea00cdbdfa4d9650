//! Date interpretation for resume date ranges.
//!
//! Fragments are free text ("Senior Engineer, Acme Jan 2020", "2019-03",
//! "Present"). Interpretation resolves them to a year and month, marks them
//! as open-ended, or gives up. It never fails loudly.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use regex::Captures;
use serde::{Deserialize, Serialize};

use super::patterns::{
    DATE_MONTH_NAME, DATE_MONTH_YEAR, DATE_NUMERIC_FULL, DATE_YEAR, DATE_YEAR_MONTH,
};

/// Literal endpoint tokens meaning "ongoing".
pub const OPEN_ENDED_TOKENS: [&str; 3] = ["present", "current", "today"];

/// A calendar point at month granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarPoint {
    pub year: i32,
    pub month: u32,
}

impl CalendarPoint {
    /// Create a point, rejecting months outside 1-12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The current month on the local wall clock.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Signed number of whole months from `self` to `end`.
    pub fn months_until(&self, end: CalendarPoint) -> i64 {
        (end.year as i64 - self.year as i64) * 12 + (end.month as i64 - self.month as i64)
    }
}

impl fmt::Display for CalendarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Outcome of interpreting one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateResolution {
    /// The fragment names a calendar month.
    Resolved(CalendarPoint),
    /// The fragment is one of the "present" tokens.
    OpenEnded,
    /// Nothing date-like was found.
    Unresolved,
}

impl DateResolution {
    pub fn point(&self) -> Option<CalendarPoint> {
        match self {
            DateResolution::Resolved(point) => Some(*point),
            _ => None,
        }
    }
}

/// Interpret a free-text fragment.
pub fn interpret(fragment: &str) -> DateResolution {
    if is_open_ended(fragment) {
        return DateResolution::OpenEnded;
    }

    match parse_fuzzy(fragment) {
        Some(point) => DateResolution::Resolved(point),
        None => DateResolution::Unresolved,
    }
}

/// Whether the trimmed fragment is exactly "present", "current" or "today".
pub fn is_open_ended(fragment: &str) -> bool {
    let token = fragment.trim().to_lowercase();
    OPEN_ENDED_TOKENS.contains(&token.as_str())
}

/// Find the leftmost date mention in a fragment, skipping surrounding words.
///
/// When several patterns match at the same position the more specific one
/// wins (a full date over a year-month over a bare year). A bare year
/// resolves to January.
pub fn parse_fuzzy(fragment: &str) -> Option<CalendarPoint> {
    let candidates = [
        first_valid(DATE_NUMERIC_FULL.captures_iter(fragment), numeric_full),
        first_valid(DATE_YEAR_MONTH.captures_iter(fragment), year_month),
        first_valid(DATE_MONTH_NAME.captures_iter(fragment), month_name),
        first_valid(DATE_MONTH_YEAR.captures_iter(fragment), month_year),
        first_valid(DATE_YEAR.captures_iter(fragment), bare_year),
    ];

    candidates
        .into_iter()
        .enumerate()
        .filter_map(|(rank, found)| found.map(|(start, point)| (start, rank, point)))
        .min_by_key(|(start, rank, _)| (*start, *rank))
        .map(|(_, _, point)| point)
}

fn first_valid<'t>(
    captures: impl Iterator<Item = Captures<'t>>,
    convert: fn(&Captures<'t>) -> Option<CalendarPoint>,
) -> Option<(usize, CalendarPoint)> {
    captures
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            convert(&caps).map(|point| (start, point))
        })
        .next()
}

fn numeric_full(caps: &Captures<'_>) -> Option<CalendarPoint> {
    let first: u32 = caps[1].parse().ok()?;
    let second: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;

    // Month first unless that cannot be a month
    let (month, day) = if first <= 12 { (first, second) } else { (second, first) };
    NaiveDate::from_ymd_opt(year, month, day).map(CalendarPoint::from_date)
}

fn year_month(caps: &Captures<'_>) -> Option<CalendarPoint> {
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;

    if let Some(day) = caps.get(3) {
        let day: u32 = day.as_str().parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day).map(CalendarPoint::from_date);
    }

    CalendarPoint::new(year, month)
}

fn month_year(caps: &Captures<'_>) -> Option<CalendarPoint> {
    let month: u32 = caps[1].parse().ok()?;
    let year: i32 = caps[2].parse().ok()?;
    CalendarPoint::new(year, month)
}

fn month_name(caps: &Captures<'_>) -> Option<CalendarPoint> {
    let month = month_to_number(&caps[1])?;
    let year = parse_year(&caps[3])?;

    if let Some(day) = caps.get(2) {
        let day: u32 = day.as_str().parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)?;
    }

    CalendarPoint::new(year, month)
}

// No month given: January, so the result never depends on today's date.
fn bare_year(caps: &Captures<'_>) -> Option<CalendarPoint> {
    let year: i32 = caps[1].parse().ok()?;
    CalendarPoint::new(year, 1)
}

fn parse_year(s: &str) -> Option<i32> {
    match s.strip_prefix('\'') {
        // Two-digit year: assume 2000s for 00-50, 1900s for 51-99
        Some(short) => {
            let year: i32 = short.parse().ok()?;
            Some(if year <= 50 { 2000 + year } else { 1900 + year })
        }
        None => s.parse().ok(),
    }
}

fn month_to_number(month: &str) -> Option<u32> {
    let month = month.to_lowercase();
    let number = match month.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(number)
}
