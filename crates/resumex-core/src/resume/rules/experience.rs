//! Total years of experience from date ranges or stated years.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dates::{interpret, CalendarPoint, DateResolution};
use super::patterns::{DATE_RANGE, STATED_YEARS};

/// Two raw fragments on either side of a range separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeMention<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

/// End of a resolved period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodEnd {
    At(CalendarPoint),
    /// Ongoing as of evaluation time.
    Now,
}

/// A resolved employment period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: CalendarPoint,
    pub end: PeriodEnd,
}

impl Period {
    /// Span in whole months, never negative.
    pub fn months(&self, now: CalendarPoint) -> i64 {
        let end = match self.end {
            PeriodEnd::At(point) => point,
            PeriodEnd::Now => now,
        };
        self.start.months_until(end).max(0)
    }
}

/// How an estimate was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceMethod {
    /// Summed from resolved date ranges.
    DateRanges,
    /// Taken from an "N years" phrase.
    StatedYears,
    /// No evidence found.
    NotFound,
}

/// Experience estimate for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEstimate {
    /// Years of experience, non-negative.
    pub years: f64,
    pub method: ExperienceMethod,
    /// Periods that contributed (empty unless `method` is `DateRanges`).
    pub periods: Vec<Period>,
}

/// Aggregates date ranges in a document into a single experience figure.
///
/// "Present" endpoints resolve against the wall clock unless a fixed
/// evaluation month is set with [`ExperienceAggregator::with_now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExperienceAggregator {
    now: Option<CalendarPoint>,
}

impl ExperienceAggregator {
    pub fn new() -> Self {
        Self { now: None }
    }

    /// Freeze the month used for open-ended periods.
    pub fn with_now(mut self, now: CalendarPoint) -> Self {
        self.now = Some(now);
        self
    }

    /// Month used for open-ended periods.
    pub fn now(&self) -> CalendarPoint {
        self.now.unwrap_or_else(CalendarPoint::today)
    }

    /// Estimate experience for a document.
    ///
    /// Resolved date ranges take priority; the "N years" phrase is only
    /// consulted when no range resolved. The two are never combined.
    pub fn aggregate(&self, text: &str) -> ExperienceEstimate {
        let mentions = find_mentions(text);
        let periods: Vec<Period> = mentions.iter().filter_map(resolve_mention).collect();

        debug!(
            "Found {} date range mentions, {} resolved",
            mentions.len(),
            periods.len()
        );

        if !periods.is_empty() {
            let months = total_months(&periods, self.now());
            return ExperienceEstimate {
                years: months_to_years(months),
                method: ExperienceMethod::DateRanges,
                periods,
            };
        }

        match stated_years(text) {
            Some(years) => ExperienceEstimate {
                years,
                method: ExperienceMethod::StatedYears,
                periods: Vec::new(),
            },
            None => ExperienceEstimate {
                years: 0.0,
                method: ExperienceMethod::NotFound,
                periods: Vec::new(),
            },
        }
    }
}

/// Every range mention in the text, scanning left to right.
pub fn find_mentions(text: &str) -> Vec<DateRangeMention<'_>> {
    DATE_RANGE
        .captures_iter(text)
        .filter_map(|caps| {
            Some(DateRangeMention {
                start: caps.get(1)?.as_str(),
                end: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

/// Resolve a mention into a period.
///
/// The start must name a calendar month. The end may name a month or be an
/// open-ended token; anything else discards the mention.
pub fn resolve_mention(mention: &DateRangeMention<'_>) -> Option<Period> {
    let start = interpret(mention.start).point()?;

    let end = match interpret(mention.end) {
        DateResolution::Resolved(point) => PeriodEnd::At(point),
        DateResolution::OpenEnded => PeriodEnd::Now,
        DateResolution::Unresolved => return None,
    };

    Some(Period { start, end })
}

/// Sum of period spans, each clamped at zero.
pub fn total_months(periods: &[Period], now: CalendarPoint) -> i64 {
    periods.iter().map(|period| period.months(now)).sum()
}

/// Months to years, rounded to one decimal place with ties to even.
pub fn months_to_years(months: i64) -> f64 {
    let months = months.max(0);
    let scaled = months * 10;
    let mut tenths = scaled / 12;
    let remainder = scaled % 12;

    if remainder * 2 > 12 || (remainder * 2 == 12 && tenths % 2 == 1) {
        tenths += 1;
    }

    tenths as f64 / 10.0
}

/// First "N years" figure in the text.
pub fn stated_years(text: &str) -> Option<f64> {
    let lowered = text.to_lowercase();
    STATED_YEARS
        .captures(&lowered)
        .and_then(|caps| caps[1].parse().ok())
}
