//! Calendar helpers shared by the lifecycle engine and the queries.
//!
//! All arithmetic is on calendar dates ([`NaiveDate`]); "today" is always
//! passed in by the caller so nothing here reads the clock.

use chrono::{Days, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A relative expiration estimate picked instead of an exact date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Estimate {
    TwoDays,
    OneWeek,
    TenDays,
    OneMonth,
}

impl Estimate {
    pub const ALL: &'static [Estimate] = &[
        Estimate::TwoDays,
        Estimate::OneWeek,
        Estimate::TenDays,
        Estimate::OneMonth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Estimate::TwoDays => "2 days",
            Estimate::OneWeek => "1 week",
            Estimate::TenDays => "10 days",
            Estimate::OneMonth => "1 month",
        }
    }

    /// Offset in calendar days. "1 month" is a flat 30 days.
    pub fn days(&self) -> u64 {
        match self {
            Estimate::TwoDays => 2,
            Estimate::OneWeek => 7,
            Estimate::TenDays => 10,
            Estimate::OneMonth => 30,
        }
    }

    pub fn resolve(&self, from: NaiveDate) -> NaiveDate {
        add_days(from, self.days() as i64)
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Estimate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Estimate::ALL
            .iter()
            .find(|e| e.label() == s.trim())
            .copied()
            .ok_or_else(|| format!("unknown estimate '{}'", s))
    }
}

/// Resolves an estimate label to a `YYYY-MM-DD` string.
///
/// Empty or unrecognised labels resolve to an empty string.
pub fn resolve_estimate(label: &str, from: NaiveDate) -> String {
    label
        .parse::<Estimate>()
        .map(|estimate| format_date(estimate.resolve(from)))
        .unwrap_or_default()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Whole calendar days from `today` to `date`; negative once it has passed.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// Adds (or subtracts) calendar days, saturating at chrono's date range.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.unwrap_or(if days >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

/// Same day-of-month `months` later, clamped to the last day of the target
/// month (Aug 31 + 6 months is Feb 28/29).
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Parses interactive free-text date input. Anything that is not a valid
/// `YYYY-MM-DD` calendar date yields `None`.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}
