//! Calendar-month keys and the per-month totals derived from transactions.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Totally ordered calendar month encoded as `year * 12 + zero_based_month`.
///
/// Equal keys always denote the same calendar month, and ordering keys
/// orders months in time, across year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthKey(i32);

impl MonthKey {
    pub fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Builds a key from a year and a 1-based month. Returns `None` when the
    /// month is outside `1..=12`.
    pub fn from_ymd(year: i32, month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self(year * 12 + month as i32 - 1))
    }

    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self(date.year() * 12 + date.month0() as i32)
    }

    pub fn raw(self) -> i32 {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.div_euclid(12)
    }

    /// Zero-based month index, `0` for January.
    pub fn month0(self) -> u32 {
        self.0.rem_euclid(12) as u32
    }

    /// One-based month number, `1` for January.
    pub fn month(self) -> u32 {
        self.month0() + 1
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn previous(self) -> Self {
        Self(self.0 - 1)
    }

    /// First calendar day of the month, if chrono can represent the year.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), 1)
    }

    /// Short chart label such as `Jan 2025`.
    pub fn label(self) -> String {
        match self.first_day() {
            Some(date) => date.format("%b %Y").to_string(),
            None => format!("{:02}/{}", self.month(), self.year()),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Sum of every transaction amount that fell within one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub month_key: MonthKey,
    pub total: f64,
}

impl MonthlyTotal {
    pub fn new(month_key: MonthKey, total: f64) -> Self {
        Self { month_key, total }
    }
}

/// Projects a series of monthly totals onto its amounts, keeping order.
pub fn totals_of(series: &[MonthlyTotal]) -> Vec<f64> {
    series.iter().map(|entry| entry.total).collect()
}
