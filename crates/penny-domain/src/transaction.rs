//! Domain model for logged expenses.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;
use crate::month::MonthKey;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub amount: f64,
    #[serde(default)]
    pub place: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub occurred_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurringPeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due: Option<NaiveDate>,
}

impl Transaction {
    pub fn new(amount: f64, occurred_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            place: String::new(),
            category: None,
            occurred_at,
            recurrence: None,
            next_due: None,
        }
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = place.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_recurrence(mut self, period: RecurringPeriod, next_due: NaiveDate) -> Self {
        self.recurrence = Some(period);
        self.next_due = Some(next_due);
        self
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(&self.occurred_at)
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Timestamped for Transaction {
    fn occurred_at(&self) -> NaiveDateTime {
        self.occurred_at
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates how often a recurring expense repeats.
pub enum RecurringPeriod {
    Monthly,
    Yearly,
}

impl fmt::Display for RecurringPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecurringPeriod::Monthly => "Monthly",
            RecurringPeriod::Yearly => "Yearly",
        };
        f.write_str(label)
    }
}
