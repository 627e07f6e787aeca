use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A supplier and the closed date interval `[start_date, end_date]` every
/// scorecard variable is evaluated over.
///
/// `start_date <= end_date` is assumed but not enforced; day-count
/// variables go negative for inverted periods.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScorecardPeriod {
    pub supplier: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ScorecardPeriod {
    pub fn new(supplier: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            supplier: supplier.into(),
            start_date,
            end_date,
        }
    }

    /// Closed-interval membership test.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Signed number of days from `start_date` to `end_date`.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn is_inverted(&self) -> bool {
        self.start_date > self.end_date
    }
}
