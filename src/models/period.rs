//! Calendar period model.
//!
//! This module contains the [`Period`] type identifying the target month of a
//! calculation.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// A validated calendar month.
///
/// Construction is the only place a bad year/month can fail; every other
/// operation on a `Period` is total.
///
/// # Example
///
/// ```
/// use reimbursement_engine::models::Period;
/// use chrono::NaiveDate;
///
/// let period = Period::new(2024, 2).unwrap();
///
/// assert_eq!(period.days_in_month(), 29);
/// assert_eq!(period.label(), "February 2024");
/// assert!(period.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
/// assert!(Period::new(2024, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl Period {
    /// Creates a period for `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] if `month` is outside `1..=12` or
    /// the year is outside chrono's representable range.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidPeriod { year, month };

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let last_day = (28..=31)
            .rev()
            .find_map(|day| NaiveDate::from_ymd_opt(year, month, day))
            .ok_or_else(invalid)?;

        Ok(Self {
            first_day,
            last_day,
        })
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The calendar month (1-12).
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Number of calendar days in the month.
    pub fn days_in_month(&self) -> u32 {
        self.last_day.day()
    }

    /// Every date of the month in ascending order.
    pub fn days(&self) -> Vec<NaiveDate> {
        let last_day = self.last_day;
        self.first_day
            .iter_days()
            .take_while(|day| *day <= last_day)
            .collect()
    }

    /// Checks if a given date falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }

    /// Human-readable "month year" label, e.g. "March 2026".
    pub fn label(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }
}
