//! Day detection and month enumeration.
//!
//! This module provides utilities for classifying a date as a weekend day and
//! for enumerating every date of a calendar month.

use chrono::{Datelike, NaiveDate};

use crate::error::EngineResult;
use crate::models::Period;

/// Returns the weekday index of `date` in a Monday-first scheme.
///
/// Monday is 0 and Sunday is 6.
///
/// # Example
///
/// ```
/// use reimbursement_engine::calculation::weekday_index;
/// use chrono::NaiveDate;
///
/// // 2026-02-01 is a Sunday
/// assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()), 6);
/// // 2026-02-02 is a Monday
/// assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()), 0);
/// ```
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Returns true if `date` is a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use reimbursement_engine::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 2, 7).unwrap()));  // Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));  // Sunday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2026, 2, 2).unwrap())); // Monday
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    weekday_index(date) >= 5
}

/// Returns every date of `month` in `year`, in ascending order.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod)
/// if the year/month is not a representable calendar month.
///
/// # Example
///
/// ```
/// use reimbursement_engine::calculation::get_days_in_month;
///
/// assert_eq!(get_days_in_month(2024, 2).unwrap().len(), 29);
/// assert_eq!(get_days_in_month(2023, 2).unwrap().len(), 28);
/// assert!(get_days_in_month(2023, 13).is_err());
/// ```
pub fn get_days_in_month(year: i32, month: u32) -> EngineResult<Vec<NaiveDate>> {
    Ok(Period::new(year, month)?.days())
}
