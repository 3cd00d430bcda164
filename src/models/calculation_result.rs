//! Calculation result model for the Reimbursement Engine.
//!
//! This module contains the [`CalculationResult`] type that captures every
//! output of a monthly eligible-working-days calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Holiday;

/// The immutable summary of one year + month + grade + holidays + leave evaluation.
///
/// Built once by [`calculate_period`](crate::calculation::calculate_period) and
/// only read afterwards. The result owns copies of every date list, so later
/// changes to the caller's holiday or leave inputs cannot affect it.
///
/// # Example
///
/// ```
/// use reimbursement_engine::calculation::calculate_period;
/// use reimbursement_engine::config::EngineConfig;
/// use reimbursement_engine::models::HolidayMap;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeSet;
///
/// let result = calculate_period(
///     2026,
///     3,
///     "JG6",
///     &HolidayMap::new(),
///     &BTreeSet::new(),
///     &EngineConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.period_label(), "March 2026");
/// assert_eq!(result.working_days_count(), 22);
/// assert_eq!(result.total_reimbursement(), Decimal::from(2200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub(crate) grade: String,
    pub(crate) rate: Decimal,
    pub(crate) year: i32,
    pub(crate) month: u32,

    pub(crate) total_days_in_month: u32,
    pub(crate) working_days_count: u32,
    pub(crate) weekend_days_count: u32,
    pub(crate) public_holidays_count: u32,
    pub(crate) personal_leave_count: u32,

    pub(crate) holidays: Vec<Holiday>,
    pub(crate) working_days: Vec<NaiveDate>,
    pub(crate) leave_days: Vec<NaiveDate>,
    pub(crate) ignored_leave_dates: Vec<NaiveDate>,

    pub(crate) total_reimbursement: Decimal,
}

impl CalculationResult {
    /// The grade code the calculation was run for.
    pub fn grade(&self) -> &str {
        &self.grade
    }

    /// The daily rate resolved for the grade (zero for an unknown grade).
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// The calendar year of the period.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month of the period (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Total calendar days in the month.
    pub fn total_days_in_month(&self) -> u32 {
        self.total_days_in_month
    }

    /// Number of eligible working days.
    pub fn working_days_count(&self) -> u32 {
        self.working_days_count
    }

    /// Number of Saturdays and Sundays in the month.
    pub fn weekend_days_count(&self) -> u32 {
        self.weekend_days_count
    }

    /// Number of holidays (original and observed) dated in the month,
    /// including any that fall on a weekend.
    pub fn public_holidays_count(&self) -> u32 {
        self.public_holidays_count
    }

    /// Number of leave days that reduced the working-day count.
    pub fn personal_leave_count(&self) -> u32 {
        self.personal_leave_count
    }

    /// Holidays active in the month, sorted by date.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Eligible working days, sorted by date.
    pub fn working_days(&self) -> &[NaiveDate] {
        &self.working_days
    }

    /// Applied leave dates, sorted.
    pub fn leave_days(&self) -> &[NaiveDate] {
        &self.leave_days
    }

    /// In-month leave dates that were requested but not applied, sorted.
    pub fn ignored_leave_dates(&self) -> &[NaiveDate] {
        &self.ignored_leave_dates
    }

    /// Rate multiplied by the working-day count.
    pub fn total_reimbursement(&self) -> Decimal {
        self.total_reimbursement
    }

    /// Human-readable "month year" label, e.g. "February 2024".
    pub fn period_label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|first| first.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }

    /// Number of requested in-month leave dates that were not applied.
    pub fn ignored_leave_count(&self) -> usize {
        self.ignored_leave_dates.len()
    }
}
