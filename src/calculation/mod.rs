//! Calculation logic for the Reimbursement Engine.
//!
//! This module contains weekend detection and month enumeration, the holiday
//! observance rule, the monthly eligible working days calculator, and the
//! per-day status derivation used by report consumers.

mod day_detection;
mod day_status;
mod observed_holiday;
mod period_calculator;

pub use day_detection::{get_days_in_month, is_weekend, weekday_index};
pub use day_status::{DailyEntry, DayStatus, daily_breakdown};
pub use observed_holiday::{apply_observed_rule, apply_observed_rule_with};
pub use period_calculator::calculate_period;
