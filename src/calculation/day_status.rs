//! Per-day status derivation for report consumers.
//!
//! Exporters and the HTTP API show one row per calendar day. The status of each
//! row is re-derived from a [`CalculationResult`] using the same precedence as
//! the calculator, so the rows always agree with the counts.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::CalculationResult;

use super::{get_days_in_month, is_weekend};

/// Display status of a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Saturday or Sunday.
    Weekend,
    /// An original or observed public holiday on a weekday.
    PublicHoliday,
    /// Applied personal leave.
    PersonalLeave,
    /// An eligible working day.
    WorkingDay,
    /// A day in none of the result's lists.
    Excluded,
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Weekend => write!(f, "Weekend"),
            DayStatus::PublicHoliday => write!(f, "Public Holiday"),
            DayStatus::PersonalLeave => write!(f, "Personal Leave"),
            DayStatus::WorkingDay => write!(f, "Working Day"),
            DayStatus::Excluded => write!(f, "Excluded"),
        }
    }
}

/// One row of a daily breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// The calendar date.
    pub date: NaiveDate,
    /// English weekday name (e.g., "Monday").
    pub day_name: String,
    /// The derived status.
    pub status: DayStatus,
    /// Holiday label for public holidays, empty otherwise.
    pub note: String,
}

/// Re-derives the status of every day in the result's month.
///
/// Precedence is weekend, then public holiday, then personal leave, then
/// working day. A weekend holiday therefore shows as `Weekend`, matching the
/// calculator's counts. A result whose month cannot be enumerated yields an
/// empty breakdown.
///
/// # Example
///
/// ```
/// use reimbursement_engine::calculation::{calculate_period, daily_breakdown, DayStatus};
/// use reimbursement_engine::config::EngineConfig;
/// use reimbursement_engine::models::HolidayMap;
/// use chrono::NaiveDate;
/// use std::collections::BTreeSet;
///
/// let mut holidays = HolidayMap::new();
/// holidays.insert(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(), "Holiday A".to_string());
///
/// let result = calculate_period(2026, 2, "JG6", &holidays, &BTreeSet::new(), &EngineConfig::default())
///     .unwrap();
/// let days = daily_breakdown(&result);
///
/// assert_eq!(days.len(), 28);
/// assert_eq!(days[0].status, DayStatus::Weekend);
/// assert_eq!(days[1].status, DayStatus::PublicHoliday);
/// assert_eq!(days[1].note, "Holiday A (Observed)");
/// assert_eq!(days[2].status, DayStatus::WorkingDay);
/// ```
pub fn daily_breakdown(result: &CalculationResult) -> Vec<DailyEntry> {
    let Ok(days) = get_days_in_month(result.year(), result.month()) else {
        return Vec::new();
    };

    let holiday_names: BTreeMap<NaiveDate, &str> = result
        .holidays()
        .iter()
        .map(|holiday| (holiday.date, holiday.name.as_str()))
        .collect();
    let leave: BTreeSet<NaiveDate> = result.leave_days().iter().copied().collect();
    let working: BTreeSet<NaiveDate> = result.working_days().iter().copied().collect();

    days.into_iter()
        .map(|date| {
            let (status, note) = if is_weekend(date) {
                (DayStatus::Weekend, String::new())
            } else if let Some(name) = holiday_names.get(&date) {
                (DayStatus::PublicHoliday, name.to_string())
            } else if leave.contains(&date) {
                (DayStatus::PersonalLeave, String::new())
            } else if working.contains(&date) {
                (DayStatus::WorkingDay, String::new())
            } else {
                (DayStatus::Excluded, String::new())
            };

            DailyEntry {
                date,
                day_name: date.format("%A").to_string(),
                status,
                note,
            }
        })
        .collect()
}
