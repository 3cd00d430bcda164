//! Monthly eligible working days calculation.
//!
//! This module provides [`calculate_period`], which partitions every day of a
//! month into weekend, public holiday, personal leave or working day and
//! derives the counts and reimbursement total.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{CalculationResult, Holiday, HolidayMap, Period};

use super::{apply_observed_rule_with, is_weekend};

/// Calculates the eligible working days report for one month.
///
/// Each day of the month is classified by strict precedence, first match wins:
///
/// 1. Weekend (Saturday or Sunday)
/// 2. Public holiday (original or observed, after applying the observance rule)
/// 3. Personal leave
/// 4. Working day
///
/// A holiday on a weekend is still listed and counted as a public holiday, but
/// the day only leaves the working-day count once, as a weekend. Leave dates in
/// the month that land on a weekend or holiday are reported as ignored; leave
/// dates outside the month are dropped silently. An unknown grade resolves to a
/// zero rate.
///
/// `holidays` should span enough of the neighbouring months for substitutes
/// near a month boundary to resolve; that is left to the caller.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod)
/// if `year`/`month` is not a representable calendar month.
///
/// # Example
///
/// ```
/// use reimbursement_engine::calculation::calculate_period;
/// use reimbursement_engine::config::EngineConfig;
/// use reimbursement_engine::models::HolidayMap;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeSet;
///
/// let mut holidays = HolidayMap::new();
/// holidays.insert(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(), "CNY Day 1".to_string());
/// holidays.insert(NaiveDate::from_ymd_opt(2024, 2, 11).unwrap(), "CNY Day 2".to_string());
///
/// let result = calculate_period(2024, 2, "JG6", &holidays, &BTreeSet::new(), &EngineConfig::default())
///     .unwrap();
///
/// assert_eq!(result.total_days_in_month(), 29);
/// assert_eq!(result.public_holidays_count(), 3);
/// assert_eq!(result.working_days_count(), 20);
/// assert_eq!(result.total_reimbursement(), Decimal::from(2000));
/// ```
pub fn calculate_period(
    year: i32,
    month: u32,
    grade: &str,
    holidays: &HolidayMap,
    leave_dates: &BTreeSet<NaiveDate>,
    config: &EngineConfig,
) -> EngineResult<CalculationResult> {
    let period = Period::new(year, month)?;
    let all_days = period.days();

    let month_holidays: Vec<Holiday> = apply_observed_rule_with(holidays, config.observance())
        .into_values()
        .filter(|holiday| period.contains(holiday.date))
        .collect();
    let month_holiday_dates: BTreeSet<NaiveDate> =
        month_holidays.iter().map(|holiday| holiday.date).collect();

    let mut working_days: Vec<NaiveDate> = Vec::new();
    let mut applied_leave: Vec<NaiveDate> = Vec::new();
    let mut weekend_days_count: u32 = 0;

    for &day in &all_days {
        if is_weekend(day) {
            weekend_days_count += 1;
        } else if month_holiday_dates.contains(&day) {
            continue;
        } else if leave_dates.contains(&day) {
            applied_leave.push(day);
        } else {
            working_days.push(day);
        }
    }

    let ignored_leave_dates: Vec<NaiveDate> = leave_dates
        .range(period.first_day()..=period.last_day())
        .filter(|day| applied_leave.binary_search(day).is_err())
        .copied()
        .collect();

    let rate = config.grade_rates().rate_for(grade);
    let working_days_count = working_days.len() as u32;
    let total_reimbursement = rate * Decimal::from(working_days_count);

    debug!(
        period = %period.label(),
        grade,
        working_days = working_days_count,
        weekend_days = weekend_days_count,
        public_holidays = month_holidays.len(),
        applied_leave = applied_leave.len(),
        ignored_leave = ignored_leave_dates.len(),
        total = %total_reimbursement,
        "Calculated period"
    );

    Ok(CalculationResult {
        grade: grade.to_string(),
        rate,
        year: period.year(),
        month: period.month(),
        total_days_in_month: all_days.len() as u32,
        working_days_count,
        weekend_days_count,
        public_holidays_count: month_holidays.len() as u32,
        personal_leave_count: applied_leave.len() as u32,
        holidays: month_holidays,
        working_days,
        leave_days: applied_leave,
        ignored_leave_dates,
        total_reimbursement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GradeRates, ObservancePolicy};
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holidays(entries: &[(NaiveDate, &str)]) -> HolidayMap {
        entries
            .iter()
            .map(|(d, name)| (*d, name.to_string()))
            .collect()
    }

    fn leave(dates: &[NaiveDate]) -> BTreeSet<NaiveDate> {
        dates.iter().copied().collect()
    }

    fn calculate(
        year: i32,
        month: u32,
        grade: &str,
        holidays: &HolidayMap,
        leave_dates: &BTreeSet<NaiveDate>,
    ) -> CalculationResult {
        calculate_period(
            year,
            month,
            grade,
            holidays,
            leave_dates,
            &EngineConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_golden_february_2024_leap_year() {
        let holidays = holidays(&[
            (date(2024, 2, 10), "CNY Day 1"),
            (date(2024, 2, 11), "CNY Day 2"),
        ]);
        let result = calculate(2024, 2, "JG6", &holidays, &BTreeSet::new());

        assert_eq!(result.total_days_in_month(), 29);
        assert_eq!(result.public_holidays_count(), 3);
        assert_eq!(result.weekend_days_count(), 8);
        assert_eq!(result.working_days_count(), 20);
        assert_eq!(result.total_reimbursement(), Decimal::from(2000));

        for d in [10, 11, 12] {
            assert!(!result.working_days().contains(&date(2024, 2, d)));
        }
    }

    #[test]
    fn test_leave_deduction_and_ignored_weekend_leave() {
        let leave_dates = leave(&[date(2026, 3, 4), date(2026, 3, 7)]);
        let result = calculate(2026, 3, "JG6", &HolidayMap::new(), &leave_dates);

        assert_eq!(result.total_days_in_month(), 31);
        assert_eq!(result.weekend_days_count(), 9);
        assert_eq!(result.working_days_count(), 21);
        assert_eq!(result.personal_leave_count(), 1);
        assert_eq!(result.leave_days(), &[date(2026, 3, 4)]);
        assert_eq!(result.ignored_leave_dates(), &[date(2026, 3, 7)]);
        assert_eq!(result.ignored_leave_count(), 1);
    }

    #[test]
    fn test_leave_on_holiday_is_ignored() {
        // 2026-05-01 is a Friday
        let holidays = holidays(&[(date(2026, 5, 1), "Labour Day")]);
        let leave_dates = leave(&[date(2026, 5, 1)]);
        let result = calculate(2026, 5, "JG6", &holidays, &leave_dates);

        assert_eq!(result.personal_leave_count(), 0);
        assert_eq!(result.ignored_leave_dates(), &[date(2026, 5, 1)]);
    }

    #[test]
    fn test_leave_on_observed_holiday_is_ignored() {
        let holidays = holidays(&[(date(2026, 2, 1), "Holiday A")]);
        let leave_dates = leave(&[date(2026, 2, 2)]);
        let result = calculate(2026, 2, "JG6", &holidays, &leave_dates);

        assert!(result.leave_days().is_empty());
        assert_eq!(result.ignored_leave_dates(), &[date(2026, 2, 2)]);
    }

    #[test]
    fn test_leave_outside_month_is_neither_applied_nor_ignored() {
        let leave_dates = leave(&[date(2026, 2, 27), date(2026, 4, 1)]);
        let result = calculate(2026, 3, "JG6", &HolidayMap::new(), &leave_dates);

        assert!(result.leave_days().is_empty());
        assert!(result.ignored_leave_dates().is_empty());
        assert_eq!(result.working_days_count(), 22);
    }

    #[test]
    fn test_unknown_grade_gives_zero_reimbursement() {
        let result = calculate(2026, 3, "JG99", &HolidayMap::new(), &BTreeSet::new());

        assert_eq!(result.grade(), "JG99");
        assert_eq!(result.rate(), Decimal::ZERO);
        assert_eq!(result.working_days_count(), 22);
        assert_eq!(result.total_reimbursement(), Decimal::ZERO);
    }

    #[test]
    fn test_holidays_outside_month_are_not_listed() {
        let holidays = holidays(&[
            (date(2026, 1, 1), "New Year's Day"),
            (date(2026, 3, 31), "Some Holiday"),
        ]);
        let result = calculate(2026, 3, "JG6", &holidays, &BTreeSet::new());

        assert_eq!(result.public_holidays_count(), 1);
        assert_eq!(result.holidays()[0].date, date(2026, 3, 31));
    }

    #[test]
    fn test_observed_holiday_spills_into_next_month() {
        // 2026-05-31 is a Sunday; its substitute is Monday 2026-06-01.
        let holidays = holidays(&[(date(2026, 5, 31), "Harvest Festival")]);

        let may = calculate(2026, 5, "JG6", &holidays, &BTreeSet::new());
        assert_eq!(may.public_holidays_count(), 1);

        let june = calculate(2026, 6, "JG6", &holidays, &BTreeSet::new());
        assert_eq!(june.public_holidays_count(), 1);
        assert!(june.holidays()[0].is_observed);
        assert!(!june.working_days().contains(&date(2026, 6, 1)));
    }

    #[test]
    fn test_holidays_listed_in_date_order() {
        let holidays = holidays(&[
            (date(2026, 2, 2), "Holiday B"),
            (date(2026, 2, 1), "Holiday A"),
            (date(2026, 2, 17), "Holiday C"),
        ]);
        let result = calculate(2026, 2, "JG6", &holidays, &BTreeSet::new());

        let dates: Vec<NaiveDate> = result.holidays().iter().map(|h| h.date).collect();
        assert_eq!(
            dates,
            vec![date(2026, 2, 1), date(2026, 2, 2), date(2026, 2, 3), date(2026, 2, 17)]
        );
    }

    #[test]
    fn test_total_is_rate_times_working_days() {
        let holidays = holidays(&[
            (date(2026, 2, 1), "Holiday A"),
            (date(2026, 2, 2), "Holiday B"),
            (date(2026, 2, 14), "Saturday Holiday"),
        ]);
        let leave_dates = leave(&[date(2026, 2, 3), date(2026, 2, 4), date(2026, 2, 15)]);
        let result = calculate(2026, 2, "JG7", &holidays, &leave_dates);

        let weekday_holidays = result
            .holidays()
            .iter()
            .filter(|h| !is_weekend(h.date))
            .count() as u32;

        assert_eq!(
            result.total_days_in_month(),
            result.working_days_count()
                + result.weekend_days_count()
                + weekday_holidays
                + result.personal_leave_count()
        );
        // 02-03 is taken by the observed holiday, so only 02-04 is applied.
        assert_eq!(result.leave_days(), &[date(2026, 2, 4)]);
        assert_eq!(
            result.ignored_leave_dates(),
            &[date(2026, 2, 3), date(2026, 2, 15)]
        );
    }

    #[test]
    fn test_invalid_month_is_error() {
        let result = calculate_period(
            2026,
            13,
            "JG6",
            &HolidayMap::new(),
            &BTreeSet::new(),
            &EngineConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_result_unaffected_by_later_input_changes() {
        let mut holidays = holidays(&[(date(2026, 5, 1), "Labour Day")]);
        let mut leave_dates = leave(&[date(2026, 5, 4)]);
        let result = calculate(2026, 5, "JG6", &holidays, &leave_dates);

        holidays.insert(date(2026, 5, 5), "Late Addition".to_string());
        leave_dates.insert(date(2026, 5, 6));

        assert_eq!(result.public_holidays_count(), 1);
        assert_eq!(result.leave_days(), &[date(2026, 5, 4)]);
    }

    #[test]
    fn test_injected_rates_and_policy_are_used() {
        let config = EngineConfig::new(
            GradeRates::new([("JG6", Decimal::new(12550, 2))]),
            ObservancePolicy {
                substitute_weekdays: vec![Weekday::Sat, Weekday::Sun],
            },
        );
        let holidays = holidays(&[(date(2024, 2, 10), "CNY Day 1")]);
        let result =
            calculate_period(2024, 2, "JG6", &holidays, &BTreeSet::new(), &config).unwrap();

        // Saturday substituted onto Sunday 02-11 (free), which is a weekend anyway.
        assert_eq!(result.public_holidays_count(), 2);
        assert_eq!(result.working_days_count(), 21);
        assert_eq!(result.total_reimbursement(), Decimal::new(263550, 2));
    }
}
