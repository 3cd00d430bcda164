//! Holiday sources feeding the calculator.
//!
//! The calculator only needs a fully materialized [`HolidayMap`]. This module
//! defines the [`HolidayProvider`] seam that supplies one per year, an
//! in-memory implementation for manually entered holidays, and a local JSON
//! cache. Nothing here reaches the network.

mod cache;

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::calculation::calculate_period;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{CalculationResult, HolidayMap, HolidaySource, Period};

pub use cache::{CACHE_VERSION, CachedHolidays, FetchedAt, HolidayCache};

/// Supplies raw public holidays for a calendar year.
pub trait HolidayProvider {
    /// Returns every known holiday dated in `year`.
    fn holidays_for_year(&self, year: i32) -> EngineResult<HolidayMap>;

    /// Provenance recorded on the holidays this provider supplies.
    fn source(&self) -> HolidaySource {
        HolidaySource::Fetched
    }
}

/// Holidays entered by hand.
///
/// # Example
///
/// ```
/// use reimbursement_engine::holidays::{HolidayProvider, ManualHolidays};
/// use chrono::NaiveDate;
///
/// let mut manual = ManualHolidays::new();
/// manual.insert(NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(), "Merdeka Day");
/// manual.insert(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(), "New Year's Day");
///
/// assert_eq!(manual.holidays_for_year(2026).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualHolidays {
    holidays: HolidayMap,
}

impl ManualHolidays {
    /// Creates an empty set of manual holidays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the holiday on `date`.
    pub fn insert(&mut self, date: NaiveDate, name: impl Into<String>) {
        self.holidays.insert(date, name.into());
    }
}

impl From<HolidayMap> for ManualHolidays {
    fn from(holidays: HolidayMap) -> Self {
        Self { holidays }
    }
}

impl HolidayProvider for ManualHolidays {
    fn holidays_for_year(&self, year: i32) -> EngineResult<HolidayMap> {
        Ok(self
            .holidays
            .iter()
            .filter(|(date, _)| date.year() == year)
            .map(|(date, name)| (*date, name.clone()))
            .collect())
    }

    fn source(&self) -> HolidaySource {
        HolidaySource::Manual
    }
}

/// Collects the holidays needed to calculate `month` of `year`.
///
/// Observed substitutes only move forward, but they can cross a year boundary:
/// January needs the previous year's late-December holidays and December needs
/// the next year's early-January ones to resolve chains. The target year must
/// load; an adjacent year that fails to load is skipped.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod)
/// for a bad year/month, or whatever the provider returns for the target year.
pub fn holidays_for_month<P>(provider: &P, year: i32, month: u32) -> EngineResult<HolidayMap>
where
    P: HolidayProvider + ?Sized,
{
    let period = Period::new(year, month)?;
    let mut holidays = provider.holidays_for_year(period.year())?;

    let adjacent = match period.month() {
        1 => year.checked_sub(1),
        12 => year.checked_add(1),
        _ => None,
    };

    if let Some(adjacent_year) = adjacent {
        match provider.holidays_for_year(adjacent_year) {
            Ok(extra) => holidays.extend(extra),
            Err(err) => debug!(
                year = adjacent_year,
                error = %err,
                "Adjacent year holidays unavailable"
            ),
        }
    }

    Ok(holidays)
}

/// Calculates `month` of `year` with holidays drawn from `provider`.
///
/// Holidays are collected with [`holidays_for_month`] and passed to
/// [`calculate_period`]. Holidays taken from the provider carry its
/// [`HolidayProvider::source`] in the result; observed substitutes stay
/// tagged as [`HolidaySource::Rule`].
pub fn calculate_month<P>(
    provider: &P,
    year: i32,
    month: u32,
    grade: &str,
    leave_dates: &BTreeSet<NaiveDate>,
    config: &EngineConfig,
) -> EngineResult<CalculationResult>
where
    P: HolidayProvider + ?Sized,
{
    let holidays = holidays_for_month(provider, year, month)?;
    let mut result = calculate_period(year, month, grade, &holidays, leave_dates, config)?;

    let source = provider.source();
    result.holidays = std::mem::take(&mut result.holidays)
        .into_iter()
        .map(|holiday| {
            if holiday.is_observed {
                holiday
            } else {
                holiday.with_source(source)
            }
        })
        .collect();

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn manual() -> ManualHolidays {
        let mut manual = ManualHolidays::new();
        manual.insert(date(2028, 12, 31), "Year End");
        manual.insert(date(2029, 1, 1), "New Year's Day");
        manual.insert(date(2029, 6, 1), "Mid Year");
        manual.insert(date(2030, 1, 1), "New Year's Day");
        manual
    }

    struct OnlyYear(i32);

    impl HolidayProvider for OnlyYear {
        fn holidays_for_year(&self, year: i32) -> EngineResult<HolidayMap> {
            if year == self.0 {
                Ok(HolidayMap::new())
            } else {
                Err(EngineError::CacheNotFound {
                    path: format!("holiday_cache_{}.json", year),
                })
            }
        }
    }

    #[test]
    fn test_manual_filters_by_year() {
        let holidays = manual().holidays_for_year(2029).unwrap();
        assert_eq!(holidays.len(), 2);
        assert!(holidays.keys().all(|d| d.year() == 2029));
    }

    #[test]
    fn test_mid_year_month_uses_target_year_only() {
        let holidays = holidays_for_month(&manual(), 2029, 6).unwrap();
        assert_eq!(holidays.len(), 2);
    }

    #[test]
    fn test_january_includes_previous_year() {
        let holidays = holidays_for_month(&manual(), 2029, 1).unwrap();
        assert!(holidays.contains_key(&date(2028, 12, 31)));
        assert!(!holidays.contains_key(&date(2030, 1, 1)));
    }

    #[test]
    fn test_december_includes_next_year() {
        let holidays = holidays_for_month(&manual(), 2029, 12).unwrap();
        assert!(holidays.contains_key(&date(2030, 1, 1)));
        assert!(!holidays.contains_key(&date(2028, 12, 31)));
    }

    #[test]
    fn test_missing_adjacent_year_is_tolerated() {
        assert!(holidays_for_month(&OnlyYear(2029), 2029, 1).is_ok());
    }

    #[test]
    fn test_missing_target_year_propagates() {
        assert!(matches!(
            holidays_for_month(&OnlyYear(2028), 2029, 1),
            Err(EngineError::CacheNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        assert!(matches!(
            holidays_for_month(&manual(), 2029, 13),
            Err(EngineError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_calculate_month_tags_manual_holidays() {
        let config = EngineConfig::default();
        let result =
            calculate_month(&manual(), 2029, 1, "JG6", &BTreeSet::new(), &config).unwrap();

        // 2028-12-31 is a Sunday; 2029-01-01 is taken, so it is observed on the 2nd
        let sources: Vec<(NaiveDate, HolidaySource)> = result
            .holidays()
            .iter()
            .map(|h| (h.date, h.source))
            .collect();
        assert_eq!(
            sources,
            vec![
                (date(2029, 1, 1), HolidaySource::Manual),
                (date(2029, 1, 2), HolidaySource::Rule),
            ]
        );
    }

    #[test]
    fn test_default_provider_source_is_fetched() {
        assert_eq!(OnlyYear(2029).source(), HolidaySource::Fetched);
        let config = EngineConfig::default();
        let result = calculate_month(&OnlyYear(2029), 2029, 6, "JG6", &BTreeSet::new(), &config);
        assert!(result.is_ok());
    }

    #[test]
    fn test_provider_usable_as_trait_object() {
        let provider: Box<dyn HolidayProvider> = Box::new(manual());
        assert_eq!(holidays_for_month(provider.as_ref(), 2029, 6).unwrap().len(), 2);
    }
}
