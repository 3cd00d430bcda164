//! Holiday observance rule.
//!
//! A holiday falling on a substituted weekday (Sunday by default) is also
//! observed on the next day not already taken by another holiday. Saturday
//! holidays are never substituted.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};

use crate::config::ObservancePolicy;
use crate::models::{Holiday, HolidayMap};

/// Normalizes raw holidays under the default policy (Sunday only).
///
/// See [`apply_observed_rule_with`].
///
/// # Example
///
/// ```
/// use reimbursement_engine::calculation::apply_observed_rule;
/// use reimbursement_engine::models::HolidayMap;
/// use chrono::NaiveDate;
///
/// let sunday = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
///
/// let mut raw = HolidayMap::new();
/// raw.insert(sunday, "Test Holiday".to_string());
///
/// let normalized = apply_observed_rule(&raw);
/// assert_eq!(normalized.len(), 2);
/// assert!(normalized[&monday].is_observed);
/// assert_eq!(normalized[&monday].name, "Test Holiday (Observed)");
/// ```
pub fn apply_observed_rule(raw: &HolidayMap) -> BTreeMap<NaiveDate, Holiday> {
    apply_observed_rule_with(raw, &ObservancePolicy::default())
}

/// Normalizes raw holidays into a map that also holds observed substitutes.
///
/// Dates are scanned in ascending order. Every input date is copied through as
/// a non-observed holiday. When a date falls on a weekday the policy
/// substitutes, the first following date not yet occupied by an original or an
/// earlier observed holiday becomes an observed holiday and is marked occupied.
///
/// The occupied set starts with every input date, so a Sunday holiday followed
/// by an original Monday holiday is observed on Tuesday. Observed dates are
/// never themselves substituted.
///
/// The input is not modified. The function is total: the scan only advances
/// forward over a finite occupied set. A substitute that would lie past the
/// last representable date is dropped.
pub fn apply_observed_rule_with(
    raw: &HolidayMap,
    policy: &ObservancePolicy,
) -> BTreeMap<NaiveDate, Holiday> {
    let mut occupied: BTreeSet<NaiveDate> = raw.keys().copied().collect();
    let mut normalized: BTreeMap<NaiveDate, Holiday> = BTreeMap::new();

    for (&date, name) in raw {
        normalized.insert(date, Holiday::original(date, name.as_str()));

        if !policy.substitutes(date.weekday()) {
            continue;
        }

        if let Some(observed_date) = next_free_day(date, &occupied) {
            normalized.insert(observed_date, Holiday::observed(observed_date, name));
            occupied.insert(observed_date);
        }
    }

    normalized
}

/// First day after `date` that is not in `occupied`.
fn next_free_day(date: NaiveDate, occupied: &BTreeSet<NaiveDate>) -> Option<NaiveDate> {
    let mut candidate = date.succ_opt();
    while let Some(day) = candidate {
        if !occupied.contains(&day) {
            break;
        }
        candidate = day.succ_opt();
    }
    candidate
}
