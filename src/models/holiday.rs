//! Public holiday models.
//!
//! This module contains the [`Holiday`] type produced by the observance rule and
//! the [`HolidayMap`] alias used for raw holiday input.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw holiday input: calendar date to holiday label.
///
/// A `BTreeMap` keeps dates unique and iterates them in ascending order.
pub type HolidayMap = BTreeMap<NaiveDate, String>;

/// Suffix appended to the label of a synthesized observed holiday.
pub const OBSERVED_SUFFIX: &str = " (Observed)";

/// Where a holiday entry came from.
///
/// Purely informational; no calculation branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidaySource {
    /// Taken directly from the supplied holiday data.
    Fetched,
    /// Synthesized by the observance rule.
    Rule,
    /// Entered by hand.
    Manual,
    /// Loaded from a local holiday cache.
    Cache,
}

impl std::fmt::Display for HolidaySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidaySource::Fetched => write!(f, "fetched"),
            HolidaySource::Rule => write!(f, "rule"),
            HolidaySource::Manual => write!(f, "manual"),
            HolidaySource::Cache => write!(f, "cache"),
        }
    }
}

/// A day treated as non-working due to a public observance.
///
/// # Example
///
/// ```
/// use reimbursement_engine::models::{Holiday, HolidaySource};
/// use chrono::NaiveDate;
///
/// let sunday = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
///
/// let holiday = Holiday::original(sunday, "Federal Territory Day");
/// let observed = Holiday::observed(monday, &holiday.name);
///
/// assert!(!holiday.is_observed);
/// assert_eq!(holiday.source, HolidaySource::Fetched);
/// assert_eq!(observed.name, "Federal Territory Day (Observed)");
/// assert_eq!(observed.source, HolidaySource::Rule);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date the holiday is taken.
    pub date: NaiveDate,
    /// Display label (e.g., "Labour Day").
    pub name: String,
    /// True only for holidays synthesized by the observance rule.
    pub is_observed: bool,
    /// Provenance of the entry.
    pub source: HolidaySource,
}

impl Holiday {
    /// Creates a holiday taken directly from supplied holiday data.
    pub fn original(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            is_observed: false,
            source: HolidaySource::Fetched,
        }
    }

    /// Creates the observed substitute for the holiday labelled `original_name`.
    pub fn observed(date: NaiveDate, original_name: &str) -> Self {
        Self {
            date,
            name: format!("{}{}", original_name, OBSERVED_SUFFIX),
            is_observed: true,
            source: HolidaySource::Rule,
        }
    }

    /// Returns a copy of this holiday tagged with a different provenance.
    pub fn with_source(mut self, source: HolidaySource) -> Self {
        self.source = source;
        self
    }
}
