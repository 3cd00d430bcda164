//! Configuration types for reimbursement calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Built-in grade table used when no configuration directory is supplied.
const BUILTIN_GRADE_RATES: [(&str, i64); 6] = [
    ("JG5", 50),
    ("JG6", 100),
    ("JG7", 150),
    ("JG8", 200),
    ("JGB", 200),
    ("JGA", 250),
];

/// Read-only table of grade code to daily rate.
///
/// # Example
///
/// ```
/// use reimbursement_engine::config::GradeRates;
/// use rust_decimal::Decimal;
///
/// let rates = GradeRates::default();
/// assert_eq!(rates.rate_for("JG6"), Decimal::from(100));
/// assert_eq!(rates.rate_for("JG99"), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeRates {
    rates: HashMap<String, Decimal>,
}

impl GradeRates {
    /// Creates a rate table from `(grade, daily rate)` pairs.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Self {
            rates: entries
                .into_iter()
                .map(|(grade, rate)| (grade.into(), rate))
                .collect(),
        }
    }

    /// Returns the daily rate for `grade`, or zero when the grade is unknown.
    pub fn rate_for(&self, grade: &str) -> Decimal {
        self.rates.get(grade).copied().unwrap_or(Decimal::ZERO)
    }

    /// Returns true if `grade` has an entry in the table.
    pub fn contains(&self, grade: &str) -> bool {
        self.rates.contains_key(grade)
    }

    /// All `(grade, rate)` entries sorted by grade code.
    pub fn entries(&self) -> Vec<(&str, Decimal)> {
        let mut entries: Vec<(&str, Decimal)> = self
            .rates
            .iter()
            .map(|(grade, rate)| (grade.as_str(), *rate))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Number of grades in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no grades.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for GradeRates {
    fn default() -> Self {
        Self::new(
            BUILTIN_GRADE_RATES
                .iter()
                .map(|(grade, rate)| (*grade, Decimal::from(*rate))),
        )
    }
}

/// Grades configuration file structure (`grades.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct GradesConfig {
    /// Map of grade code to daily rate.
    pub grades: GradeRates,
}

/// Which weekdays push a holiday onto the next free day.
///
/// The default substitutes Sunday holidays only; Saturday holidays are kept
/// as-is with no observed counterpart.
///
/// # Example
///
/// ```
/// use reimbursement_engine::config::ObservancePolicy;
/// use chrono::Weekday;
///
/// let policy = ObservancePolicy::default();
/// assert!(policy.substitutes(Weekday::Sun));
/// assert!(!policy.substitutes(Weekday::Sat));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservancePolicy {
    /// Weekdays on which a holiday gets an observed substitute.
    pub substitute_weekdays: Vec<Weekday>,
}

impl ObservancePolicy {
    /// Returns true if a holiday on `weekday` gets an observed substitute.
    pub fn substitutes(&self, weekday: Weekday) -> bool {
        self.substitute_weekdays.contains(&weekday)
    }
}

impl Default for ObservancePolicy {
    fn default() -> Self {
        Self {
            substitute_weekdays: vec![Weekday::Sun],
        }
    }
}

/// The complete engine configuration.
///
/// Passed explicitly to the calculator so grade and observance policy can be
/// varied without recompilation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    grade_rates: GradeRates,
    observance: ObservancePolicy,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(grade_rates: GradeRates, observance: ObservancePolicy) -> Self {
        Self {
            grade_rates,
            observance,
        }
    }

    /// Returns the grade rate table.
    pub fn grade_rates(&self) -> &GradeRates {
        &self.grade_rates
    }

    /// Returns the holiday observance policy.
    pub fn observance(&self) -> &ObservancePolicy {
        &self.observance
    }
}
