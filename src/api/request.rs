//! Request types for the Reimbursement Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::HolidayMap;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// The grade code (e.g., "JG6").
    pub grade: String,
    /// Raw public holidays. Should cover the month and its neighbours.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
    /// Requested personal leave dates.
    #[serde(default)]
    pub leave_dates: Vec<NaiveDate>,
}

/// Public holiday information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    #[serde(default = "default_holiday_name")]
    pub name: String,
}

fn default_holiday_name() -> String {
    "Public Holiday".to_string()
}

impl CalculationRequest {
    /// Holidays as a date-keyed map. A later entry for the same date wins.
    pub fn holiday_map(&self) -> HolidayMap {
        self.holidays
            .iter()
            .map(|holiday| (holiday.date, holiday.name.clone()))
            .collect()
    }

    /// Leave dates with duplicates removed.
    pub fn leave_set(&self) -> BTreeSet<NaiveDate> {
        self.leave_dates.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{"year": 2026, "month": 3, "grade": "JG6"}"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert!(request.holidays.is_empty());
        assert!(request.leave_dates.is_empty());
    }

    #[test]
    fn test_holiday_name_defaults() {
        let json = r#"{
            "year": 2026, "month": 5, "grade": "JG6",
            "holidays": [{"date": "2026-05-01"}]
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.holidays[0].name, "Public Holiday");
    }

    #[test]
    fn test_leave_set_removes_duplicates() {
        let json = r#"{
            "year": 2026, "month": 3, "grade": "JG6",
            "leave_dates": ["2026-03-04", "2026-03-04", "2026-03-05"]
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.leave_set().len(), 2);
    }

    #[test]
    fn test_holiday_map_keys_by_date() {
        let json = r#"{
            "year": 2026, "month": 2, "grade": "JG6",
            "holidays": [
                {"date": "2026-02-02", "name": "Holiday B"},
                {"date": "2026-02-01", "name": "Holiday A"}
            ]
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        let names: Vec<String> = request.holiday_map().into_values().collect();
        assert_eq!(names, vec!["Holiday A", "Holiday B"]);
    }
}
