//! Core data models for the Reimbursement Engine.
//!
//! This module contains the domain models used throughout the engine.

mod calculation_result;
mod holiday;
mod period;

pub use calculation_result::CalculationResult;
pub use holiday::{Holiday, HolidayMap, HolidaySource, OBSERVED_SUFFIX};
pub use period::Period;
