//! Error types for the Reimbursement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Most questionable inputs (unknown grades, leave outside the month, leave on
//! a weekend) are absorbed by policy and never reach this type.

use thiserror::Error;

/// The main error type for the Reimbursement Engine.
///
/// # Example
///
/// ```
/// use reimbursement_engine::error::EngineError;
///
/// let error = EngineError::InvalidPeriod { year: 2026, month: 13 };
/// assert_eq!(error.to_string(), "Invalid period: year 2026, month 13");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested year/month does not name a representable calendar month.
    #[error("Invalid period: year {year}, month {month}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
    },

    /// No holiday cache file exists for the requested year.
    #[error("Holiday cache not found: {path}")]
    CacheNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A holiday cache file exists but is not valid JSON for the cache schema.
    #[error("Failed to parse holiday cache '{path}': {message}")]
    CacheParseError {
        /// The path to the cache file.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A holiday cache file was readable but does not match the requested year or schema version.
    #[error("Holiday cache '{path}' rejected: {reason}")]
    CacheRejected {
        /// The path to the cache file.
        path: String,
        /// Why the cache was rejected.
        reason: String,
    },

    /// A holiday cache file could not be written.
    #[error("Failed to write holiday cache '{path}': {message}")]
    CacheWriteError {
        /// The path that could not be written.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/grades.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/grades.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_period_displays_year_and_month() {
        let error = EngineError::InvalidPeriod {
            year: 2026,
            month: 0,
        };
        assert_eq!(error.to_string(), "Invalid period: year 2026, month 0");
    }

    #[test]
    fn test_cache_rejected_displays_reason() {
        let error = EngineError::CacheRejected {
            path: "holiday_cache_2026.json".to_string(),
            reason: "cache version 0 does not match 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Holiday cache 'holiday_cache_2026.json' rejected: cache version 0 does not match 1"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_period() -> EngineResult<()> {
            Err(EngineError::InvalidPeriod {
                year: 2026,
                month: 13,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_period()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
