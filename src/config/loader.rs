//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the grade table
//! and observance policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, GradesConfig, ObservancePolicy};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── grades.yaml      # Grade code to daily rate (required)
/// └── observance.yaml  # Substituted weekdays (optional, defaults to Sunday)
/// ```
///
/// # Example
///
/// ```no_run
/// use reimbursement_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("JG6 daily rate: {}", loader.config().grade_rates().rate_for("JG6"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `grades.yaml` is missing
    /// - Any present file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let grades_path = path.join("grades.yaml");
        let grades = Self::load_yaml::<GradesConfig>(&grades_path)?;

        let observance_path = path.join("observance.yaml");
        let observance = if observance_path.exists() {
            Self::load_yaml::<ObservancePolicy>(&observance_path)?
        } else {
            debug!(
                path = %observance_path.display(),
                "No observance policy file, using default"
            );
            ObservancePolicy::default()
        };

        debug!(
            path = %path.display(),
            grades = grades.grades.len(),
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(grades.grades, observance),
        })
    }

    /// Wraps the built-in grade table and default observance policy.
    pub fn builtin() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
