//! Configuration loading and management for the Reimbursement Engine.
//!
//! This module provides the grade rate table and holiday observance policy,
//! either built in or loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use reimbursement_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Grades loaded: {}", config.config().grade_rates().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, GradeRates, GradesConfig, ObservancePolicy};
