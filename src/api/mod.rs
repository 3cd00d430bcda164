//! HTTP API module for the Reimbursement Engine.
//!
//! This module provides the REST API endpoints for calculating monthly
//! eligible working days reports and listing grade rates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, HolidayRequest};
pub use response::{ApiError, CalculationResponse, GradeEntry};
pub use state::AppState;
