//! Reimbursement Engine
//!
//! This crate computes a monthly "eligible working days" reimbursement report
//! for an employee grade, given a calendar month, public holidays and personal
//! leave. Sunday holidays are observed on the next free day, and every day of
//! the month is classified as weekend, public holiday, personal leave or
//! working day.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod holidays;
pub mod models;
