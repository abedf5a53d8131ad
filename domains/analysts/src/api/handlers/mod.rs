//! HTTP handlers for the Analysts domain

pub mod analysts;
pub mod auth;
pub mod salaries;
pub mod vacations;
