//! # Stat Math
//!
//! Rolling statistics for stock price series. This crate provides the
//! trailing-window primitives the dashboard data layer is built on:
//! moving averages with a shrinking startup window, sample standard
//! deviation over gap-aware windows, and percentage change.
//!
//! All primitives operate on record *slots*: a slot may carry a value or
//! be empty, and an empty slot still advances the window. This keeps a
//! malformed record from shifting window alignment for its neighbors.

use thiserror::Error;

// Primitive modules
pub mod moving_averages;
pub mod returns;
pub mod volatility;

/// Errors that can occur when constructing rolling statistics
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for rolling statistics operations
pub type Result<T> = std::result::Result<T, StatsError>;
