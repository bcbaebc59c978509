//! Error types for the dashboard_core crate

use thiserror::Error;

/// Custom error types for the dashboard_core crate
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The input source could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input could not be read as CSV at all
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required columns absent from the header row
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Error from rolling statistics
    #[error("Statistics error: {0}")]
    Stats(#[from] stat_math::StatsError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, DashboardError>;
