//! Dashboard error types
//!
//! Empty result sets and unknown sort keys are deliberately absent here: the
//! former renders an empty-state message and the latter falls back to the
//! table's default sort key.

use thiserror::Error;

/// Errors that can occur while driving the dashboard state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Explicit range with `from` after `to`
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: String, to: String },

    /// Preset name not in the preset list
    #[error("Unknown date preset: {0}")]
    UnknownPreset(String),

    /// Tab name not in the tab list
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// Metric id not in the metric catalog
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// Data source other than fixtures/generated
    #[error("Unknown data source: {0}")]
    UnknownDataSource(String),

    /// Sort direction other than ascending/descending
    #[error("Invalid sort direction: {0}")]
    InvalidSortDirection(String),

    /// Timestamp text that matches none of the accepted formats
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
