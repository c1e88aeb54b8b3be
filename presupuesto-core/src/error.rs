//! Error types for the estimating engine.

use thiserror::Error;

/// Main error type for the estimating engine.
///
/// The calculation itself is total: degenerate inputs (zero board area,
/// materials missing from the catalog, empty projects) produce degenerate
/// outputs, not errors. Errors are reserved for inputs outside the documented
/// shape: documents that do not deserialize, or projects whose entities
/// violate hard invariants.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid project: {}", errors.join("; "))]
    InvalidProject { errors: Vec<String> },
}

/// Result type alias for estimating operations.
pub type Result<T> = std::result::Result<T, EstimateError>;
