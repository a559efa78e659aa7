//! Error types for Antipolo Tour

use thiserror::Error;

/// Main error type for page interaction operations
#[derive(Error, Debug)]
pub enum TourError {
    /// Destination id has no record in the catalog
    #[error("Destination not found: {0}")]
    UnknownDestination(String),

    /// Choice button carried an action we do not handle
    #[error("Unknown choice action: {0}")]
    UnknownAction(String),

    /// Embedded catalog document could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Persisted flag could not be written
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias using TourError
pub type TourResult<T> = Result<T, TourError>;
