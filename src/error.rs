//! Error types for librarian
//!
//! One enum per program: the catalog manager and the calorie tracker.

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error type for catalog store operations
#[derive(Debug, Error)]
pub enum CatalogError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Catalog JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog JSON root must be a list")]
    InvalidRoot,

    #[error("A book with this ISBN already exists: {0}")]
    DuplicateIsbn(String),

    // -------------------------------------------------------------------------
    // Lookup / Status Errors
    // -------------------------------------------------------------------------
    #[error("No book with ISBN {0}")]
    NotFound(String),

    #[error("Book {0} is already issued")]
    AlreadyIssued(String),

    #[error("Book {0} is not issued")]
    NotIssued(String),
}

/// Error type for the calorie tracker session
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid calorie count: {0:?}")]
    InvalidCalories(String),
}
