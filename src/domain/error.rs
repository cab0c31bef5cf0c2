//! Error types for the Tablescout client.
//!
//! This module defines the centralized error type [`TableScoutError`] and a type alias
//! [`Result`] used throughout the crate. Variants mirror the ways an interaction can
//! fail: bad user input, a failed remote fetch, and the two directions of local
//! persistence.

use thiserror::Error;

/// The main error type for Tablescout operations.
///
/// Validation and storage-write errors are surfaced to the action that caused
/// them. Storage-read errors never leave the favorites store: they are logged and
/// the empty set is used instead.
///
/// # Examples
///
/// ```
/// use tablescout::TableScoutError;
///
/// fn check_location(location: &str) -> Result<(), TableScoutError> {
///     if location.trim().is_empty() {
///         return Err(TableScoutError::Validation("Please enter a location".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check_location("  ").is_err());
/// ```
#[derive(Debug, Error)]
pub enum TableScoutError {
    /// User input was rejected before any work was started.
    ///
    /// Raised when a search is submitted with a blank location. No state changes
    /// and no network call accompany this error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A search request failed.
    ///
    /// Covers network failures, non-2xx responses and bodies that do not match
    /// the `{ "businesses": [...] }` shape.
    #[error("Failed to search restaurants: {0}")]
    Fetch(String),

    /// Reading persisted data failed.
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// Persisting data failed.
    ///
    /// When this is returned from a favorites toggle the caller must keep its
    /// pre-toggle favorites.
    #[error("Failed to save favorite: {0}")]
    StorageWrite(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Tablescout operations.
pub type Result<T> = std::result::Result<T, TableScoutError>;
