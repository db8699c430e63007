//! Error types for card_listings
//!
//! Only acquiring the inventory text and writing export files can fail.
//! Parsing and formatting are total over any tab-separated input.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for card_listings operations
#[derive(Debug, Error)]
pub enum ListingError {
    /// Inventory or template file could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Failed to read or write CSV data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Bulk upload template is unusable
    #[error("Template error: {0}")]
    Template(String),
    /// Web server could not start
    #[error("Server error: {0}")]
    Server(std::io::Error),
}

impl ListingError {
    /// Wraps an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ListingError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for card_listings operations
pub type Result<T> = std::result::Result<T, ListingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let err = ListingError::io(
            "/tmp/missing.tsv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.tsv"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn http_status_display() {
        let err = ListingError::HttpStatus(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "HTTP error: 404 Not Found");
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error as _;
        let err = ListingError::io(
            "inventory.tsv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.source().is_some());
    }
}
