//! Error types for the tracker library.

use std::path::PathBuf;

use thiserror::Error;

/// Every failure a tracker operation can surface to its caller.
///
/// `InvalidInput` and `PlantNotFound` are expected conditions the front end
/// turns into a user-visible message. The remaining variants are store or
/// environment failures; any transaction that was open when they occurred has
/// already been rolled back.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Plant not found for the given ID
    #[error("Plant with ID {id} not found")]
    PlantNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TrackerError {
        TrackerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a failed `spawn_blocking` join.
    pub(crate) fn join(e: tokio::task::JoinError) -> Self {
        TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        }
    }

    /// True for unknown plant IDs.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackerError::PlantNotFound { .. })
    }

    /// True for rejected user input.
    pub fn is_validation(&self) -> bool {
        matches!(self, TrackerError::InvalidInput { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::database(message).with_source(e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let not_found = TrackerError::PlantNotFound { id: 7 };
        assert!(not_found.is_not_found());
        assert!(!not_found.is_validation());
        assert_eq!(not_found.to_string(), "Plant with ID 7 not found");

        let invalid = TrackerError::invalid_input("frequency").with_reason("must be positive");
        assert!(invalid.is_validation());
        assert_eq!(
            invalid.to_string(),
            "Invalid input for field 'frequency': must be positive"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let failed: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = failed.db_context("Failed to query plant").unwrap_err();
        assert!(matches!(err, TrackerError::Database { .. }));
        assert!(err.to_string().contains("Failed to query plant"));
    }
}
