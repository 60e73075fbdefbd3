//! Custom error types for CheckMyGrade
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for CheckMyGrade operations
#[derive(Error, Debug)]
pub enum GradeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Stored ciphertext could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// A data file's header row doesn't carry the expected columns
    #[error("Schema error in {file}: missing columns {missing:?}")]
    Schema { file: String, missing: Vec<String> },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl GradeError {
    /// Create a "not found" error for students
    pub fn student_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Student",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for courses
    pub fn course_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Course",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for professors
    pub fn professor_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Professor",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for login users
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Check if this error rejected an insert (empty or duplicate identifier)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Duplicate { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for GradeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for GradeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for GradeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for CheckMyGrade operations
pub type GradeResult<T> = Result<T, GradeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GradeError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = GradeError::student_not_found("sam@mycsu.edu");
        assert_eq!(err.to_string(), "Student not found: sam@mycsu.edu");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_duplicate_is_validation() {
        let err = GradeError::Duplicate {
            entity_type: "Course",
            identifier: "DATA200".into(),
        };
        assert_eq!(err.to_string(), "Course already exists: DATA200");
        assert!(err.is_validation());
    }

    #[test]
    fn test_schema_error_display() {
        let err = GradeError::Schema {
            file: "students.csv".into(),
            missing: vec!["marks".into()],
        };
        assert_eq!(
            err.to_string(),
            "Schema error in students.csv: missing columns [\"marks\"]"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let grade_err: GradeError = io_err.into();
        assert!(matches!(grade_err, GradeError::Io(_)));
    }
}
