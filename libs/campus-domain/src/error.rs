//! Domain errors for registry operations
//!
//! Every service operation either succeeds or returns one of these kinds.
//! None of them abort the process: the caller decides how to present them.

use std::fmt;

use thiserror::Error;

/// The aggregate a `NotFound` error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Student,
    Course,
    Enrollment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Student => "Student",
            EntityKind::Course => "Course",
            EntityKind::Enrollment => "Enrollment",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during registry operations
///
/// These errors represent business-level failures and are independent of
/// the store implementation. Store faults are carried opaquely in
/// `StorageFailure` so the caller can classify them as server-side.
#[derive(Error, Debug)]
pub enum CampusError {
    /// An id or unique key did not resolve to a record
    #[error("{entity} not found with {key}")]
    NotFound { entity: EntityKind, key: String },

    /// A uniqueness invariant would be violated
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A business-meaningful field is malformed or out of range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The entity store failed in a way the domain does not interpret
    #[error("Storage operation failed: {0}")]
    StorageFailure(String),
}

impl CampusError {
    /// Create a not found error for any entity kind
    pub fn not_found(entity: EntityKind, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    /// Student lookup by id failed
    pub fn student_not_found(id: impl fmt::Display) -> Self {
        Self::not_found(EntityKind::Student, format!("ID: {}", id))
    }

    /// Course lookup by id failed
    pub fn course_not_found(id: impl fmt::Display) -> Self {
        Self::not_found(EntityKind::Course, format!("ID: {}", id))
    }

    /// Enrollment lookup by id failed
    pub fn enrollment_not_found(id: impl fmt::Display) -> Self {
        Self::not_found(EntityKind::Enrollment, format!("ID: {}", id))
    }

    /// Create a conflict error with a message
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an invalid input error with a message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a storage failure error with a message
    pub fn storage_failure(msg: impl Into<String>) -> Self {
        Self::StorageFailure(msg.into())
    }

    /// The entity kind, when this is a `NotFound` error
    pub fn missing_entity(&self) -> Option<EntityKind> {
        match self {
            Self::NotFound { entity, .. } => Some(*entity),
            _ => None,
        }
    }
}

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, CampusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_not_found_message() {
        let err = CampusError::student_not_found(42);
        assert_eq!(err.to_string(), "Student not found with ID: 42");
        assert_eq!(err.missing_entity(), Some(EntityKind::Student));
    }

    #[test]
    fn test_not_found_with_custom_key() {
        let err = CampusError::not_found(EntityKind::Course, "code: CS101");
        assert_eq!(err.to_string(), "Course not found with code: CS101");
    }

    #[test]
    fn test_conflict_error() {
        let err = CampusError::conflict("Student with email a@x.com already exists");
        assert!(matches!(err, CampusError::Conflict(_)));
        assert!(err.to_string().contains("a@x.com"));
        assert_eq!(err.missing_entity(), None);
    }

    #[test]
    fn test_invalid_input_error() {
        let err = CampusError::invalid_input("Credits must be between 1 and 6");
        assert_eq!(err.to_string(), "Invalid input: Credits must be between 1 and 6");
    }

    #[test]
    fn test_storage_failure_error() {
        let err = CampusError::storage_failure("connection reset");
        assert_eq!(err.to_string(), "Storage operation failed: connection reset");
    }
}
