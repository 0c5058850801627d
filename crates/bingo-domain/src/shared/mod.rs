use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod clock;

pub use clock::{format_date, parse_date, Clock, FixedClock, SystemClock};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_id!(UserId);

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication (1xxx)
    Unauthenticated = 1001,

    // Resource Not Found (2xxx)
    TaskNotFound = 2001,
    DocumentNotFound = 2002,

    // Business Logic (3xxx)
    BoardFull = 3001,
    CellNotEditable = 3002,

    // Data & Persistence (4xxx)
    RepositoryError = 4001,
    SerializationError = 4004,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,
    RemoteError = 5004,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::Unauthenticated | ErrorCode::RemoteError => ErrorSeverity::Warning,

            ErrorCode::TaskNotFound
            | ErrorCode::DocumentNotFound
            | ErrorCode::BoardFull
            | ErrorCode::CellNotEditable
            | ErrorCode::ValidationError
            | ErrorCode::InvalidInput => ErrorSeverity::Info,

            ErrorCode::RepositoryError
            | ErrorCode::SerializationError
            | ErrorCode::InfrastructureError => ErrorSeverity::Error,
        }
    }

    /// Remote failures are expected while offline; local state stays authoritative
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCode::RemoteError | ErrorCode::Unauthenticated)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Not signed in: {0}")]
    Unauthenticated(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Board is full: {0}")]
    BoardFull(String),

    #[error("Cell is not editable: {0}")]
    CellNotEditable(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Remote store error: {0}")]
    Remote(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Unauthenticated(_) => ErrorCode::Unauthenticated,
            DomainError::TaskNotFound(_) => ErrorCode::TaskNotFound,
            DomainError::BoardFull(_) => ErrorCode::BoardFull,
            DomainError::CellNotEditable(_) => ErrorCode::CellNotEditable,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
            DomainError::Remote(_) => ErrorCode::RemoteError,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
            DomainError::Deserialization(_) => ErrorCode::SerializationError,
            DomainError::NotFound(_) => ErrorCode::DocumentNotFound,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::Unauthenticated(msg)
            | DomainError::TaskNotFound(msg)
            | DomainError::BoardFull(msg)
            | DomainError::CellNotEditable(msg)
            | DomainError::Repository(msg)
            | DomainError::Infrastructure(msg)
            | DomainError::Remote(msg)
            | DomainError::Validation(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::Serialization(msg)
            | DomainError::Deserialization(msg)
            | DomainError::NotFound(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_and_message() {
        let err = DomainError::BoardFull("8 tasks already on a 3x3 board".to_string());
        assert_eq!(err.code(), ErrorCode::BoardFull);
        assert_eq!(err.message(), "8 tasks already on a 3x3 board");
        assert_eq!(err.format_with_code(), "[3001] Board is full: 8 tasks already on a 3x3 board");
    }

    #[test]
    fn test_remote_errors_are_recoverable() {
        assert!(DomainError::Remote("offline".to_string()).is_recoverable());
        assert!(!DomainError::Repository("disk full".to_string()).is_recoverable());
        assert_eq!(
            DomainError::Repository("x".to_string()).severity(),
            ErrorSeverity::Error
        );
    }

    #[test]
    fn test_user_id_roundtrip() {
        let id = UserId::from_string("uid-42");
        assert_eq!(id.as_str(), "uid-42");
        assert_eq!(id.to_string(), "uid-42");
        assert_ne!(UserId::new(), UserId::new());
    }
}
