use thiserror::Error;

use crate::models::common::{ ErrorCode, Principal, RecordId, RecordKind };

/// Domain errors returned by registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: RecordId },

    #[error("{sender} is not the owner of {kind} {id}")]
    Unauthorized { kind: RecordKind, id: RecordId, sender: Principal },
}

impl RegistryError {
    pub fn not_found(kind: RecordKind, id: RecordId) -> Self {
        RegistryError::NotFound { kind, id }
    }

    /// Wire code reported in the tagged result
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistryError::NotFound { .. } => ErrorCode::NotFound,
            RegistryError::Unauthorized { .. } => ErrorCode::Unauthorized,
        }
    }
}

/// Result type specific to registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised before an invocation reaches a registry.
///
/// These describe malformed input from the host, not a declined operation, so they
/// never carry a wire code and never touch state.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown operation {operation} on {registry} registry")]
    UnknownOperation { registry: String, operation: String },

    #[error("{operation} expects {expected} arguments, got {actual}")]
    Arity { operation: String, expected: usize, actual: usize },

    #[error("Invalid argument {index} for {operation}: {reason}")]
    InvalidArgument { operation: String, index: usize, reason: String },

    #[error("Failed to encode result: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Severity used when reporting an error to an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Error,
    Warning,
}

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn recovery_strategy(&self) -> Option<String>;
    fn severity(&self) -> ErrorSeverity;
}

impl RecoverableError for RegistryError {
    fn is_recoverable(&self) -> bool {
        // A declined call leaves state untouched, so the caller may always resubmit.
        true
    }

    fn recovery_strategy(&self) -> Option<String> {
        match self {
            RegistryError::NotFound { kind, .. } => {
                Some(format!("check the {} id against the registry's last issued id", kind))
            }
            RegistryError::Unauthorized { kind, id, .. } => {
                Some(format!("resubmit as the current owner of {} {}", kind, id))
            }
        }
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            RegistryError::NotFound { .. } => ErrorSeverity::Warning,
            RegistryError::Unauthorized { .. } => ErrorSeverity::Error,
        }
    }
}

impl RecoverableError for DispatchError {
    fn is_recoverable(&self) -> bool {
        !matches!(self, DispatchError::Encoding(_))
    }

    fn recovery_strategy(&self) -> Option<String> {
        match self {
            DispatchError::UnknownOperation { .. } => {
                Some("run `buildreg operations` to list supported operations".to_string())
            }
            DispatchError::Arity { .. } | DispatchError::InvalidArgument { .. } => {
                Some("fix the invocation's positional arguments".to_string())
            }
            DispatchError::Encoding(_) => None,
        }
    }

    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }
}
