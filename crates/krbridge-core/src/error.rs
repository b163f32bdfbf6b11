//! Error types for module dispatch

use thiserror::Error;

/// Result type alias for registry and bridge operations
pub type ModuleResult<T> = Result<T, ModuleError>;

/// Error type for module registration and dispatch
///
/// Modules themselves never return errors from `call_method`; these errors
/// describe failures of the host plumbing around them.
#[derive(Error, Debug)]
pub enum ModuleError {
    /// No module is registered under the requested name
    #[error("unknown module: {0}")]
    UnknownModule(String),

    /// A module with the same name is already registered
    #[error("module already registered: {0}")]
    DuplicateModule(String),

    /// Dispatch was attempted with an empty method name
    #[error("method name must not be empty")]
    EmptyMethod,

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Async runtime error
    #[error("runtime error: {0}")]
    RuntimeError(String),

    /// The host is shutting down and no longer accepts calls
    #[error("bridge is shutting down")]
    ShuttingDown,

    /// A module panicked while handling a call
    #[error("module panicked: {0}")]
    Panicked(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl ModuleError {
    /// Returns a stable numeric code suitable for reporting to the host
    pub fn error_code(&self) -> u32 {
        match self {
            ModuleError::UnknownModule(_) => 1,
            ModuleError::DuplicateModule(_) => 2,
            ModuleError::EmptyMethod => 3,
            ModuleError::ConfigError(_) => 4,
            ModuleError::SerializationError(_) => 5,
            ModuleError::RuntimeError(_) => 6,
            ModuleError::ShuttingDown => 7,
            ModuleError::Panicked(_) => 8,
            ModuleError::Internal(_) => 9,
        }
    }
}

impl From<serde_json::Error> for ModuleError {
    fn from(err: serde_json::Error) -> Self {
        ModuleError::SerializationError(err.to_string())
    }
}
