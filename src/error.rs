//! Error types for the soroquest CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for soroquest operations.
///
/// Each variant maps to a specific exit code so scripts can distinguish
/// "the code didn't pass" from "something went wrong".
#[derive(Error, Debug)]
pub enum QuestError {
    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// The submitted contract did not pass validation.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Progress persistence or snapshot import/export failed.
    #[error("Storage operation failed: {0}")]
    StorageError(String),

    /// Config file or mission catalog could not be loaded.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl QuestError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            QuestError::UserError(_) => exit_codes::USER_ERROR,
            QuestError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            QuestError::StorageError(_) => exit_codes::STORAGE_FAILURE,
            QuestError::ConfigError(_) => exit_codes::CONFIG_ERROR,
        }
    }
}

/// Result type alias for soroquest operations.
pub type Result<T> = std::result::Result<T, QuestError>;
