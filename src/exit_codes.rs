//! Exit code constants for the soroquest CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown mission, locked mission)
//! - 2: Validation failure (submitted code did not pass the mission checks)
//! - 3: Storage failure (progress file or snapshot could not be read/written)
//! - 4: Configuration error (invalid config or mission catalog)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown mission, or invalid state.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the submitted contract did not pass all checks.
pub const VALIDATION_FAILURE: i32 = 2;

/// Storage failure: progress persistence or snapshot import/export failed.
pub const STORAGE_FAILURE: i32 = 3;

/// Configuration error: invalid config file or mission catalog.
pub const CONFIG_ERROR: i32 = 4;
