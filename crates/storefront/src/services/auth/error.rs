//! Authentication error types.

use thiserror::Error;

use servex_core::EmailError;

use crate::storage::StorageError;

/// Errors that can occur during session operations.
///
/// Validation errors surface to the caller as a rejected operation with a
/// human-readable message; they never change session state.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The contact string does not look like an email address.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The secret is shorter than the minimum for the attempted operation.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum length for the attempted operation.
        min: usize,
    },

    /// The identity could not be written to the user slot.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
