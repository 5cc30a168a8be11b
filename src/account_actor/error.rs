//! Error types for the accounts store.

use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// No account is registered under the given email.
    #[error("Account not found with the given input data Email : '{0}'")]
    NotFound(String),

    /// An account with the same email already exists.
    #[error("Account already registered with given Email {0}")]
    AlreadyExists(String),

    /// The account data provided is invalid.
    #[error("{0}")]
    ValidationError(String),

    /// An error occurred while communicating with the store actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
