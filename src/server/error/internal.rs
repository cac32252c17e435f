use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A value stored in the database does not match any known variant.
    ///
    /// Occurs when a role or attendance status column holds a string the application
    /// does not recognise. Surfaces as `DbErr::Custom` from the repository layer and
    /// results in a 500 Internal Server Error with a generic message returned to client.
    #[error("Failed to parse stored {kind} value '{value}'")]
    ParseStoredValue {
        /// What kind of value was being parsed (e.g. "member role")
        kind: &'static str,
        /// The stored string that failed to parse
        value: String,
    },

    /// Hashing or verifying a password failed for a reason other than a mismatch.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// A blocking task was cancelled or panicked before returning.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}
