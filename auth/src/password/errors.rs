use thiserror::Error;

/// Error type for password operations.
///
/// Verification is infallible by contract; only hashing itself can fail.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
