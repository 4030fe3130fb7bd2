use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are a single variant on purpose: callers must not
/// be able to distinguish a bad signature from tampered claims, a malformed
/// token, or an expired one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Invalid token")]
    InvalidToken,
}
