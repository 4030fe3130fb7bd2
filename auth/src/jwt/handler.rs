use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Token issuer and verifier.
///
/// Signs and verifies bearer tokens with a process-wide symmetric secret
/// (HS256) and a fixed time-to-live.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    token_ttl: Duration,
}

impl JwtHandler {
    /// Create a new token handler.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `ttl_hours` - Hours an issued token remains valid
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            token_ttl: Duration::hours(ttl_hours),
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// # Arguments
    /// * `subject` - Account identifier the token attests to
    ///
    /// # Returns
    /// Signed token string with `sub`, `iat`, and `exp` claims
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, self.token_ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::SigningFailed(e.to_string()))
    }

    /// Verify a token and return its subject.
    ///
    /// Checks signature integrity and expiry. Every failure mode collapses
    /// into `InvalidToken`; the caller learns nothing about which check
    /// rejected the token.
    ///
    /// # Arguments
    /// * `token` - Token string as presented by the client
    ///
    /// # Returns
    /// The verified subject (account identifier)
    ///
    /// # Errors
    /// * `InvalidToken` - Signature, structure, or expiry check failed
    pub fn verify(&self, token: &str) -> Result<String, JwtError> {
        let validation = Validation::new(self.algorithm);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| JwtError::InvalidToken)?;

        Ok(token_data.claims.sub)
    }
}
