//! Authentication library
//!
//! Provides the security-relevant core of the credential service:
//! - Password hashing and verification (Argon2id, PHC string format)
//! - Signed bearer-token issuance and verification (JWT, HS256)
//! - An authenticator coordinating the two
//!
//! The library is deliberately free of I/O: the service crate wires it to
//! storage and transport.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::JwtHandler;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", 24);
//! let token = handler.issue("account123").unwrap();
//! let subject = handler.verify(&token).unwrap();
//! assert_eq!(subject, "account123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 24);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, "account123").unwrap();
//!
//! // Gate: verify token
//! let subject = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(subject, "account123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
