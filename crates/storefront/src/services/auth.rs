//! Admin gate service.
//!
//! A single shared password gates the admin dashboard. The configured
//! password is hashed once at startup and every login attempt is verified
//! against the hash with argon2 - no plaintext equality anywhere. The gate
//! has exactly two states, open and closed, toggled by login and logout;
//! there is no expiry, rate limiting, or per-user identity. This is a
//! convenience gate for an internal tool, not security-grade access control.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors that can occur in the admin gate.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The submitted password did not match.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing or hash parsing failed.
    #[error("password hashing error")]
    PasswordHash,
}

/// Verifier for the shared admin password.
pub struct AdminGate {
    password_hash: String,
}

impl AdminGate {
    /// Hash the configured shared password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHash` if hashing fails.
    pub fn new(password: &SecretString) -> Result<Self, AuthError> {
        let password_hash = hash_password(password.expose_secret())?;
        Ok(Self { password_hash })
    }

    /// Verify a submitted password against the gate secret.
    ///
    /// Comparison is case-sensitive and exact.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on mismatch.
    pub fn verify(&self, candidate: &str) -> Result<(), AuthError> {
        verify_password(candidate, &self.password_hash)
    }
}

/// Hash a password with argon2 and a fresh salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored argon2 hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|_| AuthError::PasswordHash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_password_opens_gate() {
        let gate = AdminGate::new(&SecretString::from("admin")).expect("gate");
        assert!(gate.verify("admin").is_ok());
    }

    #[test]
    fn test_wrong_password_keeps_gate_closed() {
        let gate = AdminGate::new(&SecretString::from("admin")).expect("gate");
        assert!(matches!(
            gate.verify("wrong"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let gate = AdminGate::new(&SecretString::from("admin")).expect("gate");
        assert!(matches!(
            gate.verify("Admin"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
