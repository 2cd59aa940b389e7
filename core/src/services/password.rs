//! Password hashing with bcrypt.
//!
//! bcrypt is deliberately slow, so both hashing and verification run on the
//! blocking thread pool instead of an async worker.

use crate::errors::{DomainError, DomainResult, ValidationError};

/// Longest password bcrypt will consider; bytes beyond 72 are ignored
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Check password length bounds
pub fn validate_password(password: &str, min_length: usize) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::required("password"));
    }
    if password.chars().count() < min_length || password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::InvalidLength {
            field: "password".to_string(),
            min: min_length,
            max: MAX_PASSWORD_BYTES,
        });
    }
    Ok(())
}

/// Hash a password with the given bcrypt cost
pub async fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against a stored bcrypt hash
///
/// A malformed stored hash counts as a mismatch.
pub async fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))?;

    match verified {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be parsed");
            Ok(false)
        }
    }
}
