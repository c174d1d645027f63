//! Password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password with Argon2id default parameters; returns the PHC string.
pub fn hash_password(input: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(input.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC string. No route logs users in, so only tests check hashes.
#[cfg(test)]
pub fn verify_password(input: &str, hash: &str) -> Result<bool, AppError> {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    let parsed = PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("parse hash: {e}")))?;
    Ok(Argon2::default().verify_password(input.as_bytes(), &parsed).is_ok())
}
