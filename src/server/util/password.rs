//! Password hashing and verification using argon2id.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::server::error::internal::InternalError;

/// Hashes a password using argon2id with a random salt.
///
/// # Arguments
/// - `password` - Plain-text password to hash
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash including the salt and parameters
/// - `Err(InternalError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(InternalError::PasswordHash)?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored argon2id hash.
///
/// A stored value that is not a valid PHC string never matches.
///
/// # Arguments
/// - `password` - Plain-text password supplied by the caller
/// - `hash` - Stored PHC hash
///
/// # Returns
/// - `true` - Password matches the hash
/// - `false` - Password does not match or the hash is unreadable
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash could not be parsed");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
