// Credential handling. Passwords are hashed with Argon2id and a random
// salt per account; only the resulting PHC string is kept.

use crate::error::ShopError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password into a PHC-formatted credential string.
pub fn hash_password(password: &str) -> Result<String, ShopError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| ShopError::PasswordHash)
}

/// Check `password` against a stored credential. A credential that does
/// not parse never verifies.
#[must_use]
pub fn verify_password(password: &str, credential: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(credential) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
