use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};

use crate::{AuthnError, AuthnResult};

pub fn hash_password(password: &str) -> AuthnResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AuthnError::Hash(err.to_string()))
}

/// Constant-time check of `password` against a stored PHC string.
pub fn verify_password(password: &str, stored: &str) -> AuthnResult<bool> {
    let parsed = PasswordHash::new(stored).map_err(|err| AuthnError::Hash(err.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
