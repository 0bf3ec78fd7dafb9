//! bcrypt password hashing and verification
//!
//! bcrypt generates and embeds its own salt, so the encoded string is all
//! that needs to be stored. Comparison of the re-derived hash is done by the
//! `bcrypt` crate in constant time.

use tracing::debug;

use crate::error::{DemoError, Result};

/// Default work factor (2^10 rounds)
pub const BCRYPT_DEFAULT_COST: u32 = 10;

/// Hash a password with the default cost
pub fn hash_bcrypt(password: &str) -> Result<String> {
    hash_bcrypt_with_cost(password, BCRYPT_DEFAULT_COST)
}

/// Hash a password with an explicit cost (4..=31)
///
/// # Errors
/// Returns `Hashing` if the cost is out of range or the salt cannot be
/// generated.
pub fn hash_bcrypt_with_cost(password: &str, cost: u32) -> Result<String> {
    debug!(cost, "deriving bcrypt hash");
    bcrypt::hash(password, cost).map_err(|e| DemoError::Hashing(format!("bcrypt: {}", e)))
}

/// Check a password against a stored bcrypt hash
///
/// Returns `false` both for a wrong password and for a hash that cannot be
/// parsed; callers only learn whether the password matched.
pub fn verify_password(password: &str, hash: &str) -> bool {
    try_verify_password(password, hash).unwrap_or(false)
}

/// Like [`verify_password`], but reports malformed hashes as an error
pub fn try_verify_password(password: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(password, hash).map_err(|e| DemoError::MalformedHash(e.to_string()))
}
