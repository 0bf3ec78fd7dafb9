//! Random salt generation
//!
//! Salts come straight from the operating system CSPRNG. The fallible fill
//! is used so that an unavailable or short-reading entropy source surfaces
//! as an error instead of a partially filled buffer.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{DemoError, Result};

/// Salt length in bytes (128 bits)
pub const SALT_LEN: usize = 16;

/// Generate a fresh 16-byte salt
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    fill_random(&mut salt)?;
    Ok(salt)
}

/// Generate a salt of arbitrary length
pub fn generate_salt_of(len: usize) -> Result<Vec<u8>> {
    let mut salt = vec![0u8; len];
    fill_random(&mut salt)?;
    Ok(salt)
}

fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| DemoError::Entropy(e.to_string()))
}
