//! Argon2id password hashing
//!
//! Derives a raw 32-byte digest from a password and caller-supplied salt and
//! returns it as standard base64. Argon2id is memory-hard, which makes it
//! expensive to attack with GPUs, and the hybrid mode resists side channels.

use argon2::{Algorithm, Argon2, Params, Version};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

use crate::error::{DemoError, Result};

/// Digest length in bytes (256 bits)
pub const HASH_LEN: usize = 32;

/// Argon2id cost parameters
/// - Memory: 64 MB (65536 KB)
/// - Iterations: 1
/// - Parallelism: 4 lanes
const MEMORY_COST: u32 = 65536; // 64 MB
const TIME_COST: u32 = 1;
const PARALLELISM: u32 = 4;

/// Tunable Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Params {
    /// Iterations over memory
    pub time_cost: u32,
    /// Memory size in KiB
    pub memory_cost: u32,
    /// Number of lanes
    pub parallelism: u32,
    /// Digest length in bytes
    pub output_len: usize,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            time_cost: TIME_COST,
            memory_cost: MEMORY_COST,
            parallelism: PARALLELISM,
            output_len: HASH_LEN,
        }
    }
}

impl Argon2Params {
    fn to_argon2(self) -> Result<Params> {
        Params::new(
            self.memory_cost,
            self.time_cost,
            self.parallelism,
            Some(self.output_len),
        )
        .map_err(|e| DemoError::InvalidParams(e.to_string()))
    }
}

/// Hash a password with the default Argon2id parameters
///
/// # Arguments
/// * `password` - The plaintext password
/// * `salt` - Random salt, at least 8 bytes
///
/// # Returns
/// The digest encoded as standard padded base64
pub fn hash_argon2(password: &str, salt: &[u8]) -> Result<String> {
    hash_argon2_with(password, salt, &Argon2Params::default())
}

/// Hash a password with explicit Argon2id parameters
///
/// # Errors
/// - `InvalidParams` when the cost parameters are rejected
/// - `Hashing` when the salt is too short for Argon2
pub fn hash_argon2_with(password: &str, salt: &[u8], params: &Argon2Params) -> Result<String> {
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.to_argon2()?);

    debug!(
        time_cost = params.time_cost,
        memory_kib = params.memory_cost,
        lanes = params.parallelism,
        salt_len = salt.len(),
        "deriving argon2id hash"
    );

    let mut digest = vec![0u8; params.output_len];
    argon2
        .hash_password_into(password.as_bytes(), salt, &mut digest)
        .map_err(|e| DemoError::Hashing(format!("argon2: {}", e)))?;

    Ok(STANDARD.encode(&digest))
}
