//! Run configuration
//!
//! Defaults reproduce the fixed demo run. `main` overrides them from CLI
//! flags; secrets from the environment are read by the `ssh` module.

use secrecy::SecretString;

use crate::crypto::{Argon2Params, BCRYPT_DEFAULT_COST};

pub const DEFAULT_USERNAME: &str = "testuser";
pub const DEFAULT_PASSWORD: &str = "SecurePassword123!";
pub const DEFAULT_WRONG_PASSWORD: &str = "WrongPassword";

#[derive(Debug)]
pub struct DemoConfig {
    pub username: String,
    /// Password hashed by both algorithms
    pub password: SecretString,
    /// Password expected to fail bcrypt verification
    pub wrong_password: SecretString,
    pub bcrypt_cost: u32,
    pub argon2: Argon2Params,
    /// Look for `SSH_PRIVATE_KEY` in the environment
    pub ssh_from_env: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            password: SecretString::new(DEFAULT_PASSWORD.to_string()),
            wrong_password: SecretString::new(DEFAULT_WRONG_PASSWORD.to_string()),
            bcrypt_cost: BCRYPT_DEFAULT_COST,
            argon2: Argon2Params::default(),
            ssh_from_env: true,
        }
    }
}
