//! The demonstration run: salt, Argon2id, bcrypt, verification, SSH key
//!
//! Failures in the hashing steps end the run. A key that cannot be parsed
//! only skips the SSH step.

use std::io::Write;

use secrecy::ExposeSecret;
use tracing::{debug, warn};

use crate::config::DemoConfig;
use crate::crypto::{self, generate_salt};
use crate::error::Result;
use crate::ssh;
use crate::user::User;

pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<User> {
    let password = config.password.expose_secret();
    let user = User::new(config.username.as_str());
    debug!(username = %user.username, "starting demo run");

    // Argon2id with our own salt
    let salt = generate_salt()?;
    let user = user.with_salt(salt);

    let argon2_hash = crypto::hash_argon2_with(password, &user.salt, &config.argon2)?;
    writeln!(out, "Argon2 Hash: {}", argon2_hash)?;
    let user = user.with_password_hash(argon2_hash);

    // bcrypt brings its own salt
    let bcrypt_hash = crypto::hash_bcrypt_with_cost(password, config.bcrypt_cost)?;
    writeln!(out, "Bcrypt Hash: {}", bcrypt_hash)?;

    if crypto::verify_password(password, &bcrypt_hash) {
        writeln!(out, "Password verification successful!")?;
    }

    if !crypto::verify_password(config.wrong_password.expose_secret(), &bcrypt_hash) {
        writeln!(out, "Wrong password verification failed as expected")?;
    }

    if config.ssh_from_env {
        extract_ssh_key(out)?;
    }

    Ok(user)
}

fn extract_ssh_key<W: Write>(out: &mut W) -> Result<()> {
    match ssh::extract_public_key_from_env() {
        Ok(Some(public_key)) => writeln!(out, "SSH Public Key: {}", public_key)?,
        Ok(None) => debug!("{} not set, skipping SSH key", ssh::PRIVATE_KEY_ENV),
        Err(e) if !e.is_fatal() => warn!("Failed to extract SSH public key: {}", e),
        Err(e) => return Err(e),
    }
    Ok(())
}
