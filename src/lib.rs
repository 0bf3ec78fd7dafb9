//! Credential demo - password hashing and SSH public-key extraction
//!
//! This crate provides:
//! - Argon2id hashing of a password with a fresh random salt
//! - bcrypt hashing and verification
//! - Extraction of the authorized_keys line from a private key held in the
//!   `SSH_PRIVATE_KEY` environment variable

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod ssh;
pub mod user;

pub use error::{DemoError, Result};
