//! Password hashing primitives
//!
//! This module provides:
//! - OS-backed salt generation
//! - Argon2id hashing with caller-supplied salt
//! - bcrypt hashing and verification (self-salted)
//! - Zero-on-drop storage for decoded private key material
//!
//! The Argon2 and bcrypt paths are independent of each other.

mod argon;
mod bcrypt_hash;
mod salt;
mod secure_bytes;

pub use argon::{hash_argon2, hash_argon2_with, Argon2Params, HASH_LEN};
pub use bcrypt_hash::{
    hash_bcrypt, hash_bcrypt_with_cost, try_verify_password, verify_password,
    BCRYPT_DEFAULT_COST,
};
pub use salt::{generate_salt, generate_salt_of, SALT_LEN};
pub use secure_bytes::SecureBytes;
