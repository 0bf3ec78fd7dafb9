//! SSH public-key extraction from an existing private key

mod extract;

pub use extract::{
    extract_public_key, extract_public_key_from_env, KeyFormat, PASSPHRASE_ENV, PRIVATE_KEY_ENV,
};
