use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(String),

    #[error("Malformed bcrypt hash: {0}")]
    MalformedHash(String),

    #[error("Failed to parse SSH private key: {0}")]
    KeyParse(String),

    #[error("SSH private key is encrypted and no passphrase was supplied")]
    KeyEncrypted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DemoError {
    /// Whether the driver must stop on this error.
    ///
    /// Key parsing only affects the optional SSH step, so it is logged and
    /// skipped; everything else ends the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, DemoError::KeyParse(_) | DemoError::KeyEncrypted)
    }
}
