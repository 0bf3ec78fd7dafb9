//! In-memory user record

/// A demo user; lives only for the duration of a run
#[derive(Clone, Default)]
pub struct User {
    pub username: String,
    /// Argon2id hash (base64), empty until hashed
    pub password_hash: String,
    /// Salt used for `password_hash`
    pub salt: Vec<u8>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    pub fn with_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.salt = salt.into();
        self
    }

    pub fn with_password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password_hash = hash.into();
        self
    }

    pub fn has_password(&self) -> bool {
        !self.password_hash.is_empty()
    }
}

// Hashes are not secrets, but they have no business in logs either
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .field("salt_len", &self.salt.len())
            .finish()
    }
}
