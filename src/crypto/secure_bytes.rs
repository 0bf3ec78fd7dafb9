//! Zero-on-drop buffer for secret bytes
//!
//! Holds the DER body of a decoded private key while it is parsed. The
//! buffer is wiped when dropped and never printed by `Debug`.

use std::ops::{Deref, DerefMut};
use zeroize::Zeroize;

#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SecureBytes(Vec<u8>);

impl SecureBytes {
    /// Wrap an existing vector
    pub fn new(data: Vec<u8>) -> Self {
        let secure = Self(data);
        secure.lock_memory();
        secure
    }

    /// Create a zeroed buffer of `len` bytes, ready to be written into
    pub fn zeroed(len: usize) -> Self {
        Self::new(vec![0u8; len])
    }

    /// Keep the buffer out of swap (best effort, may fail without privileges)
    #[cfg(unix)]
    fn lock_memory(&self) {
        if self.0.is_empty() {
            return;
        }
        unsafe {
            libc::mlock(self.0.as_ptr() as *const libc::c_void, self.0.len());
        }
    }

    #[cfg(not(unix))]
    fn lock_memory(&self) {}

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for SecureBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SecureBytes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl std::fmt::Debug for SecureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureBytes")
            .field("len", &self.0.len())
            .field("data", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_buffer() {
        let secure = SecureBytes::zeroed(32);
        assert_eq!(secure.len(), 32);
        assert!(secure.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_writable_through_deref() {
        let mut secure = SecureBytes::zeroed(4);
        secure.copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(&*secure, &[0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_debug_is_redacted() {
        let secure = SecureBytes::new(vec![0x41; 8]);
        let printed = format!("{:?}", secure);

        assert!(printed.contains("REDACTED"));
        assert!(!printed.contains("65"));
    }

    #[test]
    fn test_zeroize_clears_contents() {
        let mut secure = SecureBytes::new(vec![1, 2, 3]);
        secure.zeroize();
        assert!(secure.is_empty());
    }
}
