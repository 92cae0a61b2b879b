//! Secret HMAC key.

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use std::fmt;

/// Key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// Secret key for one commitment.
///
/// `Debug` never prints the key bytes. The hex form is only meant to be shown
/// once the commitment has been revealed.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Draw a fresh key from a secure random source
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; KEY_LEN];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(..)")
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::{OsRng, StdRng};
    use rand::SeedableRng;

    #[test]
    fn test_random_keys_differ() {
        let key1 = SecretKey::random(&mut OsRng).unwrap();
        let key2 = SecretKey::random(&mut OsRng).unwrap();

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_seeded_keys_repeat() {
        let key1 = SecretKey::random(&mut StdRng::seed_from_u64(7)).unwrap();
        let key2 = SecretKey::random(&mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(key1, key2);
    }

    #[test]
    fn test_debug_hides_key() {
        let key = SecretKey::from_bytes([0xab; KEY_LEN]);

        assert_eq!(format!("{:?}", key), "SecretKey(..)");
        assert_eq!(key.to_string(), "ab".repeat(KEY_LEN));
    }
}
