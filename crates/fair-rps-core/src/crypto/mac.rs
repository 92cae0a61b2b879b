//! Keyed message authentication.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;

/// Digest length in bytes
pub const MAC_LEN: usize = 32;

/// Fixed-length MAC output
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacDigest([u8; MAC_LEN]);

impl MacDigest {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; MAC_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; MAC_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for MacDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for MacDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacDigest({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for MacDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// A keyed MAC used to bind a commitment to its move
pub trait MacFunction {
    /// Compute the MAC of `message` under `key`
    fn compute(&self, key: &[u8], message: &[u8]) -> MacDigest;

    /// Check a published MAC against `key` and `message`
    fn verify(&self, key: &[u8], message: &[u8], mac: &[u8]) -> bool {
        self.compute(key, message).as_bytes().as_slice() == mac
    }
}

/// HMAC-SHA256 (RFC 2104)
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha256;

impl HmacSha256 {
    fn keyed(key: &[u8]) -> Hmac<Sha256> {
        // HMAC hashes or pads keys of any length
        <Hmac<Sha256> as Mac>::new_from_slice(key).expect("HMAC accepts keys of any length")
    }
}

impl MacFunction for HmacSha256 {
    fn compute(&self, key: &[u8], message: &[u8]) -> MacDigest {
        let mut mac = Self::keyed(key);
        mac.update(message);
        MacDigest(mac.finalize().into_bytes().into())
    }

    fn verify(&self, key: &[u8], message: &[u8], mac: &[u8]) -> bool {
        let mut expected = Self::keyed(key);
        expected.update(message);
        expected.verify_slice(mac).is_ok()
    }
}
