//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - SecretKey, the 256-bit HMAC key drawn per session
//! - MacFunction and its HMAC-SHA256 implementation
//! - CommitmentScheme with its pre-reveal and post-reveal views

mod commitment;
mod hex_serde;
mod key;
mod mac;

pub use commitment::{verify, Commitment, CommitmentScheme, Reveal};
pub use key::{SecretKey, KEY_LEN};
pub use mac::{HmacSha256, MacDigest, MacFunction, MAC_LEN};
