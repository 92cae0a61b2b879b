//! Commit-reveal scheme over HMAC.
//!
//! The computer draws a fresh key, publishes `HMAC(key, move)` before the
//! player answers, and discloses the key and move afterwards. Anyone can then
//! recompute the HMAC to confirm the move was fixed in advance.

use super::hex_serde;
use super::key::SecretKey;
use super::mac::{HmacSha256, MacDigest, MacFunction};
use crate::error::{GameError, Result};
use crate::games::{Move, MoveSet};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Pre-reveal view of a commitment. Only the MAC is public.
pub struct Commitment {
    key: SecretKey,
    committed_move: Move,
    mac: MacDigest,
}

impl Commitment {
    /// The digest shown to the player before they choose
    pub fn mac(&self) -> &MacDigest {
        &self.mac
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commitment").field("mac", &self.mac).finish()
    }
}

/// Post-reveal view: key, move and MAC, ready for publication
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reveal {
    #[serde(rename = "move")]
    committed_move: Move,
    #[serde(serialize_with = "hex_serde::serialize")]
    key: SecretKey,
    #[serde(serialize_with = "hex_serde::serialize")]
    mac: MacDigest,
}

impl Reveal {
    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    pub fn committed_move(&self) -> &Move {
        &self.committed_move
    }

    pub fn mac(&self) -> &MacDigest {
        &self.mac
    }

    /// Recompute the MAC from the disclosed key and move
    pub fn verify<M: MacFunction>(&self, mac_fn: &M) -> bool {
        mac_fn.verify(
            self.key.as_bytes(),
            self.committed_move.to_bytes(),
            self.mac.as_bytes(),
        )
    }
}

/// Check published values: does `mac` equal `MAC(key, label)`?
pub fn verify<M: MacFunction>(mac_fn: &M, key: &[u8], label: &str, mac: &[u8]) -> bool {
    mac_fn.verify(key, label.as_bytes(), mac)
}

/// Commits to moves with an injected random source and MAC
pub struct CommitmentScheme<R = OsRng, M = HmacSha256> {
    rng: R,
    mac_fn: M,
}

impl CommitmentScheme {
    /// Operating-system randomness and HMAC-SHA256
    pub fn new() -> Self {
        Self::with_capabilities(OsRng, HmacSha256)
    }
}

impl Default for CommitmentScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, M> CommitmentScheme<R, M>
where
    R: RngCore + CryptoRng,
    M: MacFunction,
{
    pub fn with_capabilities(rng: R, mac_fn: M) -> Self {
        Self { rng, mac_fn }
    }

    pub fn mac_fn(&self) -> &M {
        &self.mac_fn
    }

    /// Pick a move uniformly at random
    pub fn choose_move(&mut self, moves: &MoveSet) -> Result<Move> {
        let count = moves.len() as u64;
        // Only values below `zone` map evenly onto indices
        let zone = u64::MAX - u64::MAX % count;

        loop {
            let mut buf = [0u8; 8];
            self.rng.try_fill_bytes(&mut buf)?;
            let value = u64::from_le_bytes(buf);
            if value < zone {
                let index = (value % count) as usize;
                return moves.by_index(index).ok_or_else(|| {
                    GameError::InvalidMoveSet(format!("no move at position {}", index))
                });
            }
        }
    }

    /// Draw a fresh key and commit to `committed_move`
    pub fn commit(&mut self, committed_move: &Move) -> Result<Commitment> {
        let key = SecretKey::random(&mut self.rng)?;
        Ok(self.commit_with_key(key, committed_move))
    }

    /// Commit with a caller-supplied key
    pub fn commit_with_key(&self, key: SecretKey, committed_move: &Move) -> Commitment {
        let mac = self
            .mac_fn
            .compute(key.as_bytes(), committed_move.to_bytes());
        debug!(mac = %mac, "committed to move");

        Commitment {
            key,
            committed_move: committed_move.clone(),
            mac,
        }
    }

    /// Disclose key and move
    pub fn reveal(&self, commitment: Commitment) -> Reveal {
        debug!(mac = %commitment.mac, "revealing commitment");

        Reveal {
            committed_move: commitment.committed_move,
            key: commitment.key,
            mac: commitment.mac,
        }
    }
}
