//! Fair RPS Core Library
//!
//! This crate provides the rules and cryptographic primitives for a
//! rock-paper-scissors game generalized to any odd number of moves, where the
//! computer commits to its move with an HMAC before the player answers.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{
    verify, Commitment, CommitmentScheme, HmacSha256, MacDigest, MacFunction, Reveal, SecretKey,
};
pub use error::GameError;
pub use games::{Move, MoveSet, Outcome, OutcomeTable, WinnerResolver};
pub use protocol::{GameSession, RejectedMove, RoundReport, SessionId};
