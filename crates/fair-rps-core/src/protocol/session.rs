//! One round of play: commit, resolve, reveal.

use super::SessionId;
use crate::crypto::{Commitment, CommitmentScheme, HmacSha256, MacDigest, MacFunction, Reveal};
use crate::error::{GameError, Result};
use crate::games::{Move, Outcome, WinnerResolver};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

/// A single game between the player and the computer.
///
/// The computer's move is chosen and committed when the session starts, so
/// [`mac`](Self::mac) can be shown before the player picks. [`play`](Self::play)
/// consumes the session and discloses the commitment, unless the move is
/// rejected, in which case the session comes back still sealed.
pub struct GameSession<R = OsRng, M = HmacSha256> {
    id: SessionId,
    resolver: WinnerResolver,
    scheme: CommitmentScheme<R, M>,
    commitment: Commitment,
}

/// Everything the player needs after a round, including the disclosed key
#[derive(Clone, Debug, Serialize)]
pub struct RoundReport {
    pub session_id: SessionId,
    pub player_move: Move,
    pub computer_move: Move,
    /// From the player's side: `FirstWins` means the player won
    pub outcome: Outcome,
    pub reveal: Reveal,
}

/// A player move the session refused; the session has not been revealed
pub struct RejectedMove<R = OsRng, M = HmacSha256> {
    pub session: GameSession<R, M>,
    pub error: GameError,
}

impl<R, M> fmt::Debug for RejectedMove<R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RejectedMove")
            .field("session_id", &self.session.id)
            .field("error", &self.error)
            .finish()
    }
}

impl<R, M> From<RejectedMove<R, M>> for GameError {
    fn from(rejected: RejectedMove<R, M>) -> Self {
        rejected.error
    }
}

impl GameSession {
    /// Start a session with operating-system randomness and HMAC-SHA256
    pub fn start(resolver: WinnerResolver) -> Result<Self> {
        Self::with_scheme(resolver, CommitmentScheme::new())
    }
}

impl<R, M> GameSession<R, M>
where
    R: RngCore + CryptoRng,
    M: MacFunction,
{
    pub fn with_scheme(resolver: WinnerResolver, mut scheme: CommitmentScheme<R, M>) -> Result<Self> {
        let id = SessionId::new();
        let computer_move = scheme.choose_move(resolver.moves())?;
        let commitment = scheme.commit(&computer_move)?;

        info!(
            session_id = %id,
            moves = resolver.moves().len(),
            mac = %commitment.mac(),
            "game session started"
        );

        Ok(Self {
            id,
            resolver,
            scheme,
            commitment,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn resolver(&self) -> &WinnerResolver {
        &self.resolver
    }

    /// The commitment to publish before the player chooses
    pub fn mac(&self) -> &MacDigest {
        self.commitment.mac()
    }

    /// Resolve the player's move against the committed one and reveal
    pub fn play(self, player_move: &str) -> std::result::Result<RoundReport, RejectedMove<R, M>> {
        let player_move = match self.resolver.moves().get(player_move) {
            Ok(player_move) => player_move,
            Err(error) => {
                warn!(session_id = %self.id, %error, "player move rejected");
                return Err(RejectedMove {
                    session: self,
                    error,
                });
            }
        };

        let reveal = self.scheme.reveal(self.commitment);
        let computer_move = reveal.committed_move().clone();
        let outcome = self.resolver.judge_members(&player_move, &computer_move);

        info!(
            session_id = %self.id,
            player_move = %player_move,
            computer_move = %computer_move,
            outcome = %outcome,
            "round resolved"
        );

        Ok(RoundReport {
            session_id: self.id,
            player_move,
            computer_move,
            outcome,
            reveal,
        })
    }
}
