//! Game session glue and protocol types.

mod session;
mod types;

pub use session::{GameSession, RejectedMove, RoundReport};
pub use types::SessionId;
