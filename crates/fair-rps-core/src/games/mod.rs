//! Game rules for N-move rock-paper-scissors.

mod move_set;
mod outcome;
mod resolver;
mod table;

pub use move_set::{Move, MoveSet};
pub use outcome::Outcome;
pub use resolver::WinnerResolver;
pub use table::OutcomeTable;
