//! Error type for solver operations

use super::types::{Player, Rank, Suit};
use thiserror::Error;

/// Precondition violations reported by the solver.
///
/// The search itself cannot fail: every error comes from a caller handing in
/// a malformed deal, an out-of-range card, or a move the rules forbid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("no deal has been initialized")]
    Uninitialized,
    #[error("invalid geometry: {0}")]
    InvalidGeometry(&'static str),
    #[error("invalid hand: {0}")]
    InvalidHand(String),
    #[error("state was built for a different geometry than the deal")]
    StateMismatch,
    #[error("no such player: {0}")]
    InvalidPlayer(Player),
    #[error("card index out of range: suit {suit}, rank {rank}")]
    InvalidIndex { suit: Suit, rank: Rank },
    #[error("illegal move: suit {suit}, rank {rank}")]
    IllegalMove { suit: Suit, rank: Rank },
}
