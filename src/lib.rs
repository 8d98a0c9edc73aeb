//! Sevens Solver - exact two-player solver for the card game Sevens
//!
//! Each suit is laid out on the table as a contiguous run of ranks that
//! starts from the anchor card (the seven in the standard game) and grows one
//! card at a time at either end. Players alternate adding a card they hold;
//! a player with nothing playable passes. The first player to empty their
//! hand wins.
//!
//! The solver decides, for any reachable position, which player wins under
//! perfect play, and which move achieves it. It uses:
//! - Exhaustive minimax over an OR of the mover's moves
//! - Per-player rank bounds for an O(suits) end-of-game test
//! - A direct-addressed transposition memo keyed by the table state
//!
//! # Example
//!
//! ```
//! use sevens_solver::{Geometry, Solver, PLAYER_A};
//!
//! // One suit of three cards: 6, 7 and 8
//! let geometry = Geometry::new(2, 2, 1)?;
//! let mut solver = Solver::new(geometry)?;
//!
//! // Player A holds only the seven, player B the rest
//! let first = solver.initialize_deal(&[0b010])?;
//! assert_eq!(first, PLAYER_A);
//!
//! let state = solver.initial_state()?;
//! assert_eq!(solver.query_verdict(&state)?, PLAYER_A);
//! # Ok::<(), sevens_solver::SolverError>(())
//! ```

pub mod bounds;
pub mod cards;
mod deal;
mod error;
mod hands;
mod memo;
pub mod moves;
mod search;
mod solver;
pub mod table;
pub mod types;

pub use bounds::{has_remaining_play, PlayerBounds, SuitBound};
pub use cards::Cards;
pub use deal::Deal;
pub use error::SolverError;
pub use hands::Hands;
pub use memo::Memo;
pub use moves::{legal_moves, Move, Side};
pub use search::{Recommendation, Search, SearchOptions, SearchStats};
pub use solver::Solver;
pub use table::{GameState, TableState};
pub use types::{opponent, Geometry, Player, Rank, Suit, NUM_PLAYERS, PLAYER_A, PLAYER_B};
pub use types::{CLUBS, DIAMONDS, HEARTS, SPADES};
