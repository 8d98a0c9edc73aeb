//! One deal: the hand partition and everything derived from it once

use super::bounds::{has_remaining_play, PlayerBounds};
use super::error::SolverError;
use super::hands::Hands;
use super::moves::{find_move, legal_moves, suit_moves, Move};
use super::table::GameState;
use super::types::*;

/// Immutable facts of a deal
#[derive(Clone, Debug)]
pub struct Deal {
    hands: Hands,
    bounds: [PlayerBounds; NUM_PLAYERS],
    first_player: Player,
}

impl Deal {
    /// Derive bounds and the starting player from the hands
    pub fn new(hands: Hands) -> Self {
        let geometry = *hands.geometry();
        let bounds = [
            PlayerBounds::from_hand(&hands, PLAYER_A),
            PlayerBounds::from_hand(&hands, PLAYER_B),
        ];
        let first_player = hands.owner(geometry.opening_suit, geometry.anchor());
        Deal {
            hands,
            bounds,
            first_player,
        }
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        self.hands.geometry()
    }

    #[inline]
    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    #[inline]
    pub fn bounds(&self) -> &[PlayerBounds; NUM_PLAYERS] {
        &self.bounds
    }

    /// Holder of the opening suit's anchor
    #[inline]
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// All suits unopened, first player to move
    pub fn initial_state(&self) -> GameState {
        GameState::new(*self.geometry(), self.first_player)
    }

    /// Check that a state belongs to this deal's geometry
    pub fn check_state(&self, state: &GameState) -> Result<(), SolverError> {
        if state.to_move >= NUM_PLAYERS {
            return Err(SolverError::InvalidPlayer(state.to_move));
        }
        if state.table.geometry() != self.geometry() {
            return Err(SolverError::StateMismatch);
        }
        Ok(())
    }

    fn check_index(&self, suit: Suit, rank: Rank) -> Result<(), SolverError> {
        let geometry = self.geometry();
        if suit >= geometry.suit_count || rank >= geometry.suit_window() {
            return Err(SolverError::InvalidIndex { suit, rank });
        }
        Ok(())
    }

    /// Check whether the opponent of the mover could ever play again
    pub fn opponent_has_remaining_play(&self, state: &GameState) -> bool {
        let opp = opponent(state.to_move);
        has_remaining_play(&self.hands, &self.bounds[opp], &state.table, opp)
    }

    /// Moves available to the mover, suits in index order
    pub fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        legal_moves(&self.hands, &state.table, state.to_move)
    }

    /// Check whether the mover has any move, without searching
    pub fn has_any_legal_move(&self, state: &GameState) -> bool {
        self.opponent_has_remaining_play(state)
            && (0..self.geometry().suit_count)
                .any(|suit| !suit_moves(&self.hands, &state.table, state.to_move, suit).is_empty())
    }

    /// Check whether the mover may play `(suit, rank)` now
    pub fn is_move_legal(
        &self,
        state: &GameState,
        suit: Suit,
        rank: Rank,
    ) -> Result<bool, SolverError> {
        self.check_state(state)?;
        self.check_index(suit, rank)?;
        Ok(find_move(&self.hands, &state.table, state.to_move, suit, rank).is_some())
    }

    /// Play `(suit, rank)` for the mover. The mover is not switched.
    pub fn apply_move(
        &self,
        state: &mut GameState,
        suit: Suit,
        rank: Rank,
    ) -> Result<Move, SolverError> {
        self.check_state(state)?;
        self.check_index(suit, rank)?;
        let mv = find_move(&self.hands, &state.table, state.to_move, suit, rank)
            .ok_or(SolverError::IllegalMove { suit, rank })?;
        state.table.apply(&mv);
        log::trace!(
            "player {} plays {} -> {}",
            player_name(state.to_move),
            mv.name(self.geometry()),
            state.table
        );
        Ok(mv)
    }
}
