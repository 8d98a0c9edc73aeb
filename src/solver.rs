//! Solver session
//!
//! Owns the current deal and the memo that caches verdicts for it. Every
//! query made during one game shares the memo, so after the first full solve
//! later queries along the played line are answered almost for free.

use super::deal::Deal;
use super::error::SolverError;
use super::hands::Hands;
use super::memo::Memo;
use super::moves::Move;
use super::search::{Recommendation, Search, SearchOptions, SearchStats};
use super::table::GameState;
use super::types::*;

/// Exact solver for one geometry
pub struct Solver {
    geometry: Geometry,
    options: SearchOptions,
    deal: Option<Deal>,
    memo: Memo,
    stats: SearchStats,
}

impl Solver {
    /// Create a solver with the default options
    pub fn new(geometry: Geometry) -> Result<Self, SolverError> {
        Self::with_options(geometry, SearchOptions::default())
    }

    /// Create a solver with explicit search options
    pub fn with_options(geometry: Geometry, options: SearchOptions) -> Result<Self, SolverError> {
        let geometry = geometry.validated()?;
        Ok(Solver {
            geometry,
            options,
            deal: None,
            memo: Memo::new(&geometry),
            stats: SearchStats::default(),
        })
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Install a deal from player A's per-suit rank bits.
    ///
    /// Player B receives the rest of the deck. The memo and statistics are
    /// reset. Returns the player who moves first.
    pub fn initialize_deal(&mut self, hand_a: &[u16]) -> Result<Player, SolverError> {
        let hands = Hands::from_suit_bits(self.geometry, hand_a)?;
        self.initialize_hands(hands)
    }

    /// Install a deal from already-built hands
    pub fn initialize_hands(&mut self, hands: Hands) -> Result<Player, SolverError> {
        if *hands.geometry() != self.geometry {
            return Err(SolverError::InvalidHand(
                "hands were dealt for a different geometry".to_string(),
            ));
        }
        let deal = Deal::new(hands);
        let first_player = deal.first_player();
        log::debug!(
            "new deal: {:?} bounds={:?} first player {}",
            deal.hands(),
            deal.bounds(),
            player_name(first_player)
        );

        self.memo.clear();
        self.stats = SearchStats::default();
        self.deal = Some(deal);
        Ok(first_player)
    }

    /// The current deal
    pub fn deal(&self) -> Result<&Deal, SolverError> {
        self.deal.as_ref().ok_or(SolverError::Uninitialized)
    }

    /// Starting position of the current deal
    pub fn initial_state(&self) -> Result<GameState, SolverError> {
        Ok(self.deal()?.initial_state())
    }

    /// Winner of a position under perfect play
    pub fn query_verdict(&mut self, state: &GameState) -> Result<Player, SolverError> {
        let player = state.to_move;
        let winner = self.run(state, |search| search.verdict(player))?;
        debug_assert!(winner < NUM_PLAYERS);
        Ok(winner)
    }

    /// Move the mover should play, with the winner it leads to.
    ///
    /// `None` when the position is already decided or the mover must pass.
    pub fn query_best_move(
        &mut self,
        state: &GameState,
    ) -> Result<Option<Recommendation>, SolverError> {
        let player = state.to_move;
        self.run(state, |search| search.best_move(player))
    }

    /// Check whether the mover may play `(suit, rank)`
    pub fn is_move_legal(
        &self,
        state: &GameState,
        suit: Suit,
        rank: Rank,
    ) -> Result<bool, SolverError> {
        self.deal()?.is_move_legal(state, suit, rank)
    }

    /// Play `(suit, rank)` for the mover; the caller switches players afterwards
    pub fn apply_move(
        &self,
        state: &mut GameState,
        suit: Suit,
        rank: Rank,
    ) -> Result<Move, SolverError> {
        self.deal()?.apply_move(state, suit, rank)
    }

    /// Check whether the mover has a move to play (same as a best move existing)
    pub fn has_any_legal_move(&self, state: &GameState) -> Result<bool, SolverError> {
        let deal = self.deal()?;
        deal.check_state(state)?;
        Ok(deal.has_any_legal_move(state))
    }

    /// Moves available to the mover, suits in index order
    pub fn legal_moves(&self, state: &GameState) -> Result<Vec<Move>, SolverError> {
        let deal = self.deal()?;
        deal.check_state(state)?;
        Ok(deal.legal_moves(state))
    }

    /// Check whether the opponent of the mover could ever play again.
    /// When false the game is over and the opponent has won.
    pub fn opponent_has_remaining_play(&self, state: &GameState) -> Result<bool, SolverError> {
        let deal = self.deal()?;
        deal.check_state(state)?;
        Ok(deal.opponent_has_remaining_play(state))
    }

    /// Statistics accumulated since the deal was installed
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of positions resolved in the memo
    #[inline]
    pub fn memo_entries(&self) -> usize {
        self.memo.resolved()
    }

    fn run<R>(
        &mut self,
        state: &GameState,
        f: impl FnOnce(&mut Search<'_>) -> R,
    ) -> Result<R, SolverError> {
        let deal = self.deal.as_ref().ok_or(SolverError::Uninitialized)?;
        deal.check_state(state)?;

        let start = std::time::Instant::now();
        let before = self.stats;
        let mut search = Search::new(
            deal.hands(),
            deal.bounds(),
            state.table,
            &mut self.memo,
            self.options,
            &mut self.stats,
        );
        let result = f(&mut search);
        log::debug!(
            "search from {:?}: {} nodes, {} memo hits, {}/{} memo entries, {:.3}s",
            state,
            self.stats.nodes - before.nodes,
            self.stats.memo_hits - before.memo_hits,
            self.memo.resolved(),
            self.memo.capacity(),
            start.elapsed().as_secs_f64()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Side;

    #[test]
    fn test_uninitialized_queries_fail() {
        let mut solver = Solver::new(Geometry::new(2, 2, 1).unwrap()).unwrap();
        let state = GameState::new(*solver.geometry(), PLAYER_A);
        assert_eq!(solver.query_verdict(&state), Err(SolverError::Uninitialized));
        assert_eq!(solver.query_best_move(&state), Err(SolverError::Uninitialized));
        assert_eq!(solver.is_move_legal(&state, CLUBS, 1), Err(SolverError::Uninitialized));
        assert_eq!(solver.has_any_legal_move(&state), Err(SolverError::Uninitialized));
        assert_eq!(solver.initial_state(), Err(SolverError::Uninitialized));
        let mut state = state;
        assert_eq!(
            solver.apply_move(&mut state, CLUBS, 1),
            Err(SolverError::Uninitialized)
        );
    }

    #[test]
    fn test_state_from_other_geometry_rejected() {
        let mut solver = Solver::new(Geometry::new(2, 2, 1).unwrap()).unwrap();
        solver.initialize_deal(&[0b010]).unwrap();
        let foreign = GameState::new(Geometry::new(2, 2, 2).unwrap(), PLAYER_A);
        assert_eq!(solver.query_verdict(&foreign), Err(SolverError::StateMismatch));
        assert_eq!(solver.query_best_move(&foreign), Err(SolverError::StateMismatch));
        assert_eq!(solver.legal_moves(&foreign), Err(SolverError::StateMismatch));
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let bad = Geometry {
            suit_count: 6,
            ..Geometry::STANDARD
        };
        assert!(matches!(Solver::new(bad), Err(SolverError::InvalidGeometry(_))));
    }

    #[test]
    fn test_hands_for_other_geometry_rejected() {
        let mut solver = Solver::new(Geometry::new(2, 2, 1).unwrap()).unwrap();
        let hands = Hands::parse(Geometry::new(2, 2, 2).unwrap(), "7.7").unwrap();
        assert!(matches!(
            solver.initialize_hands(hands),
            Err(SolverError::InvalidHand(_))
        ));
    }

    #[test]
    fn test_initialize_resets_memo() {
        let mut solver = Solver::new(Geometry::new(2, 2, 2).unwrap()).unwrap();
        solver.initialize_deal(&[0b010, 0b101]).unwrap();
        let state = solver.initial_state().unwrap();
        solver.query_verdict(&state).unwrap();
        assert!(solver.memo_entries() > 0);
        assert!(solver.stats().nodes > 0);

        solver.initialize_deal(&[0b101, 0b010]).unwrap();
        assert_eq!(solver.memo_entries(), 0);
        assert_eq!(solver.stats(), SearchStats::default());
    }

    #[test]
    fn test_verdict_and_best_move_agree() {
        let mut solver = Solver::new(Geometry::new(3, 2, 2).unwrap()).unwrap();
        solver.initialize_deal(&[0b0110, 0b1001]).unwrap();
        let state = solver.initial_state().unwrap();
        let verdict = solver.query_verdict(&state).unwrap();
        let best = solver.query_best_move(&state).unwrap().unwrap();
        assert_eq!(best.winner, verdict);
        assert!(solver.is_move_legal(&state, best.mv.suit, best.mv.rank).unwrap());
    }

    #[test]
    fn test_play_through_applied_moves() {
        let mut solver = Solver::new(Geometry::new(2, 2, 1).unwrap()).unwrap();
        // A: 7 and 8 of clubs; B: the 6
        let first = solver.initialize_deal(&[0b110]).unwrap();
        assert_eq!(first, PLAYER_A);

        let mut state = solver.initial_state().unwrap();
        assert!(solver.opponent_has_remaining_play(&state).unwrap());
        let mv = solver.apply_move(&mut state, CLUBS, 1).unwrap();
        assert_eq!(mv, Move::new(CLUBS, Side::Open, 1));
        state.switch_players();

        // B extends downwards, A still holds the 8
        assert!(solver.opponent_has_remaining_play(&state).unwrap());
        assert_eq!(
            solver.legal_moves(&state).unwrap(),
            vec![Move::new(CLUBS, Side::Low, 0)]
        );
        solver.apply_move(&mut state, CLUBS, 0).unwrap();
        state.switch_players();

        // B has played out
        assert!(!solver.opponent_has_remaining_play(&state).unwrap());
        assert_eq!(solver.query_verdict(&state).unwrap(), PLAYER_B);
        assert_eq!(solver.query_best_move(&state).unwrap(), None);
        assert!(!solver.has_any_legal_move(&state).unwrap());
    }
}
