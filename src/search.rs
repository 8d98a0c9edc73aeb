//! Exhaustive minimax search with a transposition memo
//!
//! The search answers one question per position: which player wins with
//! perfect play. It is a short-circuiting OR over the mover's moves:
//! - If the opponent can never play again, the opponent has won.
//! - Otherwise the mover wins if any move leads to a position the mover wins.
//! - A mover with moves available but no winning one loses.
//! - A mover with no move at all passes, and the same table is solved with
//!   the opponent to move.
//!
//! One `TableState` is shared by the whole recursion: each move is applied in
//! place, searched, and taken back before the next one is tried.

use super::bounds::{has_remaining_play, PlayerBounds};
use super::hands::Hands;
use super::memo::Memo;
use super::moves::{suit_moves, Move};
use super::table::TableState;
use super::types::*;

/// Search configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Consult and fill the transposition memo. Without it every position is
    /// re-derived from scratch, which is only feasible for tiny decks.
    pub memo: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions { memo: true }
    }
}

/// Counters accumulated over the searches of one deal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions expanded (memo misses)
    pub nodes: u64,
    /// Positions answered from the memo
    pub memo_hits: u64,
    /// Positions decided by the terminal test
    pub terminals: u64,
    /// Positions where the mover had to pass
    pub passes: u64,
}

/// A move to play and the winner it leads to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recommendation {
    pub mv: Move,
    pub winner: Player,
}

/// The search engine for one root query
pub struct Search<'a> {
    // Fixed info (shared across all depths)
    hands: &'a Hands,
    bounds: &'a [PlayerBounds; NUM_PLAYERS],
    options: SearchOptions,

    // Mutated in place and restored after every move
    table: TableState,

    memo: &'a mut Memo,
    stats: &'a mut SearchStats,
}

impl<'a> Search<'a> {
    pub fn new(
        hands: &'a Hands,
        bounds: &'a [PlayerBounds; NUM_PLAYERS],
        table: TableState,
        memo: &'a mut Memo,
        options: SearchOptions,
        stats: &'a mut SearchStats,
    ) -> Self {
        Search {
            hands,
            bounds,
            options,
            table,
            memo,
            stats,
        }
    }

    /// Winner of the position with `player` to move
    pub fn verdict(&mut self, player: Player) -> Player {
        self.cached_verdict(player, false)
    }

    /// Best move for `player` and the winner it leads to.
    ///
    /// Returns the first winning move in enumeration order, or the last move
    /// tried if every move loses. `None` if the position is terminal or the
    /// player has no move and must pass.
    pub fn best_move(&mut self, player: Player) -> Option<Recommendation> {
        self.stats.nodes += 1;
        if self.is_terminal(player) {
            self.stats.terminals += 1;
            self.remember(player, opponent(player));
            return None;
        }

        let mut last = None;
        for suit in 0..self.table.geometry().suit_count {
            let moves = suit_moves(self.hands, &self.table, player, suit);
            for mv in moves.iter() {
                let winner = self.with_move(&mv, |s| s.cached_verdict(opponent(player), false));
                let recommendation = Recommendation { mv, winner };
                if winner == player {
                    self.remember(player, player);
                    return Some(recommendation);
                }
                last = Some(recommendation);
            }
        }

        if last.is_some() {
            self.remember(player, opponent(player));
        }
        last
    }

    /// Check whether the opponent of `player` is out of play
    #[inline]
    fn is_terminal(&self, player: Player) -> bool {
        let opp = opponent(player);
        !has_remaining_play(self.hands, &self.bounds[opp], &self.table, opp)
    }

    /// Apply a move, run `f`, and take the move back
    #[inline]
    fn with_move<R>(&mut self, mv: &Move, f: impl FnOnce(&mut Self) -> R) -> R {
        self.table.apply(mv);
        let result = f(self);
        self.table.undo(mv);
        result
    }

    #[inline]
    fn remember(&mut self, player: Player, winner: Player) {
        if self.options.memo {
            self.memo.store(self.table.memo_index(player), winner);
        }
    }

    fn cached_verdict(&mut self, player: Player, after_pass: bool) -> Player {
        if self.options.memo {
            if let Some(winner) = self.memo.lookup(self.table.memo_index(player)) {
                self.stats.memo_hits += 1;
                return winner;
            }
        }
        let winner = self.calculate_verdict(player, after_pass);
        self.remember(player, winner);
        winner
    }

    fn calculate_verdict(&mut self, player: Player, after_pass: bool) -> Player {
        self.stats.nodes += 1;
        #[cfg(feature = "debug_search")]
        eprintln!("calculate_verdict player={} table={:?}", player, self.table);

        if self.is_terminal(player) {
            self.stats.terminals += 1;
            return opponent(player);
        }

        let mut has_move = false;
        for suit in 0..self.table.geometry().suit_count {
            let moves = suit_moves(self.hands, &self.table, player, suit);
            for mv in moves.iter() {
                has_move = true;
                let winner = self.with_move(&mv, |s| s.cached_verdict(opponent(player), false));
                #[cfg(feature = "debug_search")]
                eprintln!("  player={} {:?} -> winner={}", player, mv, winner);
                if winner == player {
                    return player;
                }
            }
        }
        if has_move {
            return opponent(player);
        }

        // With complementary hands the opponent always has a move here: the
        // rank next to any window their bounds reach past belongs to someone.
        assert!(
            !after_pass,
            "both players are stuck with play remaining at {:?}",
            self.table
        );
        self.stats.passes += 1;
        self.cached_verdict(opponent(player), true)
    }
}
