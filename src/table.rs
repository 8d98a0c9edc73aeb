//! Table state: which part of each suit has been played

use super::error::SolverError;
use super::moves::{Move, Side};
use super::types::*;

/// Per-suit played windows.
///
/// `low[suit]` is the lowest rank played, starting at the anchor.
/// `high[suit]` is the offset of the highest rank played above the anchor, or
/// `high_span` while the suit is unopened.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableState {
    geometry: Geometry,
    low: [u8; MAX_SUITS],
    high: [u8; MAX_SUITS],
}

impl TableState {
    /// All suits unopened
    pub fn new(geometry: Geometry) -> Self {
        TableState {
            geometry,
            low: [geometry.anchor() as u8; MAX_SUITS],
            high: [geometry.high_span as u8; MAX_SUITS],
        }
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Lowest-side counter of a suit
    #[inline]
    pub fn low(&self, suit: Suit) -> usize {
        self.low[suit] as usize
    }

    /// Highest-side counter of a suit
    #[inline]
    pub fn high(&self, suit: Suit) -> usize {
        self.high[suit] as usize
    }

    /// Check if the anchor of a suit has been played
    #[inline]
    pub fn is_opened(&self, suit: Suit) -> bool {
        self.high(suit) != self.geometry.high_span
    }

    /// Played ranks of an opened suit, inclusive
    #[inline]
    pub fn played_window(&self, suit: Suit) -> Option<(Rank, Rank)> {
        self.is_opened(suit)
            .then(|| (self.low(suit), self.geometry.anchor() + self.high(suit)))
    }

    /// Rank just below the played window, if it exists
    #[inline]
    pub fn low_extension(&self, suit: Suit) -> Option<Rank> {
        if self.is_opened(suit) {
            self.low(suit).checked_sub(1)
        } else {
            None
        }
    }

    /// Rank just above the played window, if it exists
    #[inline]
    pub fn high_extension(&self, suit: Suit) -> Option<Rank> {
        let rank = self.geometry.low_span + self.high(suit);
        (self.is_opened(suit) && rank < self.geometry.suit_window()).then_some(rank)
    }

    /// Check whether every suit is played out
    pub fn is_complete(&self) -> bool {
        (0..self.geometry.suit_count).all(|suit| {
            self.played_window(suit) == Some((0, self.geometry.suit_window() - 1))
        })
    }

    /// Place a suit's counters directly.
    ///
    /// `high` equal to `high_span` means unopened, in which case `low` must be
    /// the anchor.
    pub fn set_suit(&mut self, suit: Suit, low: usize, high: usize) -> Result<(), SolverError> {
        let g = self.geometry;
        let unopened_ok = high == g.high_span && low == g.anchor();
        let opened_ok = high < g.high_span && low <= g.anchor();
        if suit >= g.suit_count || !(unopened_ok || opened_ok) {
            return Err(SolverError::InvalidIndex { suit, rank: low });
        }
        self.low[suit] = low as u8;
        self.high[suit] = high as u8;
        Ok(())
    }

    /// Play a move onto the table. The move must extend the current window.
    #[inline]
    pub(crate) fn apply(&mut self, mv: &Move) {
        debug_assert!(
            self.extends(mv),
            "{:?} does not extend {:?}",
            mv,
            self
        );
        match mv.side {
            Side::Open => self.high[mv.suit] = 0,
            Side::Low => self.low[mv.suit] -= 1,
            Side::High => self.high[mv.suit] += 1,
        }
    }

    /// Take a move back off the table. The move must be the last one applied
    /// to its side of the suit.
    #[inline]
    pub(crate) fn undo(&mut self, mv: &Move) {
        debug_assert!(self.retracts(mv), "{:?} was not played on {:?}", mv, self);
        match mv.side {
            Side::Open => self.high[mv.suit] = self.geometry.high_span as u8,
            Side::Low => self.low[mv.suit] += 1,
            Side::High => self.high[mv.suit] -= 1,
        }
    }

    fn extends(&self, mv: &Move) -> bool {
        let rank = match mv.side {
            Side::Open => (!self.is_opened(mv.suit)).then(|| self.geometry.anchor()),
            Side::Low => self.low_extension(mv.suit),
            Side::High => self.high_extension(mv.suit),
        };
        rank == Some(mv.rank)
    }

    fn retracts(&self, mv: &Move) -> bool {
        let Some((low, high)) = self.played_window(mv.suit) else {
            return false;
        };
        match mv.side {
            Side::Open => low == mv.rank && high == mv.rank,
            Side::Low => low == mv.rank && low < self.geometry.anchor(),
            Side::High => high == mv.rank && high > self.geometry.anchor(),
        }
    }

    /// Dense index of `(player, table)` in `0..geometry.memo_capacity()`
    #[inline]
    pub fn memo_index(&self, player: Player) -> usize {
        let per_suit = self.geometry.table_states_per_suit();
        let column = self.geometry.high_span + 1;
        let mut index = player;
        for suit in 0..self.geometry.suit_count {
            index = index * per_suit + self.low(suit) * column + self.high(suit);
        }
        index
    }
}

impl std::fmt::Debug for TableState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TableState(")?;
        for suit in 0..self.geometry.suit_count {
            write!(f, "{}: {}/{} ", suit_letter(suit), self.low[suit], self.high[suit])?;
        }
        write!(f, ")")
    }
}

impl std::fmt::Display for TableState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for suit in 0..self.geometry.suit_count {
            write!(f, "{} ", suit_letter(suit))?;
            match self.played_window(suit) {
                Some((low, high)) => {
                    for rank in low..=high {
                        write!(f, "{}", self.geometry.rank_name(rank))?;
                    }
                }
                None => write!(f, "-")?,
            }
            if suit + 1 < self.geometry.suit_count {
                write!(f, "  ")?;
            }
        }
        Ok(())
    }
}

/// A position: who moves, and what is on the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub to_move: Player,
    pub table: TableState,
}

impl GameState {
    pub fn new(geometry: Geometry, to_move: Player) -> Self {
        GameState {
            to_move,
            table: TableState::new(geometry),
        }
    }

    #[inline]
    pub fn switch_players(&mut self) {
        self.to_move = opponent(self.to_move);
    }
}
