//! Core type definitions and the game geometry

use super::error::SolverError;

/// Suits: CLUBS=0, DIAMONDS=1, HEARTS=2, SPADES=3
pub type Suit = usize;
pub const CLUBS: Suit = 0;
pub const DIAMONDS: Suit = 1;
pub const HEARTS: Suit = 2;
pub const SPADES: Suit = 3;
pub const MAX_SUITS: usize = 4;

/// Ranks: ACE=0, TWO=1, ..., SEVEN=6, ..., KING=12
pub type Rank = usize;
pub const ACE: Rank = 0;
pub const SEVEN: Rank = 6;
pub const KING: Rank = 12;
pub const MAX_RANKS: usize = 13;

/// Players: PLAYER_A=0, PLAYER_B=1
pub type Player = usize;
pub const PLAYER_A: Player = 0;
pub const PLAYER_B: Player = 1;
pub const NUM_PLAYERS: usize = 2;

/// Get the other player
#[inline]
pub fn opponent(player: Player) -> Player {
    player ^ 1
}

/// Shape of the deck and the table.
///
/// Each suit spans `low_span + high_span - 1` ranks. Rank `low_span - 1` is the
/// anchor: the only rank playable while the suit is unopened. The table grows
/// from the anchor towards rank 0 (low side) and towards the top rank (high side).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Geometry {
    pub low_span: usize,
    pub high_span: usize,
    pub suit_count: usize,
    /// Suit whose anchor decides who moves first
    pub opening_suit: Suit,
}

impl Geometry {
    /// Ace to King in four suits, sevens in the middle
    pub const STANDARD: Geometry = Geometry {
        low_span: 7,
        high_span: 7,
        suit_count: MAX_SUITS,
        opening_suit: CLUBS,
    };

    /// Create a validated geometry with clubs as the opening suit
    pub fn new(low_span: usize, high_span: usize, suit_count: usize) -> Result<Self, SolverError> {
        Geometry {
            low_span,
            high_span,
            suit_count,
            opening_suit: CLUBS,
        }
        .validated()
    }

    /// Check the invariants the solver relies on
    pub fn validated(self) -> Result<Self, SolverError> {
        let reason = if self.low_span == 0 || self.high_span == 0 {
            "both spans must include the anchor"
        } else if self.low_span > SEVEN + 1 || self.high_span > MAX_RANKS - SEVEN {
            "each side of the anchor holds at most seven ranks"
        } else if self.suit_count == 0 || self.suit_count > MAX_SUITS {
            "between 1 and 4 suits are supported"
        } else if self.opening_suit >= self.suit_count {
            "opening suit is outside the deck"
        } else {
            return Ok(self);
        };
        Err(SolverError::InvalidGeometry(reason))
    }

    /// Number of ranks in each suit
    #[inline]
    pub fn suit_window(&self) -> usize {
        self.low_span + self.high_span - 1
    }

    /// The rank that opens a suit
    #[inline]
    pub fn anchor(&self) -> Rank {
        self.low_span - 1
    }

    /// Bit mask of the valid ranks of one suit
    #[inline]
    pub fn suit_mask(&self) -> u16 {
        ((1u32 << self.suit_window()) - 1) as u16
    }

    /// Number of distinct (low, high) table counters for one suit
    #[inline]
    pub fn table_states_per_suit(&self) -> usize {
        self.low_span * (self.high_span + 1)
    }

    /// Number of distinct (player, table) keys
    pub fn memo_capacity(&self) -> usize {
        NUM_PLAYERS * self.table_states_per_suit().pow(self.suit_count as u32)
    }

    /// Total number of cards in the deck
    #[inline]
    pub fn deck_size(&self) -> usize {
        self.suit_window() * self.suit_count
    }

    /// Name of a rank in this geometry, with the anchor shown as a seven
    pub fn rank_name(&self, rank: Rank) -> char {
        rank_name(rank + SEVEN - self.anchor())
    }

    /// Parse a rank character in this geometry
    pub fn char_to_rank(&self, c: char) -> Option<Rank> {
        let rank = (char_to_rank(c)? + self.anchor()).checked_sub(SEVEN)?;
        (rank < self.suit_window()).then_some(rank)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::STANDARD
    }
}

/// Get player name
pub fn player_name(player: Player) -> &'static str {
    const NAMES: [&str; 2] = ["A", "B"];
    NAMES[player]
}

/// Get suit name
pub fn suit_name(suit: Suit) -> &'static str {
    const NAMES: [&str; 4] = ["Clubs", "Diamonds", "Hearts", "Spades"];
    NAMES[suit]
}

/// Get suit letter
pub fn suit_letter(suit: Suit) -> char {
    const LETTERS: [char; 4] = ['C', 'D', 'H', 'S'];
    LETTERS[suit]
}

/// Get rank name (character) in the standard deck
pub fn rank_name(rank: Rank) -> char {
    const NAMES: [char; 13] = [
        'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
    ];
    NAMES[rank]
}

/// Convert character to a standard-deck rank
pub fn char_to_rank(c: char) -> Option<Rank> {
    match c.to_ascii_uppercase() {
        'A' | '1' => Some(ACE),
        d @ '2'..='9' => Some(d as usize - '1' as usize),
        'T' => Some(9),
        'J' => Some(10),
        'Q' => Some(11),
        'K' => Some(KING),
        _ => None,
    }
}
