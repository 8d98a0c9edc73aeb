//! Cards bitboard representation
//!
//! Uses a 64-bit integer with a 16-bit lane per suit.
//! Bit `suit * 16 + rank` is set when the card is present, so rank 0 (the Ace)
//! is the lowest bit of its lane.

use super::types::*;

/// Width of one suit lane in the bitboard
pub const SUIT_STRIDE: usize = 16;

/// Get suit of a card (0-63 -> 0-3)
#[inline]
pub fn suit_of(card: usize) -> Suit {
    card / SUIT_STRIDE
}

/// Get rank of a card within its suit
#[inline]
pub fn rank_of(card: usize) -> Rank {
    card % SUIT_STRIDE
}

/// Get card index from suit and rank
#[inline]
pub fn card_of(suit: Suit, rank: Rank) -> usize {
    suit * SUIT_STRIDE + rank
}

/// Get mask for a suit lane (16 bits)
#[inline]
pub fn mask_of(suit: Suit) -> u64 {
    0xFFFF << (suit * SUIT_STRIDE)
}

/// Get card name as string, e.g. "7C"
pub fn name_of(geometry: &Geometry, card: usize) -> String {
    format!(
        "{}{}",
        geometry.rank_name(rank_of(card)),
        suit_letter(suit_of(card))
    )
}

/// Cards represented as a 64-bit bitboard
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Cards {
    bits: u64,
}

impl Cards {
    /// Create empty card set
    #[inline]
    pub const fn new() -> Self {
        Cards { bits: 0 }
    }

    /// Create from raw bits
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Cards { bits }
    }

    /// Every card of a geometry
    pub fn full_deck(geometry: &Geometry) -> Cards {
        let mut deck = Cards::new();
        for suit in 0..geometry.suit_count {
            deck.set_suit_bits(suit, geometry.suit_mask());
        }
        deck
    }

    /// Count number of cards
    #[inline]
    pub fn size(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Check if a card is present
    #[inline]
    pub fn have(&self, card: usize) -> bool {
        self.bits & (1u64 << card) != 0
    }

    /// Check if a (suit, rank) pair is present
    #[inline]
    pub fn holds(&self, suit: Suit, rank: Rank) -> bool {
        self.have(card_of(suit, rank))
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Get cards in a specific suit
    #[inline]
    pub fn suit(&self, suit: Suit) -> Cards {
        Cards::from_bits(self.bits & mask_of(suit))
    }

    /// Ranks held in a suit, one bit per rank
    #[inline]
    pub fn suit_bits(&self, suit: Suit) -> u16 {
        (self.bits >> (suit * SUIT_STRIDE)) as u16
    }

    /// Replace the ranks held in a suit
    #[inline]
    pub fn set_suit_bits(&mut self, suit: Suit, bits: u16) -> &mut Self {
        self.bits = (self.bits & !mask_of(suit)) | ((bits as u64) << (suit * SUIT_STRIDE));
        self
    }

    /// Lowest rank held in a suit
    #[inline]
    pub fn lowest_in(&self, suit: Suit) -> Option<Rank> {
        let bits = self.suit_bits(suit);
        (bits != 0).then(|| bits.trailing_zeros() as Rank)
    }

    /// Highest rank held in a suit
    #[inline]
    pub fn highest_in(&self, suit: Suit) -> Option<Rank> {
        let bits = self.suit_bits(suit);
        (bits != 0).then(|| 15 - bits.leading_zeros() as Rank)
    }

    /// Union of two card sets
    #[inline]
    pub fn union(&self, other: Cards) -> Cards {
        Cards::from_bits(self.bits | other.bits)
    }

    /// Intersection of two card sets
    #[inline]
    pub fn intersect(&self, other: Cards) -> Cards {
        Cards::from_bits(self.bits & other.bits)
    }

    /// Cards of `universe` that are not in self
    #[inline]
    pub fn complement_within(&self, universe: Cards) -> Cards {
        Cards::from_bits(universe.bits & !self.bits)
    }

    /// Add a single card
    #[inline]
    pub fn add(&mut self, card: usize) -> &mut Self {
        self.bits |= 1u64 << card;
        self
    }

    /// Iterate over cards (from lowest suit and rank upwards)
    pub fn iter(&self) -> CardsIterator {
        CardsIterator { bits: self.bits }
    }
}

impl std::fmt::Debug for Cards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cards(")?;
        for suit in 0..MAX_SUITS {
            let bits = self.suit_bits(suit);
            if bits != 0 {
                write!(f, "{}: {:#06x} ", suit_letter(suit), bits)?;
            }
        }
        write!(f, ")")
    }
}

/// Iterator over cards in a Cards bitset
pub struct CardsIterator {
    bits: u64,
}

impl Iterator for CardsIterator {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            let card = self.bits.trailing_zeros() as usize;
            self.bits &= self.bits - 1; // Clear lowest set bit
            Some(card)
        }
    }
}

impl IntoIterator for Cards {
    type Item = usize;
    type IntoIter = CardsIterator;

    fn into_iter(self) -> Self::IntoIter {
        CardsIterator { bits: self.bits }
    }
}

impl IntoIterator for &Cards {
    type Item = usize;
    type IntoIter = CardsIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
