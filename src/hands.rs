//! Two complementary hands - allocation-free
//!
//! Player B always holds exactly the cards of the deck that player A does not.

use super::cards::*;
use super::error::SolverError;
use super::types::*;

/// The hand partition of one deal
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Hands {
    geometry: Geometry,
    hands: [Cards; NUM_PLAYERS],
}

impl Hands {
    /// Build both hands from player A's per-suit rank bits (bit r = rank r)
    pub fn from_suit_bits(geometry: Geometry, suits: &[u16]) -> Result<Self, SolverError> {
        if suits.len() != geometry.suit_count {
            return Err(SolverError::InvalidHand(format!(
                "expected {} suits, got {}",
                geometry.suit_count,
                suits.len()
            )));
        }
        let mut hand_a = Cards::new();
        for (suit, &bits) in suits.iter().enumerate() {
            if bits & !geometry.suit_mask() != 0 {
                return Err(SolverError::InvalidHand(format!(
                    "{} has ranks beyond the suit window: {:#06x}",
                    suit_name(suit),
                    bits
                )));
            }
            hand_a.set_suit_bits(suit, bits);
        }
        Ok(Self::from_cards(geometry, hand_a))
    }

    /// Build both hands from player A's cards
    fn from_cards(geometry: Geometry, hand_a: Cards) -> Self {
        let hand_b = hand_a.complement_within(Cards::full_deck(&geometry));
        Hands {
            geometry,
            hands: [hand_a, hand_b],
        }
    }

    /// Parse player A's hand: ranks per suit separated by dots, `-` for a void.
    /// Format: "A27.K.-.789" (clubs, diamonds, hearts, spades)
    pub fn parse(geometry: Geometry, s: &str) -> Result<Self, SolverError> {
        let suits: Vec<&str> = s.trim().split('.').collect();
        if suits.len() != geometry.suit_count {
            return Err(SolverError::InvalidHand(format!(
                "expected {} suits separated by '.', got {}",
                geometry.suit_count,
                suits.len()
            )));
        }

        let mut hand_a = Cards::new();
        for (suit, suit_str) in suits.iter().enumerate() {
            for c in suit_str.chars() {
                if c == '-' {
                    continue; // Void marker
                }
                let rank = geometry.char_to_rank(c).ok_or_else(|| {
                    SolverError::InvalidHand(format!("bad rank '{}' in {}", c, suit_name(suit)))
                })?;
                hand_a.add(card_of(suit, rank));
            }
        }

        Ok(Self::from_cards(geometry, hand_a))
    }

    /// Geometry the hands were dealt in
    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Get hand for a player
    #[inline]
    pub fn hand(&self, player: Player) -> Cards {
        self.hands[player]
    }

    /// Check whether a player was dealt a card
    #[inline]
    pub fn holds(&self, player: Player, suit: Suit, rank: Rank) -> bool {
        self.hands[player].holds(suit, rank)
    }

    /// Holder of a card
    #[inline]
    pub fn owner(&self, suit: Suit, rank: Rank) -> Player {
        if self.holds(PLAYER_A, suit, rank) {
            PLAYER_A
        } else {
            PLAYER_B
        }
    }

    /// Player A's per-suit rank bits
    pub fn suit_bits(&self) -> Vec<u16> {
        (0..self.geometry.suit_count)
            .map(|suit| self.hands[PLAYER_A].suit_bits(suit))
            .collect()
    }
}

impl std::ops::Index<Player> for Hands {
    type Output = Cards;

    #[inline]
    fn index(&self, player: Player) -> &Self::Output {
        &self.hands[player]
    }
}

impl std::fmt::Debug for Hands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for player in 0..NUM_PLAYERS {
            write!(f, "{}: {:?} ", player_name(player), self.hands[player])?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Hands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for player in 0..NUM_PLAYERS {
            write!(f, "{}:", player_name(player))?;
            for suit in 0..self.geometry.suit_count {
                write!(f, " {} ", suit_letter(suit))?;
                let suit_cards = self.hands[player].suit(suit);
                if suit_cards.is_empty() {
                    write!(f, "-")?;
                }
                for card in suit_cards.iter() {
                    write!(f, "{}", self.geometry.rank_name(rank_of(card)))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
