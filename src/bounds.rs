//! Reachability bounds and the terminal test
//!
//! A player's bounds are the lowest and highest rank dealt in each suit. They
//! never change during a game, so they only say whether a player *could*
//! still have something to play beyond the current windows.

use super::hands::Hands;
use super::table::TableState;
use super::types::*;

/// Dealt rank range of one player in one suit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuitBound {
    pub min: i8,
    pub max: i8,
}

impl SuitBound {
    /// Sentinel for a void suit: an empty range
    pub const EMPTY: SuitBound = SuitBound {
        min: MAX_RANKS as i8,
        max: -1,
    };

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// Bounds of one player across all suits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerBounds {
    suits: [SuitBound; MAX_SUITS],
}

impl PlayerBounds {
    /// Compute bounds from what a player was dealt
    pub fn from_hand(hands: &Hands, player: Player) -> Self {
        let hand = hands.hand(player);
        let mut suits = [SuitBound::EMPTY; MAX_SUITS];
        for (suit, bound) in suits.iter_mut().enumerate().take(hands.geometry().suit_count) {
            if let (Some(min), Some(max)) = (hand.lowest_in(suit), hand.highest_in(suit)) {
                *bound = SuitBound {
                    min: min as i8,
                    max: max as i8,
                };
            }
        }
        PlayerBounds { suits }
    }

    #[inline]
    pub fn suit(&self, suit: Suit) -> SuitBound {
        self.suits[suit]
    }
}

/// Check whether `player` could ever play again at this table.
///
/// True if some unopened suit's anchor is in the player's hand, or the
/// player's dealt range reaches past a suit's current played window.
pub fn has_remaining_play(
    hands: &Hands,
    bounds: &PlayerBounds,
    table: &TableState,
    player: Player,
) -> bool {
    let geometry = table.geometry();
    let anchor = geometry.anchor();
    (0..geometry.suit_count).any(|suit| {
        if !table.is_opened(suit) && hands.holds(player, suit, anchor) {
            return true;
        }
        let bound = bounds.suit(suit);
        let top_played = (anchor + table.high(suit)) as i8;
        bound.min < table.low(suit) as i8 || bound.max > top_played
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{Move, Side};

    #[test]
    fn test_bounds_from_hand() {
        let g = Geometry::STANDARD;
        let hands = Hands::parse(g, "29Q.-.AKT.7").unwrap();
        let a = PlayerBounds::from_hand(&hands, PLAYER_A);
        assert_eq!(a.suit(CLUBS), SuitBound { min: 1, max: 11 });
        assert!(a.suit(DIAMONDS).is_empty());
        assert_eq!(a.suit(HEARTS), SuitBound { min: 0, max: 12 });
        assert_eq!(a.suit(SPADES), SuitBound { min: 6, max: 6 });

        let b = PlayerBounds::from_hand(&hands, PLAYER_B);
        assert_eq!(b.suit(CLUBS), SuitBound { min: 0, max: 12 });
        assert_eq!(b.suit(DIAMONDS), SuitBound { min: 0, max: 12 });
        assert_eq!(b.suit(HEARTS), SuitBound { min: 1, max: 11 });
    }

    #[test]
    fn test_anchor_holder_has_remaining_play() {
        let g = Geometry::new(2, 2, 1).unwrap();
        // A: the anchor only; B: both ends
        let hands = Hands::parse(g, "7").unwrap();
        let bounds_a = PlayerBounds::from_hand(&hands, PLAYER_A);
        let bounds_b = PlayerBounds::from_hand(&hands, PLAYER_B);
        let mut table = TableState::new(g);

        assert!(has_remaining_play(&hands, &bounds_a, &table, PLAYER_A));
        assert!(has_remaining_play(&hands, &bounds_b, &table, PLAYER_B));

        table.apply(&Move::new(CLUBS, Side::Open, 1));
        assert!(!has_remaining_play(&hands, &bounds_a, &table, PLAYER_A));
        assert!(has_remaining_play(&hands, &bounds_b, &table, PLAYER_B));
    }

    #[test]
    fn test_high_cards_of_unopened_suit_do_not_count() {
        let g = Geometry::new(2, 2, 1).unwrap();
        // A holds only the top card of the unopened suit
        let hands = Hands::parse(g, "8").unwrap();
        let bounds_a = PlayerBounds::from_hand(&hands, PLAYER_A);
        let table = TableState::new(g);
        assert!(!has_remaining_play(&hands, &bounds_a, &table, PLAYER_A));
    }

    #[test]
    fn test_low_cards_of_unopened_suit_count() {
        let g = Geometry::new(2, 2, 1).unwrap();
        let hands = Hands::parse(g, "6").unwrap();
        let bounds_a = PlayerBounds::from_hand(&hands, PLAYER_A);
        let table = TableState::new(g);
        assert!(has_remaining_play(&hands, &bounds_a, &table, PLAYER_A));
    }

    #[test]
    fn test_remaining_play_is_monotone_in_window_growth() {
        // Once a player is out of reach, growing opened windows never brings
        // them back. Opening a suit can: its high side only counts once opened.
        let g = Geometry::new(3, 3, 2).unwrap();
        for bits in 0u16..(1 << 10) {
            let hands = Hands::from_suit_bits(g, &[bits & 0x1F, bits >> 5]).unwrap();
            let bounds = PlayerBounds::from_hand(&hands, PLAYER_A);
            let mut table = TableState::new(g);
            table.apply(&Move::new(CLUBS, Side::Open, 2));
            table.apply(&Move::new(DIAMONDS, Side::Open, 2));
            let mut out_of_reach = false;
            let script = [
                Move::new(CLUBS, Side::Low, 1),
                Move::new(DIAMONDS, Side::High, 3),
                Move::new(CLUBS, Side::High, 3),
                Move::new(DIAMONDS, Side::Low, 1),
                Move::new(CLUBS, Side::Low, 0),
                Move::new(DIAMONDS, Side::High, 4),
                Move::new(CLUBS, Side::High, 4),
                Move::new(DIAMONDS, Side::Low, 0),
            ];
            for mv in &script {
                let remaining = has_remaining_play(&hands, &bounds, &table, PLAYER_A);
                assert!(!(out_of_reach && remaining), "hand {:#x} at {:?}", bits, table);
                out_of_reach |= !remaining;
                table.apply(mv);
            }
            assert!(!has_remaining_play(&hands, &bounds, &table, PLAYER_A));
        }
    }
}
