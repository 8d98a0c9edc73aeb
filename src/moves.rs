//! Legal move enumeration
//!
//! A suit offers at most three actions, always tried in the same order:
//! open it with the anchor, extend it downwards, extend it upwards.

use super::cards::{card_of, name_of};
use super::hands::Hands;
use super::table::TableState;
use super::types::*;

/// How a move changes the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Play the anchor of an unopened suit
    Open,
    /// Play the rank just below the played window
    Low,
    /// Play the rank just above the played window
    High,
}

/// A card played to the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub suit: Suit,
    pub side: Side,
    /// Rank of the card played
    pub rank: Rank,
}

impl Move {
    #[inline]
    pub fn new(suit: Suit, side: Side, rank: Rank) -> Self {
        Move { suit, side, rank }
    }

    /// Card name in a geometry, e.g. "7C"
    pub fn name(&self, geometry: &Geometry) -> String {
        name_of(geometry, card_of(self.suit, self.rank))
    }
}

/// Up to three moves of a single suit, in enumeration order
#[derive(Clone, Copy, Default)]
pub struct SuitMoves {
    moves: [Option<Move>; 3],
    count: usize,
}

impl SuitMoves {
    #[inline]
    fn add(&mut self, mv: Move) {
        self.moves[self.count] = Some(mv);
        self.count += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves[..self.count].iter().flatten().copied()
    }
}

/// Moves available to `player` in one suit
#[inline]
pub fn suit_moves(hands: &Hands, table: &TableState, player: Player, suit: Suit) -> SuitMoves {
    let mut moves = SuitMoves::default();
    let hand = hands.hand(player);

    if !table.is_opened(suit) {
        let anchor = table.geometry().anchor();
        if hand.holds(suit, anchor) {
            moves.add(Move::new(suit, Side::Open, anchor));
        }
        return moves;
    }

    if let Some(rank) = table.low_extension(suit) {
        if hand.holds(suit, rank) {
            moves.add(Move::new(suit, Side::Low, rank));
        }
    }
    if let Some(rank) = table.high_extension(suit) {
        if hand.holds(suit, rank) {
            moves.add(Move::new(suit, Side::High, rank));
        }
    }
    moves
}

/// All moves available to `player`, suits in index order
pub fn legal_moves(hands: &Hands, table: &TableState, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for suit in 0..table.geometry().suit_count {
        moves.extend(suit_moves(hands, table, player, suit).iter());
    }
    moves
}

/// The move that would play `(suit, rank)` for `player`, if that is legal
pub fn find_move(
    hands: &Hands,
    table: &TableState,
    player: Player,
    suit: Suit,
    rank: Rank,
) -> Option<Move> {
    suit_moves(hands, table, player, suit)
        .iter()
        .find(|mv| mv.rank == rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Geometry {
        Geometry::new(3, 3, 2).unwrap()
    }

    #[test]
    fn test_unopened_suit_only_offers_anchor() {
        // A holds the anchor (rank 2) of clubs, B holds it in diamonds
        let hands = Hands::from_suit_bits(small(), &[0b00111, 0b11011]).unwrap();
        let table = TableState::new(small());

        let a = suit_moves(&hands, &table, PLAYER_A, CLUBS);
        assert_eq!(a.len(), 1);
        assert_eq!(a.iter().next(), Some(Move::new(CLUBS, Side::Open, 2)));
        assert!(suit_moves(&hands, &table, PLAYER_A, DIAMONDS).is_empty());

        let b = legal_moves(&hands, &table, PLAYER_B);
        assert_eq!(b, vec![Move::new(DIAMONDS, Side::Open, 2)]);
    }

    #[test]
    fn test_opened_suit_offers_low_then_high() {
        // A: clubs ranks 1, 2, 3; B: clubs 0, 4
        let hands = Hands::from_suit_bits(small(), &[0b01110, 0b00000]).unwrap();
        let mut table = TableState::new(small());
        table.apply(&Move::new(CLUBS, Side::Open, 2));

        let moves: Vec<_> = suit_moves(&hands, &table, PLAYER_A, CLUBS).iter().collect();
        assert_eq!(
            moves,
            vec![Move::new(CLUBS, Side::Low, 1), Move::new(CLUBS, Side::High, 3)]
        );
        assert!(suit_moves(&hands, &table, PLAYER_B, CLUBS).is_empty());

        table.apply(&Move::new(CLUBS, Side::Low, 1));
        table.apply(&Move::new(CLUBS, Side::High, 3));
        let moves: Vec<_> = suit_moves(&hands, &table, PLAYER_B, CLUBS).iter().collect();
        assert_eq!(
            moves,
            vec![Move::new(CLUBS, Side::Low, 0), Move::new(CLUBS, Side::High, 4)]
        );
    }

    #[test]
    fn test_find_move() {
        let hands = Hands::from_suit_bits(small(), &[0b00100, 0b00000]).unwrap();
        let table = TableState::new(small());
        assert_eq!(
            find_move(&hands, &table, PLAYER_A, CLUBS, 2),
            Some(Move::new(CLUBS, Side::Open, 2))
        );
        assert_eq!(find_move(&hands, &table, PLAYER_B, CLUBS, 2), None);
        assert_eq!(find_move(&hands, &table, PLAYER_B, DIAMONDS, 1), None);
    }

    #[test]
    fn test_move_name() {
        let mv = Move::new(HEARTS, Side::High, 7);
        assert_eq!(mv.name(&Geometry::STANDARD), "8H");
    }
}
