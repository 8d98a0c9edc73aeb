//! Transposition memo
//!
//! Direct-addressed table of verdicts, one byte per `(player, table)` key.
//! The key space is dense and small enough to allocate up front, so there is
//! no hashing, probing, or replacement: a slot is written once and kept until
//! the next deal.

use super::types::*;

const UNRESOLVED: u8 = 0;

/// Verdict store for one deal
pub struct Memo {
    entries: Box<[u8]>,
    resolved: usize,
}

impl Memo {
    /// Allocate a memo covering every key of a geometry
    pub fn new(geometry: &Geometry) -> Self {
        Memo {
            entries: vec![UNRESOLVED; geometry.memo_capacity()].into_boxed_slice(),
            resolved: 0,
        }
    }

    /// Number of addressable keys
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Number of keys resolved so far
    #[inline]
    pub fn resolved(&self) -> usize {
        self.resolved
    }

    /// Winner stored for a key, if resolved
    #[inline]
    pub fn lookup(&self, index: usize) -> Option<Player> {
        match self.entries[index] {
            UNRESOLVED => None,
            value => Some(value as Player - 1),
        }
    }

    /// Record a winner. A resolved key is never overwritten.
    #[inline]
    pub fn store(&mut self, index: usize, winner: Player) {
        let entry = &mut self.entries[index];
        if *entry == UNRESOLVED {
            *entry = winner as u8 + 1;
            self.resolved += 1;
        } else {
            debug_assert_eq!(*entry, winner as u8 + 1, "memo verdict changed");
        }
    }

    /// Forget every verdict
    pub fn clear(&mut self) {
        self.entries.fill(UNRESOLVED);
        self.resolved = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_sized_to_geometry() {
        let memo = Memo::new(&Geometry::new(2, 2, 4).unwrap());
        assert_eq!(memo.capacity(), 2 * 6 * 6 * 6 * 6);
        assert_eq!(memo.resolved(), 0);
    }

    #[test]
    fn test_store_and_lookup() {
        let mut memo = Memo::new(&Geometry::new(2, 2, 1).unwrap());
        assert_eq!(memo.lookup(3), None);

        memo.store(3, PLAYER_B);
        memo.store(4, PLAYER_A);
        assert_eq!(memo.lookup(3), Some(PLAYER_B));
        assert_eq!(memo.lookup(4), Some(PLAYER_A));
        assert_eq!(memo.resolved(), 2);
    }

    #[test]
    fn test_store_is_write_once() {
        let mut memo = Memo::new(&Geometry::new(2, 2, 1).unwrap());
        memo.store(5, PLAYER_A);
        memo.store(5, PLAYER_A);
        assert_eq!(memo.resolved(), 1);
        assert_eq!(memo.lookup(5), Some(PLAYER_A));
    }

    #[test]
    fn test_clear() {
        let mut memo = Memo::new(&Geometry::new(2, 2, 1).unwrap());
        memo.store(0, PLAYER_A);
        memo.store(11, PLAYER_B);
        memo.clear();
        assert_eq!(memo.resolved(), 0);
        assert_eq!(memo.lookup(0), None);
        assert_eq!(memo.lookup(11), None);
    }
}
