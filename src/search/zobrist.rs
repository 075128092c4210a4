//! Zobrist hashing for position identification
//!
//! Each (cell, seed count) pair gets a fixed random key; a position's
//! fingerprint is the XOR of the keys of its 14 cells, plus a side-to-move
//! key when Player 2 is to move.
//!
//! # Example
//!
//! ```
//! use kalaha::board::{Board, Player};
//! use kalaha::search::ZobristTable;
//!
//! let zt = ZobristTable::new();
//! let board = Board::new();
//!
//! // Same board, different side to move: different fingerprints
//! assert_ne!(zt.hash(&board, Player::One), zt.hash(&board, Player::Two));
//! assert_eq!(zt.hash(&board, Player::One), zt.hash(&Board::new(), Player::One));
//! ```

use crate::board::{Board, Player, TOTAL_PITS};

/// One key per possible seed count of a cell (a `u8`)
const SEED_SLOTS: usize = u8::MAX as usize + 1;

/// Zobrist hash table for position hashing.
pub struct ZobristTable {
    /// Random values indexed by `[cell][seeds]`
    cells: Vec<[u64; SEED_SLOTS]>,
    /// Random value XORed when Player 2 is to move
    second_to_move: u64,
}

impl ZobristTable {
    /// Create a new Zobrist table with deterministic random values.
    ///
    /// Uses a linear congruential generator (LCG) with a fixed seed so
    /// fingerprints are reproducible across runs.
    #[must_use]
    pub fn new() -> Self {
        // Constants from Knuth's MMIX LCG
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            // High bits of an LCG are the well-mixed ones
            seed ^ (seed >> 29)
        };

        let mut cells = vec![[0u64; SEED_SLOTS]; TOTAL_PITS];
        for cell in cells.iter_mut() {
            for key in cell.iter_mut() {
                *key = next_rand();
            }
        }

        Self {
            cells,
            second_to_move: next_rand(),
        }
    }

    /// Compute the full hash for a board with `side_to_move` to play.
    #[must_use]
    pub fn hash(&self, board: &Board, side_to_move: Player) -> u64 {
        let mut h = board
            .pits()
            .iter()
            .zip(&self.cells)
            .fold(0u64, |h, (&seeds, keys)| h ^ keys[seeds as usize]);

        if side_to_move == Player::Two {
            h ^= self.second_to_move;
        }

        h
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
