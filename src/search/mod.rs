//! Search module for Kalaha AI
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition table for caching search results
//! - Move ordering by immediate tactics
//! - Alpha-Beta search with extra-turn aware recursion

pub mod alphabeta;
pub mod ordering;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{minimax, SearchResult, SearchStats, Searcher};
pub use ordering::{move_priority, order_moves};
pub use tt::{EntryType, TTEntry, TTStats, TranspositionTable};
pub use zobrist::ZobristTable;

use crate::board::{Board, Player};
use crate::eval::Strategy;

/// Pick a move for `player` with a fresh, randomly seeded searcher.
///
/// Returns the move (`None` when `player` has no seeds in their pits) and
/// the number of nodes visited below the root.
#[must_use]
pub fn select_move(
    board: &Board,
    player: Player,
    depth: u8,
    strategy: Strategy,
) -> (Option<usize>, u64) {
    let result = Searcher::new().search(board, player, depth, strategy);
    (result.best_move, result.nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_move_initial() {
        let (pit, nodes) = select_move(&Board::new(), Player::One, 1, Strategy::Balanced);
        assert_eq!(pit, Some(0));
        assert_eq!(nodes, 6);
    }

    #[test]
    fn test_select_move_no_seeds() {
        let board = Board::from_pits([6, 6, 6, 6, 6, 6, 6, 0, 0, 0, 0, 0, 0, 30]);
        assert_eq!(select_move(&board, Player::Two, 4, Strategy::Basic), (None, 0));
    }
}
