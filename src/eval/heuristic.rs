//! Heuristic evaluation function for Kalaha board positions
//!
//! This is the leaf evaluation of the minimax search. It is always from
//! Player 1's perspective, whichever side is to move:
//!
//! ```text
//! score = storeDiff + w_side * sideSeedDiff - w_empty * emptyP1Pits
//! ```

use crate::board::{Board, Player};

use super::strategy::Strategy;

/// Evaluate the board for the given strategy.
///
/// Returns a score where positive values favor Player 1 and negative
/// values favor Player 2.
///
/// # Example
///
/// ```
/// use kalaha::board::Board;
/// use kalaha::eval::{evaluate_heuristic, Strategy};
///
/// let board = Board::from_pits([0, 7, 7, 7, 7, 7, 1, 6, 6, 6, 6, 6, 6, 0]);
/// assert_eq!(evaluate_heuristic(&board, Strategy::Basic), 1.0);
/// assert_eq!(evaluate_heuristic(&board, Strategy::Balanced), 0.5);
/// ```
#[must_use]
pub fn evaluate_heuristic(board: &Board, strategy: Strategy) -> f64 {
    let store_diff = board.store_diff() as f64;

    if strategy == Strategy::Basic {
        return store_diff;
    }

    let weights = strategy.weights();
    let side_diff =
        board.side_seeds(Player::One) as f64 - board.side_seeds(Player::Two) as f64;
    let empty_pits = board.empty_pits(Player::One) as f64;

    store_diff + weights.side_seeds * side_diff - weights.empty_pit_penalty * empty_pits
}

impl Strategy {
    /// Score a board with this strategy (see [`evaluate_heuristic`])
    #[inline]
    #[must_use]
    pub fn score(self, board: &Board) -> f64 {
        evaluate_heuristic(board, self)
    }
}
