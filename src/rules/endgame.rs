//! Game end: terminal detection, cleanup and scoring
//!
//! The game ends as soon as either side has no seeds left in its pits.
//! The remaining seeds on each side are then swept into that side's own
//! store and the larger store wins.

use crate::board::{Board, Player};

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Check if the game is over: all six pits of either side are empty
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    board.side_is_empty(Player::One) || board.side_is_empty(Player::Two)
}

/// Sweep every side's remaining pit seeds into its own store.
///
/// Seeds are only relocated, never removed. Calling this on an already
/// clean board returns it unchanged.
pub fn cleanup(board: &Board) -> Board {
    let mut clean = *board;
    for player in Player::ALL {
        let remaining: u8 = player.pits().map(|pit| clean.take(pit)).sum();
        clean.add(player.store(), remaining);
    }
    clean
}

/// Basic zero-sum score: Player 1 store minus Player 2 store
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    board.store_diff()
}

/// Store totals `(player one, player two)` after cleanup
pub fn final_scores(board: &Board) -> (u8, u8) {
    let clean = cleanup(board);
    (clean.store(Player::One), clean.store(Player::Two))
}

/// Result of the game, or `None` while it is still in progress
pub fn outcome(board: &Board) -> Option<Outcome> {
    if !is_terminal(board) {
        return None;
    }

    let (one, two) = final_scores(board);
    Some(match one.cmp(&two) {
        std::cmp::Ordering::Greater => Outcome::Winner(Player::One),
        std::cmp::Ordering::Less => Outcome::Winner(Player::Two),
        std::cmp::Ordering::Equal => Outcome::Draw,
    })
}
