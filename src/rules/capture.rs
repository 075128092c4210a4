//! Capture rule
//!
//! When the last seed of a sowing lands in an empty pit on the mover's
//! own side and the pit across holds seeds, the mover takes both: the
//! opposite pit's seeds plus the landing seed go to the mover's store.

use crate::board::{opposite_pit, Board, Player};

/// Details of a capture, reported for display and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    /// Pit where the last seed landed
    pub pit: usize,
    /// Pit across from it that was emptied
    pub opposite: usize,
    /// Seeds moved into the store (opposite seeds + the landing seed)
    pub seeds: u8,
}

/// Resolve a capture after the last seed landed in `last`.
///
/// `board` is the position after sowing. Returns `None` and leaves the
/// board alone when the landing pit is not eligible.
pub(crate) fn resolve_capture(board: &mut Board, last: usize, player: Player) -> Option<Capture> {
    if !player.owns_pit(last) || board[last] != 1 {
        return None;
    }

    let opposite = opposite_pit(last);
    if board[opposite] == 0 {
        return None;
    }

    let seeds = board.take(opposite) + board.take(last);
    board.add(player.store(), seeds);

    Some(Capture {
        pit: last,
        opposite,
        seeds,
    })
}
