//! Sowing: picking up a pit and distributing its seeds
//!
//! Seeds go one per cell in increasing index order, wrapping from 13 back
//! to 0. The mover's own store receives seeds like any pit; the opponent's
//! store is skipped. A pit big enough to lap the board simply keeps going
//! around.
//!
//! # Example
//!
//! ```
//! use kalaha::board::{Board, Player};
//! use kalaha::rules::apply_move;
//!
//! let board = Board::new();
//! let outcome = apply_move(&board, 0, Player::One).unwrap();
//!
//! // Six seeds from pit 0 end exactly in the store
//! assert!(outcome.extra_turn);
//! assert_eq!(outcome.board.store(Player::One), 1);
//! ```

use crate::board::{Board, Player, TOTAL_PITS};

use super::capture::{resolve_capture, Capture};
use super::error::{Result, RulesError};
use super::legal::is_legal_move;

/// Result of applying one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Position after sowing and any capture
    pub board: Board,
    /// Last seed landed in the mover's store; the mover plays again
    pub extra_turn: bool,
    /// Capture triggered by the last seed, if any
    pub capture: Option<Capture>,
    /// Cell that received the last seed
    pub last_pit: usize,
}

/// Next cell to receive a seed from `player`'s sowing
#[inline]
fn next_cell(idx: usize, player: Player) -> usize {
    let next = (idx + 1) % TOTAL_PITS;
    if next == player.opponent().store() {
        (next + 1) % TOTAL_PITS
    } else {
        next
    }
}

/// Apply `pit` for `player`, returning the new position.
///
/// The move must be legal: on the player's side and non-empty. Illegal
/// moves are rejected with [`RulesError::IllegalMove`] and nothing is
/// sown.
pub fn apply_move(board: &Board, pit: usize, player: Player) -> Result<MoveOutcome> {
    if !is_legal_move(board, pit, player) {
        return Err(RulesError::IllegalMove { pit, player });
    }
    Ok(sow(board, pit, player))
}

/// Sow without the legality check.
///
/// Used by search on moves it generated itself.
pub(crate) fn sow(board: &Board, pit: usize, player: Player) -> MoveOutcome {
    let mut next = *board;
    let mut seeds = next.take(pit);
    let mut idx = pit;

    while seeds > 0 {
        idx = next_cell(idx, player);
        next.add(idx, 1);
        seeds -= 1;
    }

    if idx == player.store() {
        return MoveOutcome {
            board: next,
            extra_turn: true,
            capture: None,
            last_pit: idx,
        };
    }

    let capture = resolve_capture(&mut next, idx, player);

    MoveOutcome {
        board: next,
        extra_turn: false,
        capture,
        last_pit: idx,
    }
}

/// Cells that receive a seed when `player` sows `pit`, in order.
///
/// Replays the deposit sequence of [`apply_move`] without changing any
/// counts; a cell appears once per seed it gets. An empty pit or an
/// index off the board yields an empty path.
pub fn sowing_path(board: &Board, pit: usize, player: Player) -> Vec<usize> {
    let seeds = board.pits().get(pit).copied().unwrap_or(0) as usize;
    let mut path = Vec::with_capacity(seeds);
    let mut idx = pit;

    for _ in 0..seeds {
        idx = next_cell(idx, player);
        path.push(idx);
    }

    path
}
