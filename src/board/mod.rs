//! Board representation for Kalaha

pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;
use std::ops::Range;

use crate::rules::RulesError;

// Re-exports
pub use board::Board;

/// Pits per side (stores excluded)
pub const PITS_PER_SIDE: usize = 6;
/// Seeds in each pit at the start of a game
pub const SEEDS_PER_PIT: u8 = 6;
/// Total cells on the board: 12 pits + 2 stores
pub const TOTAL_PITS: usize = 14;
/// Store of Player 1 (pits 0-5)
pub const P1_STORE: usize = 6;
/// Store of Player 2 (pits 7-12)
pub const P2_STORE: usize = 13;
/// Seeds on the board in the standard setup (72)
pub const TOTAL_SEEDS: u32 = (PITS_PER_SIDE * 2) as u32 * SEEDS_PER_PIT as u32;

/// The two sides of the board.
///
/// `One` is the maximizing side in search (numeric id 0), `Two` the
/// minimizing side (numeric id 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric id (0 or 1)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Index of this player's store
    #[inline]
    pub fn store(self) -> usize {
        match self {
            Player::One => P1_STORE,
            Player::Two => P2_STORE,
        }
    }

    /// Indices of this player's six pits
    #[inline]
    pub fn pits(self) -> Range<usize> {
        match self {
            Player::One => 0..P1_STORE,
            Player::Two => P1_STORE + 1..P2_STORE,
        }
    }

    /// Check if `pit` is one of this player's six pits (stores excluded)
    #[inline]
    pub fn owns_pit(self, pit: usize) -> bool {
        self.pits().contains(&pit)
    }

    /// The player who moves at a node where `maximizing` holds
    #[inline]
    pub fn from_maximizing(maximizing: bool) -> Player {
        if maximizing {
            Player::One
        } else {
            Player::Two
        }
    }

    #[inline]
    pub fn is_maximizer(self) -> bool {
        self == Player::One
    }
}

impl TryFrom<u8> for Player {
    type Error = RulesError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Player::One),
            1 => Ok(Player::Two),
            other => Err(RulesError::InvalidPlayer(other)),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Pit facing `pit` across the board (`12 - pit`).
///
/// Only meaningful for the twelve playing pits.
#[inline]
pub fn opposite_pit(pit: usize) -> usize {
    debug_assert!(pit < P2_STORE && pit != P1_STORE);
    2 * PITS_PER_SIDE - pit
}
