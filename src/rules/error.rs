//! Error types for rule violations

use crate::board::Player;

/// Errors raised when a request breaks the rules.
///
/// All of them are recoverable: the board is never touched when one is
/// returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Pit is empty, a store, off the board, or on the other side
    #[error("illegal move: pit {pit} for {player}")]
    IllegalMove { pit: usize, player: Player },

    /// Numeric player id other than 0 or 1
    #[error("invalid player id {0}")]
    InvalidPlayer(u8),

    /// A move was requested after the game ended
    #[error("game is over")]
    GameOver,
}

/// Result type for rule operations
pub type Result<T> = std::result::Result<T, RulesError>;
