//! Game rules for Kalaha
//!
//! This module implements the rule set including:
//! - Legal move generation
//! - Sowing with opponent-store skipping and extra turns
//! - Capture of the opposite pit
//! - Terminal detection and endgame cleanup

pub mod capture;
pub mod endgame;
pub mod error;
pub mod legal;
pub mod sowing;

// Re-exports for convenient access
pub use capture::Capture;
pub use endgame::{cleanup, evaluate, final_scores, is_terminal, outcome, Outcome};
pub use error::{Result, RulesError};
pub use legal::{has_legal_moves, is_legal_move, legal_moves};
pub use sowing::{apply_move, sowing_path, MoveOutcome};

pub(crate) use sowing::sow;

use crate::board::Board;

/// Starting position of a standard game
#[inline]
#[must_use]
pub fn initial() -> Board {
    Board::new()
}
