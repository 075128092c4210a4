//! Kalaha rules engine and alpha-beta AI
//!
//! Kalaha (six-pit Mancala) on a 14-cell board:
//! - 6 pits per side with 6 seeds each, plus one store per player
//! - Sowing skips the opponent's store
//! - Last seed in your own store: move again
//! - Last seed in an empty pit of your own: capture the pit across
//! - Game ends when either side is empty; leftover seeds go to their owner
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and player layout
//! - [`rules`]: Game rules (sowing, capture, endgame)
//! - [`eval`]: Heuristic evaluation strategies
//! - [`search`]: Alpha-beta search with transposition table
//! - [`difficulty`]: Difficulty levels mapped to search settings
//! - [`engine`]: AI engine facade and alternative move sources
//! - [`game`]: Game session with history and undo
//!
//! # Quick Start
//!
//! ```
//! use kalaha::{select_move, Game, Player, Strategy};
//!
//! let mut game = Game::new();
//! game.play(0).unwrap();
//!
//! // AI picks Player 1's follow-up after the extra turn
//! let (pit, nodes) = select_move(game.board(), Player::One, 4, Strategy::Balanced);
//! if let Some(pit) = pit {
//!     game.play(pit).unwrap();
//!     println!("AI sowed pit {pit} after {nodes} nodes");
//! }
//! ```
//!
//! # Search
//!
//! Scores are always from Player 1's point of view. Every move is one ply
//! of depth; an extra turn keeps the side to move but still uses a ply.

pub mod board;
pub mod difficulty;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, TOTAL_PITS};
pub use difficulty::{difficulty_profile, Difficulty, DifficultyProfile};
pub use engine::{AIEngine, MoveResult, MoveSource, RandomMover, SearchConfig};
pub use eval::Strategy;
pub use game::{Game, MoveRecord};
pub use rules::{
    apply_move, cleanup, initial, is_terminal, legal_moves, sowing_path, MoveOutcome, Outcome,
    RulesError,
};
pub use search::select_move;
