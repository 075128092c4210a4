//! Main AI Engine wrapping the search behind a stable interface
//!
//! The engine owns a [`Searcher`] and the settings of the current
//! difficulty. Callers ask it for a move and optionally for statistics;
//! the search itself lives in [`crate::search`].
//!
//! # Example
//!
//! ```
//! use kalaha::{AIEngine, Board, Difficulty, Player};
//!
//! let mut engine = AIEngine::with_difficulty(Difficulty::Easy);
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Player::One);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::{Board, Player};
use crate::difficulty::Difficulty;
use crate::eval::Strategy;
use crate::rules::legal_moves;
use crate::search::{Searcher, TTStats};

/// Anything that can pick a move for the side to move.
///
/// Implementations must return a legal pit for `player`, or `None` when
/// `player` has no seeds in their pits.
pub trait MoveSource {
    /// Short label for logs and the UI
    fn name(&self) -> &str;

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<usize>;
}

/// Search settings for an [`AIEngine`].
///
/// ```
/// use kalaha::engine::SearchConfig;
/// use kalaha::eval::Strategy;
///
/// let config = SearchConfig::default().depth(4).strategy(Strategy::Defensive).seed(7);
/// assert_eq!(config.depth, 4);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Plies searched per move
    pub depth: u8,
    /// Leaf evaluation
    pub strategy: Strategy,
    /// Tie-break seed; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Cache positions within a search
    pub use_transposition: bool,
}

impl SearchConfig {
    /// Settings of a difficulty level, randomly seeded
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let profile = difficulty.profile();
        Self {
            depth: profile.depth,
            strategy: profile.strategy,
            seed: None,
            use_transposition: true,
        }
    }

    #[must_use]
    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn transposition(mut self, enabled: bool) -> Self {
        self.use_transposition = enabled;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<usize>,
    /// Value of the move, Player 1's perspective
    pub score: f64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Depth searched
    pub depth: u8,
    /// Evaluation used at the leaves
    pub strategy: Strategy,
}

/// Main AI Engine for Kalaha.
///
/// # Example
///
/// ```
/// use kalaha::engine::{AIEngine, SearchConfig};
/// use kalaha::{Board, Player};
///
/// let mut engine = AIEngine::with_config(SearchConfig::default().depth(3).seed(1));
/// if let Some(pit) = engine.get_move(&Board::new(), Player::One) {
///     println!("Sow pit {pit}");
/// }
/// ```
pub struct AIEngine {
    searcher: Searcher,
    config: SearchConfig,
}

impl AIEngine {
    /// Create an engine at medium difficulty
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create an engine with custom configuration.
    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        let mut searcher = match config.seed {
            Some(seed) => Searcher::with_seed(seed),
            None => Searcher::new(),
        };
        searcher.set_transposition(config.use_transposition);
        Self { searcher, config }
    }

    #[must_use]
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::with_config(SearchConfig::for_difficulty(difficulty))
    }

    /// Get the best move for the given position.
    ///
    /// Use `get_move_with_stats` if you need search statistics.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Get the best move with detailed search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, player: Player) -> MoveResult {
        let start = Instant::now();
        let result =
            self.searcher
                .search(board, player, self.config.depth, self.config.strategy);

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            nodes: result.nodes,
            time_ms: start.elapsed().as_millis() as u64,
            depth: self.config.depth,
            strategy: self.config.strategy,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn set_max_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.config.strategy = strategy;
    }

    /// Switch depth and strategy to a difficulty's profile, keeping the seed
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        let profile = difficulty.profile();
        self.config.depth = profile.depth;
        self.config.strategy = profile.strategy;
    }

    pub fn set_transposition(&mut self, enabled: bool) {
        self.config.use_transposition = enabled;
        self.searcher.set_transposition(enabled);
    }

    /// Clear the transposition table.
    pub fn clear_cache(&mut self) {
        self.searcher.clear();
    }

    /// Get transposition table statistics.
    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.searcher.tt_stats()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for AIEngine {
    fn name(&self) -> &str {
        "alpha-beta"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        self.get_move(board, player)
    }
}

/// Move source that plays a uniformly random legal pit
pub struct RandomMover<R: Rng = Xoshiro256PlusPlus> {
    rng: R,
}

impl RandomMover<Xoshiro256PlusPlus> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(Xoshiro256PlusPlus::from_rng(&mut rand::rng()))
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl Default for RandomMover<Xoshiro256PlusPlus> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomMover<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSource for RandomMover<R> {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        legal_moves(board, player).choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{is_terminal, sow};

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.max_depth(), 6);
        assert_eq!(engine.config().strategy, Strategy::Balanced);
    }

    #[test]
    fn test_engine_with_config() {
        let engine = AIEngine::with_config(SearchConfig::default().depth(3).seed(5));
        assert_eq!(engine.max_depth(), 3);
        assert_eq!(engine.config().seed, Some(5));
    }

    #[test]
    fn test_engine_difficulty() {
        let mut engine = AIEngine::with_difficulty(Difficulty::Hard);
        assert_eq!(engine.max_depth(), 10);
        assert_eq!(engine.config().strategy, Strategy::Aggressive);

        engine.set_difficulty(Difficulty::Easy);
        assert_eq!(engine.max_depth(), 2);
        assert_eq!(engine.config().strategy, Strategy::Basic);
    }

    #[test]
    fn test_engine_opening_move() {
        let mut engine = AIEngine::with_config(SearchConfig::default().depth(1).seed(0));
        let result = engine.get_move_with_stats(&Board::new(), Player::One);

        assert_eq!(result.best_move, Some(0));
        assert_eq!(result.score, 0.5);
        assert_eq!(result.nodes, 6);
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn test_engine_no_moves() {
        let board = Board::from_pits([0, 0, 0, 0, 0, 0, 30, 1, 1, 1, 1, 1, 1, 36]);
        let mut engine = AIEngine::new();
        assert_eq!(engine.get_move(&board, Player::One), None);
    }

    #[test]
    fn test_engine_seeded_is_reproducible() {
        let config = SearchConfig::default().depth(5).seed(123);
        let board = Board::from_pits([3, 7, 0, 2, 9, 1, 12, 4, 0, 6, 5, 8, 2, 13]);

        let a = AIEngine::with_config(config).get_move_with_stats(&board, Player::Two);
        let b = AIEngine::with_config(config).get_move_with_stats(&board, Player::Two);
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.nodes, b.nodes);
    }

    #[test]
    fn test_engine_clear_cache() {
        let mut engine = AIEngine::with_config(SearchConfig::default().depth(4).seed(2));
        let _ = engine.get_move(&Board::new(), Player::One);
        assert!(engine.tt_stats().used > 0);

        engine.clear_cache();
        assert_eq!(engine.tt_stats().used, 0, "TT should be empty after clear");
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = AIEngine::new();
        engine.set_max_depth(8);
        assert_eq!(engine.max_depth(), 8);
    }

    #[test]
    fn test_engine_without_transposition() {
        let mut engine =
            AIEngine::with_config(SearchConfig::default().depth(3).seed(9).transposition(false));
        assert!(engine.get_move(&Board::new(), Player::Two).is_some());
        assert_eq!(engine.tt_stats().used, 0);
    }

    /// Play a whole game between two sources, checking every move is legal
    fn play_out(sources: &mut [&mut dyn MoveSource; 2]) -> Board {
        let mut board = Board::new();
        let mut player = Player::One;

        while !is_terminal(&board) {
            let source = &mut *sources[player.index()];
            let pit = source.choose_move(&board, player).unwrap();
            assert!(
                legal_moves(&board, player).contains(&pit),
                "{} chose illegal pit {pit}",
                source.name()
            );
            let outcome = sow(&board, pit, player);
            board = outcome.board;
            if !outcome.extra_turn {
                player = player.opponent();
            }
        }
        board
    }

    #[test]
    fn test_move_sources_play_legal_games() {
        let mut engine = AIEngine::with_config(SearchConfig::default().depth(3).seed(4));
        let mut random = RandomMover::with_seed(4);

        let board = play_out(&mut [&mut engine, &mut random]);
        assert!(is_terminal(&board));
        assert_eq!(board.total_seeds(), 72);
    }

    #[test]
    fn test_random_mover_no_moves() {
        let board = Board::from_pits([5, 5, 5, 5, 5, 5, 12, 0, 0, 0, 0, 0, 0, 30]);
        let mut random = RandomMover::with_seed(0);
        assert_eq!(random.choose_move(&board, Player::Two), None);
        assert_eq!(random.name(), "random");
    }
}
