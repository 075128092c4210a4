//! Minimax search with alpha-beta pruning and transposition table
//!
//! This module implements the core search algorithm for the Kalaha AI.
//! Values are always from Player 1's perspective: Player 1 maximizes,
//! Player 2 minimizes. Turn order follows the rules, not a fixed
//! schedule: after an extra turn the same side moves again. Every move
//! costs one ply of depth, extra turns included.
//!
//! # Features
//!
//! - Alpha-beta pruning with bound-aware transposition table
//! - Move ordering by extra turns and captures
//! - Seedable tie-breaking, so node counts are reproducible
//!
//! # Example
//!
//! ```
//! use kalaha::board::{Board, Player};
//! use kalaha::eval::Strategy;
//! use kalaha::search::Searcher;
//!
//! let mut searcher = Searcher::with_seed(42);
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Player::One, 4, Strategy::Balanced);
//! assert!(result.best_move.is_some());
//! assert!(result.nodes > 0);
//! ```

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::{Board, Player};
use crate::eval::{evaluate_heuristic, Strategy};
use crate::rules::{is_terminal, legal_moves, sow};

use super::ordering::order_moves;
use super::{EntryType, TTStats, TranspositionTable, ZobristTable};

/// Infinity score for alpha-beta bounds
const INF: f64 = f64::INFINITY;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Total cutoffs (beta <= alpha)
    pub cutoffs: u64,
    /// Cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that found an entry of sufficient depth
    pub tt_hits: u64,
    /// Nodes evaluated by the heuristic
    pub leaves: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }

    /// TT hit rate in percent
    pub fn tt_hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the side to move has no seeds
    pub best_move: Option<usize>,
    /// Value of the best move, Player 1's perspective
    pub score: f64,
    /// Requested depth
    pub depth: u8,
    /// Nodes visited below the root
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

impl SearchResult {
    fn immediate(best_move: Option<usize>, score: f64, depth: u8) -> Self {
        Self {
            best_move,
            score,
            depth,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }
}

/// Alpha-beta searcher.
///
/// Owns the Zobrist keys, a reusable transposition table and the
/// tie-break generator. The table is cleared at the start of every
/// [`search`](Searcher::search); the generator carries over, so a searcher
/// built with [`with_seed`](Searcher::with_seed) replays the same sequence
/// of searches identically.
///
/// A searcher is not meant to be shared between threads; give each
/// thread its own.
pub struct Searcher<R: Rng = Xoshiro256PlusPlus> {
    zobrist: ZobristTable,
    tt: TranspositionTable,
    rng: R,
    use_transposition: bool,
}

impl Searcher<Xoshiro256PlusPlus> {
    /// Create a searcher with a randomly seeded tie-breaker
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(Xoshiro256PlusPlus::from_rng(&mut rand::rng()))
    }

    /// Create a searcher with a fixed tie-break seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl Default for Searcher<Xoshiro256PlusPlus> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Searcher<R> {
    /// Create a searcher drawing tie-breaks from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self {
            zobrist: ZobristTable::new(),
            tt: TranspositionTable::with_capacity(1 << 12),
            rng,
            use_transposition: true,
        }
    }

    /// Enable or disable the transposition table
    pub fn set_transposition(&mut self, enabled: bool) {
        self.use_transposition = enabled;
    }

    /// Statistics of the table left by the last search
    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    /// Drop all cached entries
    pub fn clear(&mut self) {
        self.tt.clear();
    }

    /// Find the best move for `player` searching `depth` plies.
    ///
    /// With no legal move the result carries `None`; with exactly one the
    /// move is returned without searching. Otherwise every root move is
    /// searched with a full window and the best for `player` is kept; on
    /// equal values the first in ordering wins. A depth of 0 is treated
    /// like 1.
    pub fn search(
        &mut self,
        board: &Board,
        player: Player,
        depth: u8,
        strategy: Strategy,
    ) -> SearchResult {
        let start = Instant::now();
        self.tt.clear();

        let moves = legal_moves(board, player);
        match moves.as_slice() {
            [] => {
                return SearchResult::immediate(None, evaluate_heuristic(board, strategy), depth);
            }
            [only] => {
                let child = sow(board, *only, player).board;
                return SearchResult::immediate(
                    Some(*only),
                    evaluate_heuristic(&child, strategy),
                    depth,
                );
            }
            _ => {}
        }

        let mut ctx = SearchContext {
            zobrist: &self.zobrist,
            tt: &mut self.tt,
            rng: &mut self.rng,
            strategy,
            use_transposition: self.use_transposition,
            nodes: 0,
            stats: SearchStats::default(),
        };

        let ordered = order_moves(board, &moves, player, &mut *ctx.rng);
        let child_depth = depth.saturating_sub(1);
        let maximizer = player.is_maximizer();

        let mut best_move = None;
        let mut best_score = if maximizer { -INF } else { INF };

        for pit in ordered {
            let outcome = sow(board, pit, player);
            // The mover keeps the turn on an extra turn, otherwise it passes
            let maximizing = maximizer == outcome.extra_turn;
            let score = ctx.alpha_beta(&outcome.board, child_depth, -INF, INF, maximizing);

            let better = if maximizer {
                score > best_score
            } else {
                score < best_score
            };
            if better || best_move.is_none() {
                best_score = score;
                best_move = Some(pit);
            }
        }

        let nodes = ctx.nodes;
        let stats = ctx.stats;

        log::debug!(
            "search {player} depth {depth} {strategy}: move {best_move:?} score {best_score:.2} \
             nodes {nodes} ({:.1}% first-move cutoffs, {:.1}% tt hits) in {:?}",
            stats.first_move_rate(),
            stats.tt_hit_rate(),
            start.elapsed()
        );

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes,
            stats,
        }
    }
}

/// State of one top-level search, threaded through the recursion.
struct SearchContext<'a, R: Rng> {
    zobrist: &'a ZobristTable,
    tt: &'a mut TranspositionTable,
    rng: &'a mut R,
    strategy: Strategy,
    use_transposition: bool,
    nodes: u64,
    stats: SearchStats,
}

impl<R: Rng> SearchContext<'_, R> {
    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.nodes += 1;

        let side = Player::from_maximizing(maximizing);
        let hash = self.zobrist.hash(board, side);
        let (alpha_orig, beta_orig) = (alpha, beta);

        if self.use_transposition {
            self.stats.tt_probes += 1;
            if let Some(entry) = self.tt.probe(hash, depth) {
                self.stats.tt_hits += 1;
                match entry.entry_type {
                    EntryType::Exact => return entry.value,
                    EntryType::LowerBound => alpha = alpha.max(entry.value),
                    EntryType::UpperBound => beta = beta.min(entry.value),
                }
                if alpha >= beta {
                    return entry.value;
                }
            }
        }

        if depth == 0 || is_terminal(board) {
            return self.leaf(board, hash, depth);
        }

        let moves = legal_moves(board, side);
        if moves.is_empty() {
            return self.leaf(board, hash, depth);
        }

        let ordered = order_moves(board, &moves, side, &mut *self.rng);
        let mut value = if maximizing { -INF } else { INF };

        for (i, pit) in ordered.into_iter().enumerate() {
            let outcome = sow(board, pit, side);
            let next = maximizing == outcome.extra_turn;
            let score = self.alpha_beta(&outcome.board, depth - 1, alpha, beta, next);

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        let entry_type = if value <= alpha_orig {
            EntryType::UpperBound
        } else if value >= beta_orig {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        };
        if self.use_transposition {
            self.tt.store(hash, depth, value, entry_type);
        }

        value
    }

    /// Heuristic value of a leaf, cached as exact
    fn leaf(&mut self, board: &Board, hash: u64, depth: u8) -> f64 {
        self.stats.leaves += 1;
        let value = evaluate_heuristic(board, self.strategy);
        if self.use_transposition {
            self.tt.store(hash, depth, value, EntryType::Exact);
        }
        value
    }
}

/// Full-width minimax value of the root, without pruning or caching.
///
/// Follows the same turn rules as [`Searcher::search`] and returns the
/// value the best root move achieves. Exponential in `depth`; meant for
/// verification and small analyses.
pub fn minimax(board: &Board, player: Player, depth: u8, strategy: Strategy) -> f64 {
    let moves = legal_moves(board, player);
    if moves.is_empty() {
        return evaluate_heuristic(board, strategy);
    }

    let child_depth = depth.saturating_sub(1);
    let maximizer = player.is_maximizer();
    let values = moves.into_iter().map(|pit| {
        let outcome = sow(board, pit, player);
        minimax_node(
            &outcome.board,
            child_depth,
            maximizer == outcome.extra_turn,
            strategy,
        )
    });

    if maximizer {
        values.fold(-INF, f64::max)
    } else {
        values.fold(INF, f64::min)
    }
}

fn minimax_node(board: &Board, depth: u8, maximizing: bool, strategy: Strategy) -> f64 {
    if depth == 0 || is_terminal(board) {
        return evaluate_heuristic(board, strategy);
    }

    let side = Player::from_maximizing(maximizing);
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        return evaluate_heuristic(board, strategy);
    }

    let values = moves.into_iter().map(|pit| {
        let outcome = sow(board, pit, side);
        minimax_node(
            &outcome.board,
            depth - 1,
            maximizing == outcome.extra_turn,
            strategy,
        )
    });

    if maximizing {
        values.fold(-INF, f64::max)
    } else {
        values.fold(INF, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::IndexedRandom;

    /// Reachable positions from seeded random playouts, with the side to move
    fn sample_positions(count: usize) -> Vec<(Board, Player)> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);
        let mut positions = Vec::new();

        while positions.len() < count {
            let mut board = Board::new();
            let mut player = Player::One;
            let plies = rng.random_range(0..30);

            for _ in 0..plies {
                if is_terminal(&board) {
                    break;
                }
                let moves = legal_moves(&board, player);
                let pit = *moves.choose(&mut rng).unwrap();
                let outcome = sow(&board, pit, player);
                board = outcome.board;
                if !outcome.extra_turn {
                    player = player.opponent();
                }
            }

            if !is_terminal(&board) && legal_moves(&board, player).len() > 1 {
                positions.push((board, player));
            }
        }

        positions
    }

    #[test]
    fn test_no_legal_moves() {
        let board = Board::from_pits([0, 0, 0, 0, 0, 0, 24, 6, 6, 6, 6, 6, 6, 24]);
        let mut searcher = Searcher::with_seed(1);
        let result = searcher.search(&board, Player::One, 6, Strategy::Balanced);

        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_single_move_returned_without_search() {
        let board = Board::from_pits([4, 0, 0, 0, 0, 0, 10, 6, 6, 6, 6, 6, 6, 10]);
        let mut searcher = Searcher::with_seed(1);
        let result = searcher.search(&board, Player::One, 10, Strategy::Aggressive);

        assert_eq!(result.best_move, Some(0));
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_depth_one_prefers_extra_turn() {
        let mut searcher = Searcher::with_seed(3);
        let result = searcher.search(&Board::new(), Player::One, 1, Strategy::Balanced);

        assert_eq!(result.best_move, Some(0));
        assert_eq!(result.score, 0.5);
        // One leaf per root move
        assert_eq!(result.nodes, 6);
    }

    #[test]
    fn test_depth_two_counts_extra_turn_as_a_ply() {
        // Pit 0 ends in the store: 1-0 with Player 1 to move again and
        // 7 seeds in each of pits 1-5. Any second move leaves 2-0 at the
        // horizon. Pits 1-5 hand the turn over at 1-0 and Player 2
        // answers by sowing past its own store to 1-1, so those lines
        // are worth 0.
        let mut searcher = Searcher::with_seed(6);
        let result = searcher.search(&Board::new(), Player::One, 2, Strategy::Basic);

        assert_eq!(result.best_move, Some(0));
        assert_eq!(result.score, 2.0);
        // 6 children, then 5 replies under pit 0 and 6 under each other pit
        assert_eq!(result.nodes, 6 + 5 + 5 * 6);
        assert_eq!(result.score, minimax(&Board::new(), Player::One, 2, Strategy::Basic));
    }

    #[test]
    fn test_player_two_takes_capture() {
        // Pit 7 (2 seeds) lands in empty pit 9, facing 8 seeds in pit 3
        let board = Board::from_pits([1, 1, 1, 8, 1, 1, 20, 2, 2, 0, 1, 1, 1, 10]);
        let mut searcher = Searcher::with_seed(5);

        let result = searcher.search(&board, Player::Two, 1, Strategy::Basic);
        assert_eq!(result.best_move, Some(7));
        assert_eq!(result.score, 1.0);

        // Two plies: the extra turn from pit 12 first, then the capture
        let result = searcher.search(&board, Player::Two, 2, Strategy::Basic);
        assert_eq!(result.best_move, Some(12));
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_same_seed_same_result() {
        let board = Board::new();
        for strategy in Strategy::ALL {
            let a = Searcher::with_seed(11).search(&board, Player::One, 5, strategy);
            let b = Searcher::with_seed(11).search(&board, Player::One, 5, strategy);
            assert_eq!(a.best_move, b.best_move);
            assert_eq!(a.nodes, b.nodes);
            assert_eq!(a.score, b.score);
        }
    }

    #[test]
    fn test_alphabeta_matches_minimax() {
        for (board, player) in sample_positions(12) {
            for depth in 1..=4 {
                for strategy in Strategy::ALL {
                    let expected = minimax(&board, player, depth, strategy);
                    let result = Searcher::with_seed(depth as u64).search(
                        &board, player, depth, strategy,
                    );
                    assert!(
                        (result.score - expected).abs() < 1e-9,
                        "{board:?} {player} depth {depth} {strategy}: {} != {expected}",
                        result.score
                    );
                }
            }
        }
    }

    #[test]
    fn test_alphabeta_without_table_matches_minimax() {
        for (board, player) in sample_positions(8) {
            let mut searcher = Searcher::with_seed(17);
            searcher.set_transposition(false);
            assert!(!searcher.use_transposition);
            let result = searcher.search(&board, player, 4, Strategy::Defensive);
            let expected = minimax(&board, player, 4, Strategy::Defensive);
            assert!((result.score - expected).abs() < 1e-9);
            assert_eq!(searcher.tt_stats().used, 0);
        }
    }

    #[test]
    fn test_score_independent_of_seed() {
        let board = Board::new();
        let a = Searcher::with_seed(1).search(&board, Player::One, 4, Strategy::Balanced);
        let b = Searcher::with_seed(99).search(&board, Player::One, 4, Strategy::Balanced);
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn test_table_reset_between_searches() {
        let board = Board::new();
        let mut searcher = Searcher::with_seed(8);

        searcher.search(&board, Player::One, 4, Strategy::Basic);
        assert!(searcher.tt_stats().used > 0);

        // A stale basic-strategy table would corrupt balanced values
        let result = searcher.search(&board, Player::One, 4, Strategy::Balanced);
        assert_eq!(result.score, minimax(&board, Player::One, 4, Strategy::Balanced));

        searcher.clear();
        assert_eq!(searcher.tt_stats().used, 0);
    }

    #[test]
    fn test_transpositions_are_reused() {
        let board = Board::new();
        let mut cached = Searcher::with_seed(4);
        let mut plain = Searcher::with_seed(4);
        plain.set_transposition(false);

        let with_tt = cached.search(&board, Player::One, 8, Strategy::Balanced);
        let without_tt = plain.search(&board, Player::One, 8, Strategy::Balanced);

        assert_eq!(with_tt.score, without_tt.score);
        assert!(with_tt.stats.tt_hits > 0);
        assert_eq!(without_tt.stats.tt_probes, 0);
    }

    #[test]
    fn test_returned_move_is_legal() {
        for (board, player) in sample_positions(10) {
            let result = Searcher::with_seed(0).search(&board, player, 3, Strategy::Aggressive);
            let pit = result.best_move.unwrap();
            assert!(legal_moves(&board, player).contains(&pit));
        }
    }
}
