//! Game session: turn order, history and the end of the game
//!
//! [`Game`] wraps the pure rules with the bookkeeping a front-end needs:
//! whose turn it is after an extra turn, the moves played so far, undo,
//! and the final result once a side runs out of seeds.

use crate::board::{Board, Player};
use crate::rules::{
    apply_move, cleanup, final_scores, is_terminal, legal_moves, outcome, sowing_path, Capture,
    Outcome, Result, RulesError,
};

/// One move as it was played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub pit: usize,
    /// Position right after the move, before any endgame cleanup
    pub board_after: Board,
    pub extra_turn: bool,
    pub capture: Option<Capture>,
    /// Cells that received a seed, in order
    pub path: Vec<usize>,
}

/// A game in progress or finished.
///
/// ```
/// use kalaha::{Game, Player};
///
/// let mut game = Game::new();
/// let record = game.play(0).unwrap();
/// assert!(record.extra_turn);
/// // Still Player 1's turn after landing in the store
/// assert_eq!(game.to_move(), Player::One);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    start: Board,
    first: Player,
    board: Board,
    to_move: Player,
    history: Vec<MoveRecord>,
    outcome: Option<Outcome>,
}

impl Game {
    /// Standard game, Player 1 to move
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Board::new(), Player::One)
    }

    /// Start from an arbitrary position
    #[must_use]
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let mut game = Self {
            start: board,
            first: to_move,
            board,
            to_move,
            history: Vec::new(),
            outcome: None,
        };
        game.check_end();
        game
    }

    /// Current position. Once the game is over this is the cleaned board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Store totals `(player one, player two)`, counting seeds still in pits
    /// once the game is over
    pub fn scores(&self) -> (u8, u8) {
        if self.is_over() {
            final_scores(&self.board)
        } else {
            (
                self.board.store(Player::One),
                self.board.store(Player::Two),
            )
        }
    }

    /// Pits the side to move may sow; empty once the game is over
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        legal_moves(&self.board, self.to_move)
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Sowing path of the last move, for animation
    pub fn last_path(&self) -> Option<&[usize]> {
        self.history.last().map(|record| record.path.as_slice())
    }

    /// Play `pit` for the side to move.
    ///
    /// On an extra turn the same side moves again; otherwise the turn
    /// passes. When the move empties either side the board is cleaned up
    /// and the result recorded.
    pub fn play(&mut self, pit: usize) -> Result<&MoveRecord> {
        if self.is_over() {
            return Err(RulesError::GameOver);
        }

        let player = self.to_move;
        let outcome = apply_move(&self.board, pit, player)?;
        let path = sowing_path(&self.board, pit, player);

        log::debug!(
            "{player} sows pit {pit}{}{}",
            if outcome.extra_turn { ", extra turn" } else { "" },
            outcome
                .capture
                .map(|c| format!(", captures {} seeds", c.seeds))
                .unwrap_or_default()
        );

        self.board = outcome.board;
        if !outcome.extra_turn {
            self.to_move = player.opponent();
        }
        self.history.push(MoveRecord {
            player,
            pit,
            board_after: outcome.board,
            extra_turn: outcome.extra_turn,
            capture: outcome.capture,
            path,
        });
        self.check_end();

        // Just pushed, so the history is non-empty
        self.history.last().ok_or(RulesError::GameOver)
    }

    /// Take back the last `n` moves (fewer if the history is shorter).
    ///
    /// Rebuilds the position by replaying the remaining moves from the
    /// start. Returns how many moves were undone.
    pub fn undo(&mut self, n: usize) -> usize {
        let keep = self.history.len().saturating_sub(n);
        let undone = self.history.len() - keep;
        if undone == 0 {
            return 0;
        }

        let moves: Vec<usize> = self.history[..keep].iter().map(|r| r.pit).collect();
        self.restart();
        for pit in moves {
            // Replaying moves that were legal when first played
            if let Err(err) = self.play(pit) {
                log::warn!("undo replay stopped at pit {pit}: {err}");
                break;
            }
        }

        log::info!("undid {undone} move(s), {} to move", self.to_move);
        undone
    }

    /// Back to the starting position
    pub fn restart(&mut self) {
        self.board = self.start;
        self.to_move = self.first;
        self.history.clear();
        self.outcome = None;
        self.check_end();
    }

    fn check_end(&mut self) {
        if !is_terminal(&self.board) {
            return;
        }

        self.outcome = outcome(&self.board);
        self.board = cleanup(&self.board);
        let (one, two) = (self.board.store(Player::One), self.board.store(Player::Two));
        match self.outcome {
            Some(Outcome::Winner(winner)) => log::info!("game over: {winner} wins {one}-{two}"),
            _ => log::info!("game over: draw {one}-{two}"),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_turn_keeps_player() {
        let mut game = Game::new();
        game.play(0).unwrap();
        assert_eq!(game.to_move(), Player::One);

        // Pit 1 now holds 7 seeds and runs past the store
        let record = game.play(1).unwrap();
        assert!(!record.extra_turn);
        assert_eq!(game.to_move(), Player::Two);
    }

    #[test]
    fn test_illegal_move_rejected() {
        let mut game = Game::new();
        game.play(0).unwrap();

        assert_eq!(
            game.play(0).unwrap_err(),
            RulesError::IllegalMove {
                pit: 0,
                player: Player::One
            }
        );
        assert!(game.play(7).is_err());
        assert_eq!(game.history().len(), 1);
        assert!(!game.legal_moves().contains(&0));
    }

    #[test]
    fn test_pit_off_board_rejected() {
        let mut game = Game::new();

        assert_eq!(
            game.play(14).unwrap_err(),
            RulesError::IllegalMove {
                pit: 14,
                player: Player::One
            }
        );
        assert!(game.history().is_empty());
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.to_move(), Player::One);
    }

    #[test]
    fn test_capture_recorded() {
        let board = Board::from_pits([4, 0, 0, 0, 0, 0, 10, 6, 6, 6, 6, 6, 6, 10]);
        let mut game = Game::from_position(board, Player::One);

        let record = game.play(0).unwrap();
        let capture = record.capture.unwrap();
        assert_eq!((capture.pit, capture.opposite, capture.seeds), (4, 8, 7));
        assert_eq!(record.path, vec![1, 2, 3, 4]);
        assert_eq!(game.board().store(Player::One), 17);
    }

    #[test]
    fn test_game_ends_with_cleanup() {
        // Player 1's last seed goes into the store, leaving their side empty
        let board = Board::from_pits([0, 0, 0, 0, 0, 1, 30, 2, 2, 2, 2, 2, 2, 29]);
        let mut game = Game::from_position(board, Player::One);

        game.play(5).unwrap();
        assert!(game.is_over());
        assert_eq!(game.board().store(Player::One), 31);
        assert_eq!(game.board().store(Player::Two), 41);
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::Two)));
        assert_eq!(game.scores(), (31, 41));
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.play(7), Err(RulesError::GameOver));
    }

    #[test]
    fn test_terminal_start_position() {
        let board = Board::from_pits([0, 0, 0, 0, 0, 0, 24, 6, 6, 6, 6, 6, 6, 24]);
        let game = Game::from_position(board, Player::One);

        assert!(game.is_over());
        assert_eq!(game.scores(), (24, 60));
    }

    #[test]
    fn test_draw() {
        let board = Board::from_pits([0, 0, 0, 0, 0, 1, 35, 0, 0, 0, 0, 0, 0, 36]);
        let mut game = Game::from_position(board, Player::One);
        game.play(5).unwrap();
        assert_eq!(game.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_undo_replays_history() {
        let mut game = Game::new();
        game.play(0).unwrap();
        let after_first = *game.board();
        game.play(1).unwrap();
        game.play(8).unwrap();

        assert_eq!(game.undo(2), 2);
        assert_eq!(game.board(), &after_first);
        assert_eq!(game.to_move(), Player::One);
        assert_eq!(game.history().len(), 1);

        assert_eq!(game.undo(5), 1);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.undo(1), 0);
    }

    #[test]
    fn test_undo_reopens_finished_game() {
        let board = Board::from_pits([0, 0, 0, 0, 0, 1, 30, 2, 2, 2, 2, 2, 2, 29]);
        let mut game = Game::from_position(board, Player::One);
        game.play(5).unwrap();
        assert!(game.is_over());

        game.undo(1);
        assert!(!game.is_over());
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn test_last_path() {
        let mut game = Game::new();
        assert!(game.last_path().is_none());

        game.play(0).unwrap();
        assert_eq!(game.last_path(), Some(&[1, 2, 3, 4, 5, 6][..]));
        assert_eq!(game.last_move().map(|r| r.pit), Some(0));
    }

    #[test]
    fn test_seeds_conserved_over_game() {
        let mut game = Game::new();
        // Always sow the rightmost non-empty pit
        while !game.is_over() {
            let pit = *game.legal_moves().last().unwrap();
            game.play(pit).unwrap();
            assert_eq!(game.board().total_seeds(), 72);
        }
    }
}
