//! Game state management for the Kalaha GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::engine::SearchConfig;
use crate::rules::Outcome;
use crate::{AIEngine, Board, Difficulty, Game, MoveRecord, MoveResult, Player};

use super::theme::SOW_STEP_SECS;

/// Depth cap for hints, so a hint never stalls the UI thread
const HINT_MAX_DEPTH: u8 = 6;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::One }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Progressive reveal of the last move's sowing path
pub struct SowingAnimation {
    pub path: Vec<usize>,
    pub start_time: Instant,
}

impl SowingAnimation {
    pub fn new(path: Vec<usize>) -> Self {
        Self {
            path,
            start_time: Instant::now(),
        }
    }

    /// Cells reached so far
    pub fn visible(&self) -> &[usize] {
        let steps = (self.start_time.elapsed().as_secs_f32() / SOW_STEP_SECS) as usize + 1;
        &self.path[..steps.min(self.path.len())]
    }

    pub fn is_complete(&self) -> bool {
        self.visible().len() == self.path.len()
    }
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<usize>,
    pub animation: Option<SowingAnimation>,
    pub message: Option<String>,

    /// Base seed for reproducible AI moves
    seed: Option<u64>,
}

impl GameState {
    pub fn new(mode: GameMode, difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self {
            game: Game::new(),
            mode,
            difficulty,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            animation: None,
            message: None,
            seed,
        }
    }

    pub fn reset(&mut self) {
        self.game = Game::new();
        self.last_ai_result = None;
        // Dropping the receiver discards any search still running
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.animation = None;
        self.message = None;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    #[inline]
    pub fn current_turn(&self) -> Player {
        self.game.to_move()
    }

    #[inline]
    pub fn game_over(&self) -> Option<Outcome> {
        self.game.outcome()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.game.last_move()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn() == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn() != human,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to sow a pit for the human player
    pub fn try_play(&mut self, pit: usize) -> Result<(), String> {
        if self.game_over().is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pit).map_err(|err| err.to_string())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pit: usize) -> crate::rules::Result<()> {
        let record = self.game.play(pit)?;
        let extra_turn = record.extra_turn;
        let capture = record.capture;
        let player = record.player;
        self.animation = Some(SowingAnimation::new(record.path.clone()));

        self.suggested_move = None;
        self.move_timer.stop();

        self.message = if let Some(capture) = capture {
            Some(format!("{player} captures {} seeds", capture.seeds))
        } else if extra_turn && self.game_over().is_none() {
            Some(format!("{player} gets another turn"))
        } else {
            None
        };

        if self.game_over().is_none() {
            self.move_timer.start();
        }
        Ok(())
    }

    /// Search settings for the next AI move
    fn ai_config(&self) -> SearchConfig {
        let config = SearchConfig::for_difficulty(self.difficulty);
        match self.seed {
            // Vary by ply so a fixed seed still gives a fresh tie-break stream each move
            Some(seed) => config.seed(seed.wrapping_add(self.game.history().len() as u64)),
            None => config,
        }
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over().is_some() {
            return;
        }

        let board = *self.board();
        let player = self.current_turn();
        let config = self.ai_config();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&board, player);
            // The receiver is gone if the game was reset meanwhile
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    log::error!("AI worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            let best_move = move_result.best_move;
            self.last_ai_result = Some(move_result);

            match best_move {
                Some(pit) => {
                    if let Err(err) = self.execute_move(pit) {
                        log::error!("AI move rejected: {err}");
                        self.message = Some(err.to_string());
                    }
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Suggest a move for the side to move
    pub fn request_suggestion(&mut self) {
        if self.game_over().is_some() || self.is_ai_thinking() || !self.is_human_turn() {
            return;
        }

        // Run quick suggestion (capped depth)
        let config = self.ai_config();
        let config = config.depth(config.depth.min(HINT_MAX_DEPTH));
        let mut engine = AIEngine::with_config(config);
        let result = engine.get_move_with_stats(self.board(), self.current_turn());

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo back to the human's last decision.
    ///
    /// In PvE this also takes back every AI move played since, including
    /// chains of extra turns.
    pub fn undo(&mut self) {
        if self.game.history().is_empty() || self.is_ai_thinking() {
            return;
        }

        let count = match self.mode {
            GameMode::PvE { human } => {
                let history = self.game.history();
                match history.iter().rposition(|record| record.player == human) {
                    Some(idx) => history.len() - idx,
                    // Only AI moves so far; nothing of ours to take back
                    None => return,
                }
            }
            GameMode::PvP => 1,
        };

        self.game.undo(count);
        self.suggested_move = None;
        self.animation = None;
        self.message = None;
        self.move_timer.start();
    }

    /// Change difficulty; applies from the next AI move
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            log::info!("difficulty set to {difficulty}");
            self.difficulty = difficulty;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pvp_turns() {
        let mut state = GameState::new(GameMode::PvP, Difficulty::Easy, Some(1));
        assert!(state.is_human_turn());
        assert!(!state.is_ai_turn());

        state.try_play(0).unwrap();
        assert_eq!(state.current_turn(), Player::One);
        assert!(state.message.is_some());

        assert!(state.try_play(0).is_err());
        state.try_play(2).unwrap();
        assert_eq!(state.current_turn(), Player::Two);
    }

    #[test]
    fn test_pve_rejects_moves_on_ai_turn() {
        let mut state = GameState::new(GameMode::PvE { human: Player::Two }, Difficulty::Easy, None);
        assert!(state.is_ai_turn());
        assert_eq!(state.try_play(7), Err("Not your turn".to_string()));
    }

    #[test]
    fn test_pve_undo_takes_back_ai_reply() {
        let mut state = GameState::new(GameMode::PvE { human: Player::One }, Difficulty::Easy, None);
        state.try_play(0).unwrap();
        state.try_play(2).unwrap();
        // Play the AI's reply directly
        state.execute_move(7).unwrap();

        state.undo();
        // Back to before the human's last move, pit 2
        assert_eq!(state.game.history().len(), 1);
        assert_eq!(state.current_turn(), Player::One);
    }

    #[test]
    fn test_suggestion_is_legal() {
        let mut state = GameState::new(GameMode::PvP, Difficulty::Medium, Some(3));
        state.request_suggestion();
        let pit = state.suggested_move.unwrap();
        assert!(state.game.legal_moves().contains(&pit));
    }

    #[test]
    fn test_sowing_animation_starts_with_first_cell() {
        let animation = SowingAnimation::new(vec![1, 2, 3]);
        assert!(!animation.visible().is_empty());
        assert!(animation.visible().len() <= 3);
    }
}
