//! GUI module for the Kalaha game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::{AppSettings, KalahaApp};
pub use game_state::{GameMode, GameState};
