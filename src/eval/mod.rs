//! Evaluation module for Kalaha positions
//!
//! Positions are always scored from Player 1's point of view: positive
//! values favor Player 1. The score combines:
//! - Store difference (seeds already banked)
//! - Side seed difference (seeds still in play), weighted per strategy
//! - An empty-pit penalty for the defensive strategy

pub mod heuristic;
pub mod strategy;

pub use heuristic::evaluate_heuristic;
pub use strategy::{Strategy, StrategyWeights};
