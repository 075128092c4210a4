//! Board structure holding seed counts

use std::fmt;
use std::ops::Index;

use super::{Player, P1_STORE, P2_STORE, SEEDS_PER_PIT, TOTAL_PITS};

/// Game board: seed counts for 12 pits and 2 stores.
///
/// Layout (index → cell):
/// ```text
///        12  11  10   9   8   7
///   13                            6
///         0   1   2   3   4   5
/// ```
/// Boards are small `Copy` values. The rules never mutate a board in place;
/// every move yields a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; TOTAL_PITS],
}

impl Board {
    /// Standard starting position: 6 seeds in each pit, empty stores
    pub fn new() -> Self {
        let mut cells = [SEEDS_PER_PIT; TOTAL_PITS];
        cells[P1_STORE] = 0;
        cells[P2_STORE] = 0;
        Self { cells }
    }

    /// Board with every cell empty
    pub fn empty() -> Self {
        Self {
            cells: [0; TOTAL_PITS],
        }
    }

    /// Build a board from raw cell counts.
    ///
    /// Sowing assumes the standard 72-seed total, or at least a total of
    /// 255 or less, so that no cell can overflow. The total is only
    /// checked in debug builds; release builds do not catch an overflowing
    /// cell.
    pub fn from_pits(cells: [u8; TOTAL_PITS]) -> Self {
        debug_assert!(cells.iter().map(|&c| c as u32).sum::<u32>() <= u8::MAX as u32);
        Self { cells }
    }

    /// Seeds in a cell
    #[inline]
    pub fn get(&self, idx: usize) -> u8 {
        self.cells[idx]
    }

    /// All 14 cells
    #[inline]
    pub fn pits(&self) -> &[u8; TOTAL_PITS] {
        &self.cells
    }

    #[inline]
    pub(crate) fn add(&mut self, idx: usize, seeds: u8) {
        self.cells[idx] += seeds;
    }

    /// Empty a cell and return what it held
    #[inline]
    pub(crate) fn take(&mut self, idx: usize) -> u8 {
        std::mem::take(&mut self.cells[idx])
    }

    /// Seeds in a player's store
    #[inline]
    pub fn store(&self, player: Player) -> u8 {
        self.cells[player.store()]
    }

    /// Seeds still in play on a player's side
    #[inline]
    pub fn side_seeds(&self, player: Player) -> u32 {
        self.cells[player.pits()].iter().map(|&s| s as u32).sum()
    }

    /// Check if all six pits of a side are empty
    #[inline]
    pub fn side_is_empty(&self, player: Player) -> bool {
        self.cells[player.pits()].iter().all(|&s| s == 0)
    }

    /// Number of empty pits on a side
    #[inline]
    pub fn empty_pits(&self, player: Player) -> usize {
        self.cells[player.pits()].iter().filter(|&&s| s == 0).count()
    }

    /// Total seeds on the board, stores included
    #[inline]
    pub fn total_seeds(&self) -> u32 {
        self.cells.iter().map(|&s| s as u32).sum()
    }

    /// Player 1 store minus Player 2 store
    #[inline]
    pub fn store_diff(&self) -> i32 {
        self.cells[P1_STORE] as i32 - self.cells[P2_STORE] as i32
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Board {
    type Output = u8;

    #[inline]
    fn index(&self, idx: usize) -> &u8 {
        &self.cells[idx]
    }
}

impl From<[u8; TOTAL_PITS]> for Board {
    fn from(cells: [u8; TOTAL_PITS]) -> Self {
        Self::from_pits(cells)
    }
}

impl fmt::Display for Board {
    /// Two-row console layout: Player 2's pits on top (right to left),
    /// stores at the ends, Player 1's pits at the bottom.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top: Vec<String> = Player::Two
            .pits()
            .rev()
            .map(|i| format!("{:2}", self.cells[i]))
            .collect();
        let bottom: Vec<String> = Player::One
            .pits()
            .map(|i| format!("{:2}", self.cells[i]))
            .collect();

        writeln!(f, "      {}", top.join("  "))?;
        writeln!(
            f,
            "({:2})                        ({:2})",
            self.cells[P2_STORE], self.cells[P1_STORE]
        )?;
        write!(f, "      {}", bottom.join("  "))
    }
}
