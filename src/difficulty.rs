//! AI difficulty levels
//!
//! A difficulty is only a name for a search depth and an evaluation
//! strategy. Deeper searches see further past extra-turn chains and
//! captures; the heavier strategies value seeds still on the board.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::eval::Strategy;

/// Difficulty level selectable in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Search settings behind a difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    /// Plies searched
    pub depth: u8,
    /// Leaf evaluation
    pub strategy: Strategy,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse a difficulty name, case-insensitive. Unknown names fall back
    /// to `Medium`.
    pub fn from_name(name: &str) -> Difficulty {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => {
                log::debug!("unknown difficulty {other:?}, using medium");
                Difficulty::Medium
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    #[must_use]
    pub fn profile(self) -> DifficultyProfile {
        let (depth, strategy) = match self {
            Difficulty::Easy => (2, Strategy::Basic),
            Difficulty::Medium => (6, Strategy::Balanced),
            Difficulty::Hard => (10, Strategy::Aggressive),
        };
        DifficultyProfile { depth, strategy }
    }
}

/// Search settings for a difficulty name (see [`Difficulty::from_name`])
///
/// ```
/// use kalaha::difficulty_profile;
/// use kalaha::eval::Strategy;
///
/// let profile = difficulty_profile("hard");
/// assert_eq!((profile.depth, profile.strategy), (10, Strategy::Aggressive));
/// assert_eq!(difficulty_profile("nightmare").depth, 6);
/// ```
#[must_use]
pub fn difficulty_profile(name: &str) -> DifficultyProfile {
    Difficulty::from_name(name).profile()
}

impl FromStr for Difficulty {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Difficulty::from_name(s))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}
