//! Evaluation strategies and their weights

use std::fmt;

/// Heuristic evaluation strategy.
///
/// A closed set; names that don't match any variant parse to
/// [`Strategy::Balanced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Store difference only
    Basic,
    /// Store difference plus half the side seed difference
    #[default]
    Balanced,
    /// Heavy side seed weight, penalizes empty pits on Player 1's side
    Defensive,
    /// Light side seed weight, favors banking seeds quickly
    Aggressive,
}

/// Weights applied on top of the store difference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyWeights {
    /// Multiplier for (Player 1 side seeds - Player 2 side seeds)
    pub side_seeds: f64,
    /// Penalty per empty Player 1 pit
    pub empty_pit_penalty: f64,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Basic,
        Strategy::Balanced,
        Strategy::Defensive,
        Strategy::Aggressive,
    ];

    /// Parse a strategy name, case-insensitive. Unknown names fall back to
    /// `Balanced`.
    pub fn from_name(name: &str) -> Strategy {
        match name.trim().to_ascii_lowercase().as_str() {
            "basic" => Strategy::Basic,
            "balanced" => Strategy::Balanced,
            "defensive" => Strategy::Defensive,
            "aggressive" => Strategy::Aggressive,
            other => {
                log::debug!("unknown strategy {other:?}, using balanced");
                Strategy::Balanced
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Basic => "basic",
            Strategy::Balanced => "balanced",
            Strategy::Defensive => "defensive",
            Strategy::Aggressive => "aggressive",
        }
    }

    #[must_use]
    pub fn weights(self) -> StrategyWeights {
        match self {
            Strategy::Basic => StrategyWeights {
                side_seeds: 0.0,
                empty_pit_penalty: 0.0,
            },
            Strategy::Balanced => StrategyWeights {
                side_seeds: 0.5,
                empty_pit_penalty: 0.0,
            },
            Strategy::Defensive => StrategyWeights {
                side_seeds: 0.8,
                empty_pit_penalty: 2.0,
            },
            Strategy::Aggressive => StrategyWeights {
                side_seeds: 0.3,
                empty_pit_penalty: 0.0,
            },
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Strategy::from_name(s))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::from_name(strategy.name()), strategy);
        }
        assert_eq!(Strategy::from_name("  Aggressive "), Strategy::Aggressive);
    }

    #[test]
    fn test_unknown_name_falls_back_to_balanced() {
        assert_eq!(Strategy::from_name("reckless"), Strategy::Balanced);
        assert_eq!(Strategy::from_name(""), Strategy::Balanced);
        assert_eq!("???".parse::<Strategy>(), Ok(Strategy::Balanced));
        assert_eq!(Strategy::default(), Strategy::Balanced);
    }

    #[test]
    fn test_weights() {
        assert_eq!(Strategy::Basic.weights().side_seeds, 0.0);
        assert_eq!(Strategy::Balanced.weights().side_seeds, 0.5);
        assert_eq!(Strategy::Defensive.weights().empty_pit_penalty, 2.0);
        assert_eq!(Strategy::Aggressive.weights().side_seeds, 0.3);
    }
}
