//! # Board Configuration
//!
//! Static board parameters: grid dimensions, the number of gem kinds, the
//! run length that counts as a match, and the edge policy applied when a
//! match window touches the board boundary.

use std::fmt;

/// How match windows treat the low edge of the board.
///
/// The legacy boundary test compares negative offsets with a strict `> 0`,
/// which silently excludes row/column 0 from the low side of every window.
/// `Legacy` keeps that behavior for compatibility; `Inclusive` is the
/// corrected reading that allows index 0. Both are pinned by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Reads at negative offsets must land on index >= 1.
    #[default]
    Legacy,
    /// Reads at negative offsets may land on index 0.
    Inclusive,
}

impl EdgePolicy {
    /// Smallest index a negative-offset read may land on.
    pub fn low_floor(self) -> usize {
        match self {
            EdgePolicy::Legacy => 1,
            EdgePolicy::Inclusive => 0,
        }
    }
}

/// Static parameters of a board. Shared by the grid, the match rule, and the
/// scanner; constructed once at startup and never mutated mid-game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Number of distinct gem kinds cells are drawn from.
    pub gem_kinds: u8,
    /// Length of an axis-aligned run of equal gems that counts as a match.
    pub run_length: usize,
    /// Boundary handling for match windows.
    pub edge_policy: EdgePolicy,
}

impl Default for BoardConfig {
    /// The classic parameters: 10x10, six gem kinds, runs of three, legacy
    /// edge handling.
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            gem_kinds: 6,
            run_length: 3,
            edge_policy: EdgePolicy::Legacy,
        }
    }
}

impl BoardConfig {
    /// Checks that the parameters describe a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run_length < 2 {
            return Err(ConfigError::RunTooShort {
                run_length: self.run_length,
            });
        }
        if self.rows < self.run_length || self.cols < self.run_length {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                cols: self.cols,
                run_length: self.run_length,
            });
        }
        if self.gem_kinds == 0 {
            return Err(ConfigError::NoGemKinds);
        }
        Ok(())
    }
}

/// Errors reported by [`BoardConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The board cannot hold a single run.
    BoardTooSmall {
        rows: usize,
        cols: usize,
        run_length: usize,
    },
    /// Runs shorter than two cells are degenerate.
    RunTooShort { run_length: usize },
    /// At least one gem kind is required to fill the board.
    NoGemKinds,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardTooSmall {
                rows,
                cols,
                run_length,
            } => write!(
                f,
                "{}x{} board cannot hold a run of {}",
                rows, cols, run_length
            ),
            ConfigError::RunTooShort { run_length } => {
                write!(f, "run length {} is too short (minimum 2)", run_length)
            }
            ConfigError::NoGemKinds => write!(f, "at least one gem kind is required"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(BoardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_board_too_small() {
        let config = BoardConfig {
            rows: 2,
            cols: 10,
            ..BoardConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoardTooSmall { .. })
        ));
    }

    #[test]
    fn test_degenerate_run() {
        let config = BoardConfig {
            run_length: 1,
            ..BoardConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RunTooShort { run_length: 1 })
        ));
    }

    #[test]
    fn test_no_gem_kinds() {
        let config = BoardConfig {
            gem_kinds: 0,
            ..BoardConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoGemKinds));
    }

    #[test]
    fn test_low_floor() {
        assert_eq!(EdgePolicy::Legacy.low_floor(), 1);
        assert_eq!(EdgePolicy::Inclusive.low_floor(), 0);
    }
}
