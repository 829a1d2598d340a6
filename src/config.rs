//! Solver configuration: how many disks, and which peg plays which role.

use crate::core::Peg;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest disk count a run accepts.
///
/// A run prints every move, so the cap keeps the output (`2^N - 1` moves)
/// within reason.
pub const MAX_DISKS: u32 = 20;

/// Errors in a [`SolverConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Too many disks: {requested} (maximum {max})")]
    TooManyDisks { requested: u32, max: u32 },

    #[error("Peg {peg} is assigned to more than one role")]
    DuplicatePeg { peg: Peg },

    #[error("Unknown peg '{name}' (expected left, middle or right)")]
    UnknownPeg { name: String },
}

/// Configuration of a solver run.
///
/// Missing fields default to the classic three-disk puzzle moved from
/// `left` to `right` through `middle`.
///
/// # Example
///
/// ```rust
/// use hanoi::config::SolverConfig;
/// use hanoi::core::Peg;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.disks, 3);
/// assert_eq!(config.target, Peg::Right);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    /// Number of disks, all starting on `source`.
    pub disks: u32,

    /// Peg holding the tower at the start.
    pub source: Peg,

    /// Spare peg used during the transfer.
    pub auxiliary: Peg,

    /// Peg that must hold the tower at the end.
    pub target: Peg,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            disks: 3,
            source: Peg::Left,
            auxiliary: Peg::Middle,
            target: Peg::Right,
        }
    }
}

impl SolverConfig {
    pub fn new(disks: u32) -> Self {
        Self {
            disks,
            ..Self::default()
        }
    }

    pub fn with_pegs(mut self, source: Peg, auxiliary: Peg, target: Peg) -> Self {
        self.source = source;
        self.auxiliary = auxiliary;
        self.target = target;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.disks > MAX_DISKS {
            return Err(ConfigError::TooManyDisks {
                requested: self.disks,
                max: MAX_DISKS,
            });
        }
        if self.source == self.auxiliary || self.source == self.target {
            return Err(ConfigError::DuplicatePeg { peg: self.source });
        }
        if self.auxiliary == self.target {
            return Err(ConfigError::DuplicatePeg {
                peg: self.auxiliary,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_classic_puzzle() {
        let config = SolverConfig::default();
        assert_eq!(config.disks, 3);
        assert_eq!(
            (config.source, config.auxiliary, config.target),
            (Peg::Left, Peg::Middle, Peg::Right)
        );
    }

    #[test]
    fn accepts_every_permutation_of_pegs() {
        let [a, b, c] = Peg::ALL;
        for (s, x, t) in [(a, b, c), (a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)] {
            assert!(SolverConfig::new(2).with_pegs(s, x, t).validate().is_ok());
        }
    }

    #[test]
    fn rejects_reused_pegs() {
        let config = SolverConfig::new(3).with_pegs(Peg::Left, Peg::Left, Peg::Right);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicatePeg { peg: Peg::Left })
        );

        let config = SolverConfig::new(3).with_pegs(Peg::Left, Peg::Right, Peg::Right);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicatePeg { peg: Peg::Right })
        );
    }

    #[test]
    fn rejects_too_many_disks() {
        assert!(SolverConfig::new(MAX_DISKS).validate().is_ok());
        assert_eq!(
            SolverConfig::new(MAX_DISKS + 1).validate(),
            Err(ConfigError::TooManyDisks {
                requested: MAX_DISKS + 1,
                max: MAX_DISKS,
            })
        );
    }

    #[test]
    fn zero_disks_is_valid() {
        assert!(SolverConfig::new(0).validate().is_ok());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: SolverConfig = serde_json::from_str(r#"{"disks": 5}"#).unwrap();
        assert_eq!(config, SolverConfig::new(5));
    }
}
