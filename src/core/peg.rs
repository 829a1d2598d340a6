//! Pegs and disks.
//!
//! The puzzle has exactly three pegs. Each has a stable internal name
//! (`left`, `middle`, `right`) and a display label (`A`, `B`, `C`) used
//! when rendering the grid.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A disk, identified by its size. Smaller number means smaller disk.
///
/// # Example
///
/// ```rust
/// use hanoi::core::Disk;
///
/// assert!(Disk(1) < Disk(2));
/// assert_eq!(Disk(3).to_string(), "3");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Disk(pub u32);

impl Disk {
    /// Size of the disk.
    pub fn size(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three fixed pegs.
///
/// # Example
///
/// ```rust
/// use hanoi::core::Peg;
///
/// assert_eq!(Peg::Left.name(), "left");
/// assert_eq!(Peg::Left.label(), 'A');
/// assert_eq!(Peg::Middle.spare(Peg::Middle), None);
/// assert_eq!(Peg::Left.spare(Peg::Right), Some(Peg::Middle));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Peg {
    Left,
    Middle,
    Right,
}

impl Peg {
    /// All pegs in display order.
    pub const ALL: [Peg; 3] = [Peg::Left, Peg::Middle, Peg::Right];

    /// Internal name, as printed in move lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
        }
    }

    /// Column label used by the grid rendering.
    pub fn label(self) -> char {
        match self {
            Self::Left => 'A',
            Self::Middle => 'B',
            Self::Right => 'C',
        }
    }

    /// Position of the peg in display order.
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }

    /// The third peg, given this one and `other`.
    ///
    /// Returns `None` when both are the same peg.
    pub fn spare(self, other: Peg) -> Option<Peg> {
        if self == other {
            return None;
        }
        Self::ALL.into_iter().find(|p| *p != self && *p != other)
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Peg {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| {
                p.name().eq_ignore_ascii_case(s) || p.label().to_string().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| ConfigError::UnknownPeg {
                name: s.to_string(),
            })
    }
}
