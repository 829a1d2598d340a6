//! Move errors.

use super::peg::{Disk, Peg};
use thiserror::Error;

/// A move request that breaks the single legality rule: only the top disk
/// of a peg may move, and never onto itself or onto a smaller disk.
///
/// The solver never produces such a move, so seeing one means the caller
/// has a logic defect. It is not meant to be recovered from.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidMoveError {
    #[error("Disk {disk} is not on top of {from} (top: {}); cannot move it to {to}", describe_top(.top))]
    NotOnTop {
        disk: Disk,
        from: Peg,
        to: Peg,
        top: Option<Disk>,
    },

    #[error("Disk {disk} cannot move from {from} onto smaller disk {below} on {to}")]
    LargerOnSmaller {
        disk: Disk,
        from: Peg,
        to: Peg,
        below: Disk,
    },

    #[error("Disk {disk} cannot move from {peg} to itself")]
    SamePeg { disk: Disk, peg: Peg },
}

impl InvalidMoveError {
    /// The disk named by the rejected move.
    pub fn disk(&self) -> Disk {
        match self {
            Self::NotOnTop { disk, .. }
            | Self::LargerOnSmaller { disk, .. }
            | Self::SamePeg { disk, .. } => *disk,
        }
    }
}

fn describe_top(top: &Option<Disk>) -> String {
    match top {
        Some(disk) => disk.to_string(),
        None => "empty".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_on_top_message_names_disk_source_and_target() {
        let err = InvalidMoveError::NotOnTop {
            disk: Disk(3),
            from: Peg::Left,
            to: Peg::Right,
            top: Some(Disk(1)),
        };
        assert_eq!(
            err.to_string(),
            "Disk 3 is not on top of left (top: 1); cannot move it to right"
        );
    }

    #[test]
    fn empty_source_is_described() {
        let err = InvalidMoveError::NotOnTop {
            disk: Disk(1),
            from: Peg::Middle,
            to: Peg::Left,
            top: None,
        };
        assert!(err.to_string().contains("(top: empty)"));
        assert_eq!(err.disk(), Disk(1));
    }

    #[test]
    fn same_peg_message() {
        let err = InvalidMoveError::SamePeg {
            disk: Disk(2),
            peg: Peg::Right,
        };
        assert_eq!(err.to_string(), "Disk 2 cannot move from right to itself");
    }
}
