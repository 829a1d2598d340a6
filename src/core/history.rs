//! Move history tracking.
//!
//! Every applied move is recorded in order, so a finished run can be
//! inspected, replayed or captured in a snapshot.

use super::peg::{Disk, Peg};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A single proposed relocation of a disk.
///
/// `Move` says nothing about whether it is legal; that is decided when it is
/// applied to a [`PegState`](super::PegState).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Move {
    /// Disk being moved
    pub disk: Disk,
    /// Peg the disk is taken from
    pub from: Peg,
    /// Peg the disk is placed on
    pub to: Peg,
}

impl Move {
    pub fn new(disk: Disk, from: Peg, to: Peg) -> Self {
        Self { disk, from, to }
    }
}

/// Record of a move that was applied.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Disk, MoveRecord, Peg};
/// use chrono::Utc;
///
/// let record = MoveRecord {
///     index: 1,
///     disk: Disk(1),
///     from: Peg::Left,
///     to: Peg::Right,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to_string(), "Move 1: Disk 1 from left to right");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based position of the move; equals the move count right after it
    pub index: u64,
    /// The disk that moved
    pub disk: Disk,
    /// Peg the disk left
    pub from: Peg,
    /// Peg the disk landed on
    pub to: Peg,
    /// When the move was applied
    pub timestamp: DateTime<Utc>,
}

impl MoveRecord {
    /// The move this record describes, without bookkeeping.
    pub fn as_move(&self) -> Move {
        Move::new(self.disk, self.from, self.to)
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move {}: Disk {} from {} to {}",
            self.index, self.disk, self.from, self.to
        )
    }
}

/// Ordered history of applied moves.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Disk, MoveHistory, MoveRecord, Peg};
/// use chrono::Utc;
///
/// let mut history = MoveHistory::new();
/// assert!(history.is_empty());
///
/// history.push(MoveRecord {
///     index: 1,
///     disk: Disk(1),
///     from: Peg::Left,
///     to: Peg::Middle,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.moves()[0].to, Peg::Middle);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// All records in the order they were applied.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// The bare move sequence, in order.
    pub fn moves(&self) -> Vec<Move> {
        self.records.iter().map(MoveRecord::as_move).collect()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Time between the first and last recorded move.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// True if the indices run `1, 2, 3, ...` without gaps.
    pub fn is_contiguous(&self) -> bool {
        self.records
            .iter()
            .zip(1u64..)
            .all(|(record, expected)| record.index == expected)
    }
}
