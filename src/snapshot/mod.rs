//! Capture and restore of a peg state.
//!
//! A snapshot holds the pegs, the move count and the full move history, so
//! a run can be inspected after the fact or resumed later. Snapshots are
//! validated on restore; a tampered or inconsistent snapshot never becomes a
//! `PegState`.

use crate::config::MAX_DISKS;
use crate::core::{MoveHistory, Peg, PegSet, PegState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of a [`PegState`].
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Disk, Peg, PegState};
/// use hanoi::snapshot::Snapshot;
///
/// let mut state = PegState::new(2, Peg::Left);
/// state.move_disk(Disk(1), Peg::Left, Peg::Middle).unwrap();
///
/// let json = Snapshot::capture(&state).to_json().unwrap();
/// let restored = Snapshot::from_json(&json).unwrap().restore().unwrap();
///
/// assert_eq!(restored.pegs(), state.pegs());
/// assert_eq!(restored.move_count(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Number of disks in play
    pub disk_count: u32,

    /// Disks on each peg, bottom first
    pub pegs: PegSet,

    /// Moves applied so far
    pub move_count: u64,

    /// Every applied move, in order
    pub history: MoveHistory,
}

impl Snapshot {
    /// Capture the current state.
    pub fn capture(state: &PegState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            disk_count: state.disk_count(),
            pegs: state.pegs().clone(),
            move_count: state.move_count(),
            history: state.history().clone(),
        }
    }

    /// Rebuild the state, checking the version, the disk count, every
    /// invariant, and that replaying the history reproduces the pegs.
    pub fn restore(self) -> Result<PegState, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        if self.disk_count > MAX_DISKS {
            return Err(SnapshotError::TooManyDisks {
                found: self.disk_count,
                max: MAX_DISKS,
            });
        }

        let state = PegState::from_parts(self.disk_count, self.pegs, self.move_count, self.history);

        if let Validation::Failure(errors) = state.validate() {
            return Err(SnapshotError::ValidationFailed(
                errors.iter().cloned().collect(),
            ));
        }

        replay(&state)?;
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }
}

/// Replay the history from a full tower and compare with the pegs.
///
/// A state always starts with every disk on one peg, so an empty history
/// must leave such a tower, and a non-empty one starts from the peg its
/// first move takes a disk from.
fn replay(state: &PegState) -> Result<(), SnapshotError> {
    let disk_count = state.disk_count();
    let Some(first) = state.history().records().first() else {
        let is_tower = Peg::ALL
            .into_iter()
            .any(|peg| state.pegs() == &PegSet::stacked(disk_count, peg));
        return if is_tower {
            Ok(())
        } else {
            Err(SnapshotError::HistoryMismatch(
                "no moves recorded but the disks are not stacked on one peg".to_string(),
            ))
        };
    };

    let mut replayed = PegState::new(disk_count, first.from);
    for record in state.history().records() {
        replayed.apply(record.as_move()).map_err(|e| {
            SnapshotError::HistoryMismatch(format!("move {}: {}", record.index, e))
        })?;
    }

    if replayed.pegs() != state.pegs() {
        return Err(SnapshotError::HistoryMismatch(
            "replayed moves end in a different configuration".to_string(),
        ));
    }
    Ok(())
}
