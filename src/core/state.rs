//! The owned peg configuration.
//!
//! `PegState` is the only mutable state in a run. It is created once with
//! every disk on the source peg and changed only through
//! [`PegState::move_disk`], which validates the move, updates the pegs,
//! counts it and records it.

use super::error::InvalidMoveError;
use super::history::{Move, MoveHistory, MoveRecord};
use super::peg::{Disk, Peg};
use super::render::render_grid;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The disks on each of the three pegs, bottom first.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Disk, Peg, PegSet};
///
/// let pegs = PegSet::stacked(3, Peg::Left);
/// assert_eq!(pegs.get(Peg::Left), &[Disk(3), Disk(2), Disk(1)]);
/// assert!(pegs.get(Peg::Right).is_empty());
/// assert_eq!(pegs.max_height(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PegSet {
    pub left: Vec<Disk>,
    pub middle: Vec<Disk>,
    pub right: Vec<Disk>,
}

impl PegSet {
    /// All `disks` stacked on `peg` in decreasing order, the others empty.
    pub fn stacked(disks: u32, peg: Peg) -> Self {
        let mut pegs = Self::default();
        *pegs.get_mut(peg) = (1..=disks).rev().map(Disk).collect();
        pegs
    }

    pub fn get(&self, peg: Peg) -> &[Disk] {
        match peg {
            Peg::Left => &self.left,
            Peg::Middle => &self.middle,
            Peg::Right => &self.right,
        }
    }

    pub(crate) fn get_mut(&mut self, peg: Peg) -> &mut Vec<Disk> {
        match peg {
            Peg::Left => &mut self.left,
            Peg::Middle => &mut self.middle,
            Peg::Right => &mut self.right,
        }
    }

    /// Topmost disk of `peg`, if any.
    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.get(peg).last().copied()
    }

    /// Height of the tallest peg.
    pub fn max_height(&self) -> usize {
        Peg::ALL
            .into_iter()
            .map(|peg| self.get(peg).len())
            .max()
            .unwrap_or(0)
    }

    /// Iterate over `(peg, disks)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Peg, &[Disk])> + '_ {
        Peg::ALL.into_iter().map(move |peg| (peg, self.get(peg)))
    }
}

/// Three pegs, a move counter and the history of applied moves.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Disk, Peg, PegState};
///
/// let mut state = PegState::new(2, Peg::Left);
///
/// let record = state.move_disk(Disk(1), Peg::Left, Peg::Middle).unwrap();
/// assert_eq!(record.index, 1);
/// assert_eq!(state.move_count(), 1);
///
/// // Disk 2 is now on top of left, disk 1 is not.
/// assert!(state.move_disk(Disk(1), Peg::Left, Peg::Right).is_err());
/// assert_eq!(state.move_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PegState {
    disk_count: u32,
    pegs: PegSet,
    move_count: u64,
    history: MoveHistory,
}

impl PegState {
    /// Create a state with disks `1..=disks` on `source` and the other pegs empty.
    pub fn new(disks: u32, source: Peg) -> Self {
        Self {
            disk_count: disks,
            pegs: PegSet::stacked(disks, source),
            move_count: 0,
            history: MoveHistory::new(),
        }
    }

    /// Reassemble a state from its parts without validating it.
    ///
    /// Callers that take parts from outside (snapshots) must run
    /// [`PegState::validate`] before trusting the result.
    pub(crate) fn from_parts(
        disk_count: u32,
        pegs: PegSet,
        move_count: u64,
        history: MoveHistory,
    ) -> Self {
        Self {
            disk_count,
            pegs,
            move_count,
            history,
        }
    }

    pub fn disk_count(&self) -> u32 {
        self.disk_count
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    pub fn pegs(&self) -> &PegSet {
        &self.pegs
    }

    /// Disks on `peg`, bottom first.
    pub fn peg(&self, peg: Peg) -> &[Disk] {
        self.pegs.get(peg)
    }

    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.pegs.top(peg)
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// True if every disk sits on `peg`.
    pub fn is_solved_on(&self, peg: Peg) -> bool {
        self.pegs.get(peg).len() == self.disk_count as usize
    }

    /// Check whether `disk` may move from `from` to `to` right now.
    ///
    /// Pure; nothing changes whatever the answer.
    pub fn check_move(&self, disk: Disk, from: Peg, to: Peg) -> Result<(), InvalidMoveError> {
        if from == to {
            return Err(InvalidMoveError::SamePeg { disk, peg: from });
        }

        let top = self.pegs.top(from);
        if top != Some(disk) {
            return Err(InvalidMoveError::NotOnTop {
                disk,
                from,
                to,
                top,
            });
        }

        match self.pegs.top(to) {
            Some(below) if below < disk => Err(InvalidMoveError::LargerOnSmaller {
                disk,
                from,
                to,
                below,
            }),
            _ => Ok(()),
        }
    }

    /// Move `disk` from the top of `from` onto `to`.
    ///
    /// On success the move count goes up by one and the returned record is
    /// also appended to the history. On failure nothing changes.
    pub fn move_disk(
        &mut self,
        disk: Disk,
        from: Peg,
        to: Peg,
    ) -> Result<MoveRecord, InvalidMoveError> {
        if let Err(err) = self.check_move(disk, from, to) {
            warn!(disk = disk.size(), %from, %to, error = %err, "rejected move");
            return Err(err);
        }

        self.pegs.get_mut(from).pop();
        self.pegs.get_mut(to).push(disk);
        self.move_count += 1;

        let record = MoveRecord {
            index: self.move_count,
            disk,
            from,
            to,
            timestamp: Utc::now(),
        };
        debug!(
            index = record.index,
            disk = disk.size(),
            %from,
            %to,
            "disk moved"
        );
        self.history.push(record.clone());

        Ok(record)
    }

    /// Apply a [`Move`].
    pub fn apply(&mut self, mv: Move) -> Result<MoveRecord, InvalidMoveError> {
        self.move_disk(mv.disk, mv.from, mv.to)
    }

    /// Text grid of the pegs, top row first.
    ///
    /// See [`render_grid`] for the layout.
    pub fn render(&self) -> String {
        render_grid(&self.pegs)
    }
}
