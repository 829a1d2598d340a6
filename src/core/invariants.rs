//! Peg-set invariants, checked with `Validation`.
//!
//! A well-formed state has every peg strictly decreasing from bottom to
//! top, holds each disk `1..=N` exactly once across the three pegs, and
//! keeps one history record per counted move, numbered `1, 2, 3, ...`. The check accumulates every
//! violation instead of stopping at the first one.

use super::peg::{Disk, Peg};
use super::state::PegState;
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A broken peg-set invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Peg {peg} is not strictly decreasing at position {position}")]
    NotDecreasing { peg: Peg, position: usize },

    #[error("Disk {disk} is on no peg")]
    MissingDisk { disk: Disk },

    #[error("Disk {disk} appears {count} times")]
    DuplicateDisk { disk: Disk, count: usize },

    #[error("Disk {disk} is outside 1..={disk_count}")]
    UnknownDisk { disk: Disk, disk_count: u32 },

    #[error("Move count {moves} does not match {recorded} recorded moves")]
    CountMismatch { moves: u64, recorded: usize },

    #[error("Recorded move {position} is numbered {index}")]
    HistoryGap { position: u64, index: u64 },
}

/// Outcome of an invariant check: success, or every violation found.
pub type InvariantCheck = Validation<(), NonEmptyVec<InvariantViolation>>;

/// Check every invariant of `state`, accumulating ALL violations.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{check_invariants, Peg, PegState};
///
/// let state = PegState::new(4, Peg::Left);
/// assert!(check_invariants(&state).is_success());
/// ```
pub fn check_invariants(state: &PegState) -> InvariantCheck {
    let mut checks: Vec<InvariantCheck> = Vec::new();

    for (peg, disks) in state.pegs().iter() {
        checks.push(check_decreasing(peg, disks));
    }

    let mut seen: BTreeMap<Disk, usize> = BTreeMap::new();
    for (_, disks) in state.pegs().iter() {
        for disk in disks {
            *seen.entry(*disk).or_insert(0) += 1;
        }
    }

    let disk_count = state.disk_count();
    for (disk, count) in &seen {
        if disk.size() == 0 || disk.size() > disk_count {
            checks.push(Validation::fail(InvariantViolation::UnknownDisk {
                disk: *disk,
                disk_count,
            }));
        } else if *count > 1 {
            checks.push(Validation::fail(InvariantViolation::DuplicateDisk {
                disk: *disk,
                count: *count,
            }));
        }
    }

    for size in 1..=disk_count {
        let disk = Disk(size);
        if !seen.contains_key(&disk) {
            checks.push(Validation::fail(InvariantViolation::MissingDisk { disk }));
        }
    }

    let recorded = state.history().len();
    let check = if recorded as u64 == state.move_count() {
        Validation::success(())
    } else {
        Validation::fail(InvariantViolation::CountMismatch {
            moves: state.move_count(),
            recorded,
        })
    };
    checks.push(check);

    let gap = state
        .history()
        .records()
        .iter()
        .zip(1u64..)
        .find(|(record, position)| record.index != *position);
    if let Some((record, position)) = gap {
        checks.push(Validation::fail(InvariantViolation::HistoryGap {
            position,
            index: record.index,
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_decreasing(peg: Peg, disks: &[Disk]) -> InvariantCheck {
    match disks.windows(2).position(|pair| pair[0] <= pair[1]) {
        Some(i) => Validation::fail(InvariantViolation::NotDecreasing {
            peg,
            position: i + 1,
        }),
        None => Validation::success(()),
    }
}

impl PegState {
    /// Check this state's invariants. See [`check_invariants`].
    pub fn validate(&self) -> InvariantCheck {
        check_invariants(self)
    }
}
