//! The recursive Tower of Hanoi solver.
//!
//! The solver is split the same way as the rest of the crate: [`plan`] is
//! a pure function producing the canonical move sequence, and [`solve`]
//! walks the same recursion while applying each move to an owned
//! [`PegState`] and reporting it to a [`MoveObserver`].
//!
//! Both follow the classic divide-and-conquer construction. To move `n`
//! disks from `source` to `target`, move the top `n - 1` to `auxiliary`,
//! move disk `n` to `target`, then move the `n - 1` from `auxiliary` onto
//! it. For `n` disks this takes exactly `2^n - 1` moves.

mod observer;

pub use observer::MoveObserver;

use crate::config::{ConfigError, SolverConfig};
use crate::core::{Disk, InvalidMoveError, Move, Peg, PegState};
use tracing::{error, info};

/// Number of moves the optimal solution takes for `n` disks, `2^n - 1`.
///
/// Returns `None` if the count does not fit in a `u64`.
///
/// # Example
///
/// ```rust
/// use hanoi::solver::minimal_moves;
///
/// assert_eq!(minimal_moves(0), Some(0));
/// assert_eq!(minimal_moves(3), Some(7));
/// assert_eq!(minimal_moves(64), Some(u64::MAX));
/// assert_eq!(minimal_moves(65), None);
/// ```
pub fn minimal_moves(n: u32) -> Option<u64> {
    match n {
        0 => Some(0),
        1..=64 => Some(u64::MAX >> (64 - n)),
        _ => None,
    }
}

/// The canonical move sequence for `n` disks, without touching any state.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Disk, Move, Peg};
/// use hanoi::solver::plan;
///
/// let moves = plan(2, Peg::Left, Peg::Middle, Peg::Right);
/// assert_eq!(
///     moves,
///     vec![
///         Move::new(Disk(1), Peg::Left, Peg::Middle),
///         Move::new(Disk(2), Peg::Left, Peg::Right),
///         Move::new(Disk(1), Peg::Middle, Peg::Right),
///     ]
/// );
/// ```
pub fn plan(n: u32, source: Peg, auxiliary: Peg, target: Peg) -> Vec<Move> {
    let capacity = minimal_moves(n)
        .and_then(|count| usize::try_from(count).ok())
        .unwrap_or(0);
    let mut moves = Vec::with_capacity(capacity);
    plan_into(n, source, auxiliary, target, &mut moves);
    moves
}

fn plan_into(n: u32, source: Peg, auxiliary: Peg, target: Peg, moves: &mut Vec<Move>) {
    match n {
        0 => {}
        1 => moves.push(Move::new(Disk(1), source, target)),
        _ => {
            plan_into(n - 1, source, target, auxiliary, moves);
            moves.push(Move::new(Disk(n), source, target));
            plan_into(n - 1, auxiliary, source, target, moves);
        }
    }
}

/// Move the top `n` disks of `source` onto `target`, applying every move to
/// `state` in order and reporting it to `observer`.
///
/// Expects disks `1..=n` to be the top `n` disks of `source`. Any rejected
/// move is a defect in the caller's setup and is returned immediately; no
/// further moves are attempted.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Disk, MoveRecord, Peg, PegState};
/// use hanoi::solver::solve;
///
/// let mut state = PegState::new(3, Peg::Left);
/// let mut lines = Vec::new();
/// let mut observer = |record: &MoveRecord, _: &PegState| lines.push(record.to_string());
///
/// solve(3, Peg::Left, Peg::Middle, Peg::Right, &mut state, &mut observer).unwrap();
///
/// assert_eq!(state.move_count(), 7);
/// assert_eq!(state.peg(Peg::Right), &[Disk(3), Disk(2), Disk(1)]);
/// assert_eq!(lines[0], "Move 1: Disk 1 from left to right");
/// ```
pub fn solve<O>(
    n: u32,
    source: Peg,
    auxiliary: Peg,
    target: Peg,
    state: &mut PegState,
    observer: &mut O,
) -> Result<(), InvalidMoveError>
where
    O: MoveObserver + ?Sized,
{
    match n {
        0 => Ok(()),
        1 => step(Disk(1), source, target, state, observer),
        _ => {
            solve(n - 1, source, target, auxiliary, state, observer)?;
            step(Disk(n), source, target, state, observer)?;
            solve(n - 1, auxiliary, source, target, state, observer)
        }
    }
}

fn step<O>(
    disk: Disk,
    from: Peg,
    to: Peg,
    state: &mut PegState,
    observer: &mut O,
) -> Result<(), InvalidMoveError>
where
    O: MoveObserver + ?Sized,
{
    let record = state.move_disk(disk, from, to)?;
    observer.on_move(&record, state);
    Ok(())
}

/// A configured solver: owns the disk count and peg roles of one run.
///
/// # Example
///
/// ```rust
/// use hanoi::config::SolverConfig;
/// use hanoi::core::{MoveRecord, Peg, PegState};
/// use hanoi::solver::HanoiSolver;
///
/// let solver = HanoiSolver::new(SolverConfig::new(4)).unwrap();
/// let state = solver.run(&mut |_: &MoveRecord, _: &PegState| {}).unwrap();
///
/// assert_eq!(state.move_count(), 15);
/// assert!(state.is_solved_on(Peg::Right));
/// ```
#[derive(Clone, Debug)]
pub struct HanoiSolver {
    config: SolverConfig,
}

impl HanoiSolver {
    /// Create a solver, rejecting an invalid configuration.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The starting configuration: every disk on the source peg.
    pub fn initial_state(&self) -> PegState {
        PegState::new(self.config.disks, self.config.source)
    }

    /// The full move sequence this solver will apply.
    pub fn plan(&self) -> Vec<Move> {
        let c = &self.config;
        plan(c.disks, c.source, c.auxiliary, c.target)
    }

    /// Number of moves a run takes.
    pub fn expected_moves(&self) -> u64 {
        // Config caps the disk count well below 64.
        minimal_moves(self.config.disks).unwrap_or(u64::MAX)
    }

    /// Solve from the initial state and return the final state.
    pub fn run<O>(&self, observer: &mut O) -> Result<PegState, InvalidMoveError>
    where
        O: MoveObserver + ?Sized,
    {
        let mut state = self.initial_state();
        self.run_on(&mut state, observer)?;
        Ok(state)
    }

    /// Solve on a caller-owned state that starts with every disk on the
    /// source peg.
    pub fn run_on<O>(&self, state: &mut PegState, observer: &mut O) -> Result<(), InvalidMoveError>
    where
        O: MoveObserver + ?Sized,
    {
        let c = &self.config;
        info!(
            disks = c.disks,
            source = %c.source,
            auxiliary = %c.auxiliary,
            target = %c.target,
            expected_moves = self.expected_moves(),
            "solving"
        );

        if let Err(err) = solve(c.disks, c.source, c.auxiliary, c.target, state, observer) {
            error!(error = %err, moves = state.move_count(), "solver produced an invalid move");
            return Err(err);
        }

        info!(moves = state.move_count(), "solved");
        Ok(())
    }
}
