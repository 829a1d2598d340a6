//! Hanoi: a recursive Tower of Hanoi solver over an owned peg state
//!
//! The crate follows a "pure core, imperative shell" split. The move
//! sequence is a pure function of the disk count and the peg roles; the
//! only mutable value is the explicitly owned [`PegState`](core::PegState),
//! which validates, counts and records every move applied to it.
//!
//! # Core Concepts
//!
//! - **Pegs and disks**: three fixed pegs (`left`, `middle`, `right`) holding
//!   disks that must stay strictly decreasing from bottom to top
//! - **PegState**: the single owned configuration plus move counter and history
//! - **Solver**: the classic recursion, `2^N - 1` moves for `N` disks
//! - **Snapshots**: validated JSON/binary capture of a state
//!
//! # Example
//!
//! ```rust
//! use hanoi::core::{Disk, MoveRecord, Peg, PegState};
//! use hanoi::solver::solve;
//!
//! let mut state = PegState::new(3, Peg::Left);
//! let mut print = |record: &MoveRecord, state: &PegState| {
//!     println!("{}", record);
//!     print!("{}", state.render());
//! };
//!
//! solve(3, Peg::Left, Peg::Middle, Peg::Right, &mut state, &mut print).unwrap();
//!
//! assert_eq!(state.move_count(), 7);
//! assert_eq!(state.peg(Peg::Right), &[Disk(3), Disk(2), Disk(1)]);
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod snapshot;
pub mod solver;

// Re-export commonly used types
pub use crate::config::{ConfigError, SolverConfig};
pub use crate::core::{Disk, InvalidMoveError, Move, MoveRecord, Peg, PegState};
pub use crate::solver::{minimal_moves, plan, solve, HanoiSolver, MoveObserver};
