//! Peg model: disks, pegs, the owned peg state and its history.
//!
//! This module contains everything the solver mutates:
//! - `Peg` and `Disk` identities
//! - `PegState`, the single owned configuration plus move counter
//! - `MoveHistory`, the ordered record of applied moves
//! - invariant checking and grid rendering
//!
//! Nothing here depends on the solver.

mod error;
mod history;
mod invariants;
mod peg;
mod render;
mod state;

pub use error::InvalidMoveError;
pub use history::{Move, MoveHistory, MoveRecord};
pub use invariants::{check_invariants, InvariantCheck, InvariantViolation};
pub use peg::{Disk, Peg};
pub use render::{render_grid, CELL_WIDTH, GRID_WIDTH};
pub use state::{PegSet, PegState};
