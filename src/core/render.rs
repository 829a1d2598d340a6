//! Text rendering of the peg grid.

use super::peg::Peg;
use super::state::PegSet;

/// Width of one peg column.
pub const CELL_WIDTH: usize = 6;

/// Width of the separator under the grid.
pub const GRID_WIDTH: usize = CELL_WIDTH * 3;

/// Render the pegs as a grid, highest level first.
///
/// Each level is one line of three centered cells, `[d]` for a disk or `|`
/// for an empty slot. A dashed separator and the column labels `A B C`
/// follow. Every line ends with `\n`. With no disks only the separator and
/// labels are produced.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{render_grid, Peg, PegSet};
///
/// let grid = render_grid(&PegSet::stacked(1, Peg::Middle));
/// assert_eq!(
///     grid,
///     "  |    [1]    |   \n------------------\n  A     B     C   \n"
/// );
/// ```
pub fn render_grid(pegs: &PegSet) -> String {
    let mut out = String::new();

    for level in (0..pegs.max_height()).rev() {
        for peg in Peg::ALL {
            let cell = match pegs.get(peg).get(level) {
                Some(disk) => format!("[{}]", disk),
                None => "|".to_string(),
            };
            out.push_str(&format!("{:^width$}", cell, width = CELL_WIDTH));
        }
        out.push('\n');
    }

    out.push_str(&"-".repeat(GRID_WIDTH));
    out.push('\n');
    for peg in Peg::ALL {
        out.push_str(&format!("{:^width$}", peg.label(), width = CELL_WIDTH));
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Disk;

    const BASE: &str = "------------------\n  A     B     C   \n";

    #[test]
    fn renders_initial_three_disk_tower() {
        let grid = render_grid(&PegSet::stacked(3, Peg::Left));
        let expected = format!(
            "{}{}{}{}",
            " [1]    |     |   \n", " [2]    |     |   \n", " [3]    |     |   \n", BASE
        );
        assert_eq!(grid, expected);
    }

    #[test]
    fn empty_slots_pad_shorter_pegs() {
        let pegs = PegSet {
            left: vec![Disk(3)],
            middle: vec![Disk(2), Disk(1)],
            right: Vec::new(),
        };
        let grid = render_grid(&pegs);
        let expected = format!("{}{}{}", "  |    [1]    |   \n", " [3]   [2]    |   \n", BASE);
        assert_eq!(grid, expected);
    }

    #[test]
    fn empty_pegs_render_only_the_base() {
        assert_eq!(render_grid(&PegSet::default()), BASE);
    }

    #[test]
    fn wide_disk_numbers_stay_centered() {
        let pegs = PegSet {
            left: Vec::new(),
            middle: Vec::new(),
            right: vec![Disk(10)],
        };
        assert!(render_grid(&pegs).starts_with("  |     |    [10] \n"));
    }

    #[test]
    fn every_line_spans_the_grid_width() {
        let grid = render_grid(&PegSet::stacked(4, Peg::Right));
        for line in grid.lines() {
            assert_eq!(line.len(), GRID_WIDTH);
        }
    }
}
