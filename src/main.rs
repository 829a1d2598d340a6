//! `hanoi`: solve the Tower of Hanoi and print every move.
//!
//! Prints each move as `Move <k>: Disk <d> from <source> to <target>`
//! followed by the peg grid, then the total move count.

use anyhow::{bail, Context, Result};
use clap::Parser;
use hanoi::config::SolverConfig;
use hanoi::core::{MoveRecord, Peg, PegState};
use hanoi::snapshot::Snapshot;
use hanoi::solver::HanoiSolver;
use stillwater::validation::Validation;

const RULE_WIDTH: usize = 30;

#[derive(Parser)]
#[command(
    name = "hanoi",
    version,
    about = "Solve the Tower of Hanoi recursively and show every move"
)]
struct Cli {
    /// Number of disks, all starting on the source peg.
    #[arg(short, long, default_value_t = 3)]
    disks: u32,

    /// Peg holding the tower at the start (left, middle or right).
    #[arg(long, default_value = "left")]
    source: Peg,

    /// Spare peg used during the transfer.
    #[arg(long, default_value = "middle")]
    auxiliary: Peg,

    /// Peg that holds the tower at the end.
    #[arg(long, default_value = "right")]
    target: Peg,

    /// Print move lines only, without the peg grid.
    #[arg(short, long)]
    quiet: bool,

    /// Check every peg invariant after each move.
    #[arg(long)]
    verify: bool,

    /// Print the final state as a JSON snapshot.
    #[arg(long)]
    snapshot: bool,
}

impl Cli {
    fn config(&self) -> SolverConfig {
        SolverConfig::new(self.disks).with_pegs(self.source, self.auxiliary, self.target)
    }
}

fn main() {
    hanoi::logging::init();

    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let solver = HanoiSolver::new(cli.config()).context("invalid configuration")?;

    println!("Solving Tower of Hanoi for {} disks:", solver.config().disks);
    let mut state = solver.initial_state();
    if !cli.quiet {
        print_pegs(&state);
    }

    let mut violations: Vec<String> = Vec::new();
    let mut observer = |record: &MoveRecord, state: &PegState| {
        println!("{}", record);
        if !cli.quiet {
            print_pegs(state);
        }
        if cli.verify {
            if let Validation::Failure(errors) = state.validate() {
                violations.extend(
                    errors
                        .iter()
                        .map(|e| format!("after move {}: {}", record.index, e)),
                );
            }
        }
    };

    solver
        .run_on(&mut state, &mut observer)
        .context("internal error: solver produced an invalid move")?;

    if !violations.is_empty() {
        bail!("peg invariants violated:\n{}", violations.join("\n"));
    }

    println!("\nTotal Moves: {}", state.move_count());

    if cli.snapshot {
        let json = Snapshot::capture(&state)
            .to_json()
            .context("failed to serialize snapshot")?;
        println!("\n{}", json);
    }

    Ok(())
}

fn print_pegs(state: &PegState) {
    println!("\nCurrent Peg State:");
    print!("{}", state.render());
    println!("{}", "=".repeat(RULE_WIDTH));
}
