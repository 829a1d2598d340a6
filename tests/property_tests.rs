//! Property-based tests for the solver and the peg state.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated disk counts, peg roles and move attempts.

use hanoi::core::{check_invariants, Disk, Move, MoveRecord, Peg, PegState};
use hanoi::solver::{minimal_moves, plan, solve};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_peg()(variant in 0..3u8) -> Peg {
        Peg::ALL[variant as usize]
    }
}

prop_compose! {
    /// Distinct `(source, auxiliary, target)` roles.
    fn arbitrary_roles()(source in arbitrary_peg(), flip in any::<bool>()) -> (Peg, Peg, Peg) {
        let others: Vec<Peg> = Peg::ALL.into_iter().filter(|p| *p != source).collect();
        if flip {
            (source, others[1], others[0])
        } else {
            (source, others[0], others[1])
        }
    }
}

proptest! {
    #[test]
    fn solve_takes_minimal_moves_and_ends_on_target(
        n in 0..10u32,
        (source, auxiliary, target) in arbitrary_roles()
    ) {
        let mut state = PegState::new(n, source);
        let mut observer = |_: &MoveRecord, _: &PegState| {};
        solve(n, source, auxiliary, target, &mut state, &mut observer).unwrap();

        prop_assert_eq!(Some(state.move_count()), minimal_moves(n));
        let expected: Vec<Disk> = (1..=n).rev().map(Disk).collect();
        prop_assert_eq!(state.peg(target), expected.as_slice());
        prop_assert!(state.peg(source).is_empty());
        prop_assert!(state.peg(auxiliary).is_empty());
    }

    #[test]
    fn invariants_hold_after_every_move(
        n in 0..8u32,
        (source, auxiliary, target) in arbitrary_roles()
    ) {
        let mut state = PegState::new(n, source);
        let mut failures = 0usize;
        let mut observer = |_: &MoveRecord, state: &PegState| {
            if check_invariants(state).is_failure() {
                failures += 1;
            }
        };
        solve(n, source, auxiliary, target, &mut state, &mut observer).unwrap();

        prop_assert_eq!(failures, 0);
    }

    #[test]
    fn every_planned_move_takes_the_top_disk(
        n in 0..8u32,
        (source, auxiliary, target) in arbitrary_roles()
    ) {
        let mut state = PegState::new(n, source);
        for mv in plan(n, source, auxiliary, target) {
            prop_assert_eq!(state.top(mv.from), Some(mv.disk));
            prop_assert!(state.check_move(mv.disk, mv.from, mv.to).is_ok());
            state.apply(mv).unwrap();
        }
    }

    #[test]
    fn plan_is_deterministic(
        n in 0..8u32,
        (source, auxiliary, target) in arbitrary_roles()
    ) {
        prop_assert_eq!(
            plan(n, source, auxiliary, target),
            plan(n, source, auxiliary, target)
        );
    }

    #[test]
    fn render_is_idempotent(
        n in 1..7u32,
        prefix in 0..64usize
    ) {
        let mut state = PegState::new(n, Peg::Left);
        let moves: Vec<Move> = plan(n, Peg::Left, Peg::Middle, Peg::Right);
        for mv in moves.into_iter().take(prefix) {
            state.apply(mv).unwrap();
        }

        let first = state.render();
        let second = state.render();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arbitrary_moves_never_break_invariants(
        n in 1..6u32,
        attempts in prop::collection::vec((1..7u32, arbitrary_peg(), arbitrary_peg()), 0..40)
    ) {
        let mut state = PegState::new(n, Peg::Left);

        for (disk, from, to) in attempts {
            let before = state.pegs().clone();
            let count = state.move_count();

            match state.move_disk(Disk(disk), from, to) {
                Ok(record) => {
                    prop_assert_eq!(record.index, count + 1);
                }
                Err(_) => {
                    prop_assert_eq!(state.pegs(), &before);
                    prop_assert_eq!(state.move_count(), count);
                }
            }

            prop_assert!(state.validate().is_success());
        }

        prop_assert!(state.history().is_contiguous());
    }
}
