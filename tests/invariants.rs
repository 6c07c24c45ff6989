use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use checkers_engine::{GameState, MoveError, Square};

const MAX_PLIES: usize = 400;

/// Play random legal moves from the opening, checking engine invariants after each one.
///
/// `inspect` sees every live position before its move is chosen.
fn random_game(seed: u64, mut inspect: impl FnMut(&GameState)) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new_game();

    for _ in 0..MAX_PLIES {
        if state.is_game_over().is_some() {
            break;
        }
        inspect(&state);
        let moves = state.legal_moves();
        assert!(!moves.is_empty(), "live game without legal moves");

        if let Some(required) = state.pending_chain() {
            assert!(moves.iter().all(|m| m.from == required && m.is_capture()));
        }
        if state.must_capture() {
            assert!(moves.iter().all(|m| m.is_capture()));
        }

        let mv = moves[rng.gen_range(0..moves.len())];
        let mover = state.turn();
        let before = state.clone();
        let piece = before.board().get(mv.from).expect("legal move from an empty square");

        let applied = state.apply_move_mut(mv.from, mv.to).expect("legal move rejected");
        assert_eq!(applied.mv, mv);

        // Piece count never grows, and drops by exactly one per capture.
        let lost = before.board().piece_count() - state.board().piece_count();
        assert_eq!(lost, usize::from(mv.is_capture()));

        // Men only move forward; kings never revert.
        if !piece.is_king {
            let dr = i32::from(mv.to.row()) - i32::from(mv.from.row());
            assert_eq!(dr.signum(), i32::from(mover.forward()));
        }
        let landed = state.board().get(mv.to).expect("moved piece vanished");
        assert_eq!(landed.color, mover);
        assert!(landed.is_king || !piece.is_king);
        for (sq, p) in before.board().pieces() {
            if p.is_king && sq != mv.from && Some(sq) != mv.captured {
                assert_eq!(state.board().get(sq), Some(p));
            }
        }

        // Pieces stay on dark squares.
        assert!(state.board().pieces().all(|(sq, _)| sq.is_playable()));

        // Each capture scored for exactly one side.
        let scores = state.scores();
        assert_eq!(
            (scores.red + scores.black) as usize,
            24 - state.board().piece_count()
        );

        if applied.chain {
            assert_eq!(state.turn(), mover);
            assert_eq!(state.pending_chain(), Some(mv.to));
        } else {
            assert_eq!(state.turn(), mover.other());
            assert_eq!(state.pending_chain(), None);
        }
    }
}

#[test]
fn random_games_respect_engine_invariants() {
    for seed in 0..40 {
        random_game(seed, |_| {});
    }
}

#[test]
fn highlight_query_agrees_with_move_list() {
    for seed in 100..110 {
        random_game(seed, |state| {
            let moves = state.legal_moves();
            for from in Square::playable() {
                let mut listed: Vec<Square> = moves
                    .iter()
                    .filter(|m| m.from == from)
                    .map(|m| m.to)
                    .collect();
                listed.sort();
                let highlighted: Vec<Square> =
                    state.legal_destinations(from).targets().into_iter().collect();
                assert_eq!(listed, highlighted);
            }
        });
    }
}

#[test]
fn simple_steps_fail_for_every_piece_under_forced_capture() {
    let mut forced_positions = 0;
    for seed in 200..240 {
        random_game(seed, |state| {
            if !state.must_capture() {
                return;
            }
            forced_positions += 1;
            for from in state.board().squares_of(state.turn()) {
                for to in Square::playable() {
                    if from.delta_to(to).diagonal_len() != Some(1) {
                        continue;
                    }
                    match state.apply_move(from, to) {
                        Err(MoveError::MandatoryCapture { .. }) => {}
                        Err(MoveError::InvalidSource { .. })
                            if state.pending_chain().is_some_and(|sq| sq != from) => {}
                        other => panic!("step {from}->{to} under forced capture gave {other:?}"),
                    }
                }
            }
        });
    }
    assert!(forced_positions > 0);
}
