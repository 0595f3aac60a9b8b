//! Board and rules integration tests, including random playouts.

use proptest::prelude::*;

use stonehenge::games::stonehenge::{StonehengeGame, StonehengeState};
use stonehenge::rules::{Game, GameState};
use stonehenge::{GameError, Label, Layout, Player, RegionKind};

/// Check every capture-related invariant of one state.
fn assert_consistent(state: &StonehengeState) {
    let board = state.board();
    let layout = board.layout();

    for player in Player::ALL {
        assert_eq!(usize::from(state.score(player)), board.captured_count(player));
    }
    let total = usize::from(state.score(Player::One)) + usize::from(state.score(Player::Two));
    assert_eq!(total + board.uncaptured_count(), layout.region_count());

    for (id, region) in layout.regions() {
        match board.capture(id) {
            Some(owner) => assert!(region.reaches_capture(board.owned_in(id, owner))),
            None => {
                for player in Player::ALL {
                    assert!(!region.reaches_capture(board.owned_in(id, player)));
                }
            }
        }
    }
}

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn test_counts_for_every_side_length() {
    for n in 1..=5 {
        let layout = Layout::new(n).unwrap();
        assert_eq!(layout.cell_count(), n * (n + 3) / 2 + n);
        assert_eq!(layout.region_count(), 3 * (n + 1));
        for kind in RegionKind::ALL {
            assert_eq!(layout.regions_of(kind).count(), n + 1);
        }
    }
}

#[test]
fn test_every_cell_on_three_lines() {
    let layout = Layout::new(4).unwrap();
    for &label in layout.labels() {
        let id = layout.cell(label).unwrap();
        let [row, left, right] = layout.regions_of_cell(id);
        assert_eq!(layout.region(row).kind, RegionKind::Row);
        assert_eq!(layout.region(left).kind, RegionKind::LeftDiagonal);
        assert_eq!(layout.region(right).kind, RegionKind::RightDiagonal);
        for region in [row, left, right] {
            assert!(layout.region(region).cells.contains(&id));
        }
    }
}

#[test]
fn test_unsupported_side_lengths() {
    assert!(matches!(StonehengeGame::new(0, true), Err(GameError::UnsupportedSideLength(0))));
    assert!(matches!(StonehengeGame::new(6, true), Err(GameError::UnsupportedSideLength(6))));
}

// =============================================================================
// Rules
// =============================================================================

#[test]
fn test_side_one_any_move_wins() {
    for c in ['A', 'B', 'C'] {
        for p1_starts in [true, false] {
            let mut game = StonehengeGame::new(1, p1_starts).unwrap();
            let mover = game.current_state().current_player();

            game.play(Label(c)).unwrap();

            assert_eq!(game.current_state().score(mover), 3);
            assert!(game.is_over(game.current_state()));
            assert_eq!(game.winner(game.current_state()), Some(mover));
            assert!(game.current_state().possible_moves().is_empty());
        }
    }
}

#[test]
fn test_capture_sequence() {
    let mut game = StonehengeGame::new(2, true).unwrap();
    let expected = [(2, 0), (2, 2), (3, 2), (3, 3), (5, 3)];

    for (c, (p1, p2)) in "AGDFB".chars().zip(expected) {
        game.play(Label(c)).unwrap();
        let state = game.current_state();
        assert_eq!((state.score(Player::One), state.score(Player::Two)), (p1, p2), "after {c}");
        assert_consistent(state);
    }

    assert!(game.is_winner(Player::One));
}

#[test]
fn test_captured_line_never_changes_hands() {
    let mut game = StonehengeGame::new(2, true).unwrap();
    // p1 takes A: row AB and left diagonal AC are p1's.
    game.play(Label('A')).unwrap();
    game.play(Label('B')).unwrap();
    game.play(Label('E')).unwrap();
    game.play(Label('C')).unwrap();

    let board = game.current_state().board();
    let layout = board.layout();
    let row_ab = layout.regions_of(RegionKind::Row).next().unwrap().0;
    assert_eq!(board.capture(row_ab), Some(Player::One));
    assert_eq!(board.owned_in(row_ab, Player::Two), 1);
}

#[test]
fn test_invalid_moves_leave_state_alone() {
    let mut game = StonehengeGame::new(2, true).unwrap();
    game.play(Label('D')).unwrap();
    let before = game.current_state().clone();

    for mv in ["D", "Z", "?"] {
        let label = game.str_to_move(mv).unwrap();
        assert!(matches!(game.play(label), Err(GameError::InvalidMove { .. })));
    }
    assert!(game.str_to_move("").is_err());

    assert_eq!(game.current_state().possible_moves(), before.possible_moves());
    assert_eq!(game.current_state().current_player(), Player::Two);
}

// =============================================================================
// Random Playouts
// =============================================================================

proptest! {
    /// Random games keep every capture invariant at every step.
    #[test]
    fn random_playouts_stay_consistent(
        side_length in 1usize..=5,
        p1_starts in any::<bool>(),
        picks in proptest::collection::vec(any::<usize>(), 30),
    ) {
        let game = StonehengeGame::new(side_length, p1_starts).unwrap();
        let mut state = game.current_state().clone();

        for pick in picks {
            let moves = state.possible_moves();
            if moves.is_empty() {
                prop_assert!(game.is_over(&state));
                break;
            }
            let label = moves[pick % moves.len()];
            let mover = state.current_player();
            let previous = state.clone();

            state = state.make_move(&label).unwrap();
            assert_consistent(&state);

            // Source state is untouched.
            prop_assert_eq!(previous.possible_moves(), moves.clone());
            prop_assert_eq!(previous.current_player(), mover);
            prop_assert_eq!(state.current_player(), mover.opponent());

            // Captures are permanent.
            for (id, _) in previous.board().layout().regions() {
                if let Some(owner) = previous.board().capture(id) {
                    prop_assert_eq!(state.board().capture(id), Some(owner));
                }
            }
            prop_assert_eq!(state.board().owner_of(label), Some(mover));

            if game.is_over(&state) {
                prop_assert!(state.has_winning_score(mover));
                prop_assert_eq!(game.winner(&state), Some(mover));
                prop_assert!(state.possible_moves().is_empty());
            } else {
                let mut expected = moves.clone();
                expected.retain(|&m| m != label);
                prop_assert_eq!(state.possible_moves(), expected);
                prop_assert_eq!(game.winner(&state), None);
            }
        }
    }

    /// Any text that is not a single letter is rejected by the parser.
    #[test]
    fn long_move_text_is_unparsable(text in "[A-Z]{2,5}") {
        let game = StonehengeGame::new(2, true).unwrap();
        prop_assert!(matches!(game.str_to_move(&text), Err(GameError::UnparsableMove(_))));
    }
}
