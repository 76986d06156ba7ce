//! Property tests over every reachable breakthrough position.

use std::collections::HashSet;
use strictly_breakthrough::{
    BOARD_SIZE, Board, Cell, Coord, GameInProgress, GameResult, GameState, GameStatus, Move, Side,
    WinReason, evaluate, legal_moves, rules,
};

fn reachable() -> HashSet<GameState> {
    let mut seen = HashSet::new();
    let mut stack = vec![GameState::new()];
    while let Some(state) = stack.pop() {
        if seen.insert(state) {
            for mv in evaluate(&state).moves() {
                stack.push(state.after(*mv));
            }
        }
    }
    seen
}

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).expect("on board")
}

#[test]
fn test_pawn_counts_stay_bounded() {
    for state in reachable() {
        for side in [Side::White, Side::Black] {
            assert!(state.board().pawn_count(side) <= BOARD_SIZE);
        }
    }
}

#[test]
fn test_generated_destinations_are_empty_or_opponent() {
    for state in reachable() {
        let side = state.to_move();
        for mv in legal_moves(&state) {
            assert_eq!(state.board().cell(mv.from()), side.pawn());
            let dest = state.board().cell(mv.to());
            if mv.is_diagonal() {
                assert_eq!(dest, side.opponent().pawn(), "{mv} must capture");
            } else {
                assert_eq!(dest, Cell::Empty, "{mv} must push onto an empty cell");
            }
            let forward = mv.to().row() as isize - mv.from().row() as isize;
            assert_eq!(forward, side.forward());
        }
    }
}

#[test]
fn test_apply_flips_side_and_moves_one_pawn() {
    for state in reachable() {
        let side = state.to_move();
        for mv in legal_moves(&state) {
            let capture = state.board().cell(mv.to()) != Cell::Empty;
            let after = state.after(mv);
            assert_eq!(after.to_move(), side.opponent());
            assert_eq!(after.board().cell(mv.from()), Cell::Empty);
            assert_eq!(after.board().cell(mv.to()), side.pawn());
            assert_eq!(after.board().pawn_count(side), state.board().pawn_count(side));
            let lost = usize::from(capture);
            assert_eq!(
                after.board().pawn_count(side.opponent()) + lost,
                state.board().pawn_count(side.opponent())
            );
        }
    }
}

#[test]
fn test_terminal_detector_matches_rule_definitions() {
    for state in reachable() {
        let white_home = state.board().row(2).contains(&Cell::Pawn(Side::White));
        let black_home = state.board().row(0).contains(&Cell::Pawn(Side::Black));
        let no_moves = legal_moves(&state).is_empty();

        let expected = if white_home {
            Some(Side::White)
        } else if black_home {
            Some(Side::Black)
        } else if no_moves {
            Some(state.to_move().opponent())
        } else {
            None
        };
        assert_eq!(evaluate(&state).winner(), expected);
        // Reaching the far row is never simultaneous for both sides.
        assert!(!(white_home && black_home));
    }
}

#[test]
fn test_white_on_far_row_wins_regardless_of_moves() {
    // White to move would be blocked here, yet the far-row rule comes first.
    let board: Board = "OXO\n.O.\n.X.".parse().expect("valid diagram");
    let state = GameState::from_parts(board, Side::White);
    match evaluate(&state) {
        GameStatus::Won(win) => {
            assert_eq!(*win.winner(), Side::White);
            assert_eq!(*win.reason(), WinReason::Breakthrough);
        }
        GameStatus::InProgress(_) => panic!("White on row 2 must be terminal"),
    }
}

#[test]
fn test_fully_blocked_side_loses() {
    // The lone white pawn faces a pawn head-on with nothing to capture.
    let board: Board = "..O\nO..\nX..".parse().expect("valid diagram");
    let state = GameState::from_parts(board, Side::White);
    assert!(rules::is_blocked(&state));
    match evaluate(&state) {
        GameStatus::Won(win) => {
            assert_eq!(*win.winner(), Side::Black);
            assert_eq!(*win.reason(), WinReason::Blocked);
        }
        GameStatus::InProgress(_) => panic!("blocked side must lose"),
    }
}

#[test]
fn test_opening_push_updates_cells() {
    let mut state = GameState::new();
    state.apply_move(Move::new(at(0, 0), at(1, 0)));
    assert_eq!(state.board().cell(at(0, 0)), Cell::Empty);
    assert_eq!(state.board().cell(at(1, 0)), Cell::Pawn(Side::White));
    assert_eq!(state.to_move(), Side::Black);
}

#[test]
fn test_sample_lines_replay() {
    let lines = [
        vec!["0,0->1,0", "2,1->1,0"],
        vec!["0,1->1,1", "2,0->1,1"],
        vec!["0,2->1,2", "2,0->1,0", "1,2->2,1"],
    ];
    for line in lines {
        let moves: Vec<Move> = line.iter().map(|s| s.parse().expect("valid move")).collect();
        let result = GameInProgress::replay(&moves).expect("legal line");
        assert_eq!(result.history().len(), moves.len());
        if let GameResult::InProgress(game) = result {
            assert!(!game.legal_moves().is_empty());
        }
    }
}
