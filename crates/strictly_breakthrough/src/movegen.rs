//! Legal move generation.
//!
//! Pawns are scanned in row-major order. For each pawn the forward push is
//! recorded first, then the capture toward the higher column, then the
//! capture toward the lower column. Search breaks ties on this order, so
//! it must stay stable.

use crate::action::Move;
use crate::types::{Cell, GameState};
use tracing::{instrument, trace};

/// Column deltas tried for diagonal captures, in generation order.
const CAPTURE_DIRECTIONS: [isize; 2] = [1, -1];

/// Returns every legal move for the side to move, possibly none.
#[instrument(level = "trace", skip(state), fields(to_move = %state.to_move()))]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let side = state.to_move();
    let board = state.board();
    let mut moves = Vec::new();

    for from in board.pawns(side) {
        // Pawns on the far row have nowhere to go.
        let Some(ahead) = from.offset(side.forward(), 0) else {
            continue;
        };

        if board.cell(ahead) == Cell::Empty {
            moves.push(Move::new(from, ahead));
        }

        // Captures are independent of the push and of each other.
        for d_col in CAPTURE_DIRECTIONS {
            if let Some(target) = from.offset(side.forward(), d_col)
                && board.cell(target) == side.opponent().pawn()
            {
                moves.push(Move::new(from, target));
            }
        }
    }

    trace!(count = moves.len(), "Generated moves");
    moves
}

/// True when `mv` is one of the legal moves in `state`.
pub fn is_legal(state: &GameState, mv: Move) -> bool {
    legal_moves(state).contains(&mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Coord, Side};

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).expect("on board")
    }

    fn state(diagram: &str, to_move: Side) -> GameState {
        GameState::from_parts(diagram.parse::<Board>().expect("valid diagram"), to_move)
    }

    #[test]
    fn test_opening_moves_are_pushes_in_column_order() {
        let moves = legal_moves(&GameState::new());
        assert_eq!(
            moves,
            vec![
                Move::new(at(0, 0), at(1, 0)),
                Move::new(at(0, 1), at(1, 1)),
                Move::new(at(0, 2), at(1, 2)),
            ]
        );
    }

    #[test]
    fn test_black_moves_toward_row_zero() {
        let moves = legal_moves(&state("OOO\n...\nXXX", Side::Black));
        assert_eq!(moves.len(), 3);
        assert!(moves.iter().all(|mv| mv.from().row() == 2 && mv.to().row() == 1));
    }

    #[test]
    fn test_push_and_both_captures_are_independent() {
        // White pawn at (1,1) with black pawns on both forward diagonals
        // and an empty square straight ahead.
        let moves = legal_moves(&state("O.O\n.X.\n...", Side::White));
        assert_eq!(
            moves,
            vec![
                Move::new(at(1, 1), at(2, 1)),
                Move::new(at(1, 1), at(2, 2)),
                Move::new(at(1, 1), at(2, 0)),
            ]
        );
    }

    #[test]
    fn test_blocked_pawn_can_still_capture() {
        let moves = legal_moves(&state("...\nOO.\nX..", Side::White));
        // (0,0) is blocked by (1,0) but captures on (1,1).
        assert_eq!(moves, vec![Move::new(at(0, 0), at(1, 1))]);
    }

    #[test]
    fn test_never_captures_own_pawn() {
        let moves = legal_moves(&state("...\n.X.\nX.X", Side::White));
        assert!(moves.iter().all(|mv| mv.to() != at(1, 1)));
    }

    #[test]
    fn test_destinations_are_empty_or_opponent() {
        let s = state("OO.\nX.X\n.X.", Side::Black);
        let moves = legal_moves(&s);
        assert_eq!(moves.len(), 3);
        for mv in moves {
            let dest = s.board().cell(mv.to());
            if mv.is_diagonal() {
                assert_eq!(dest, Cell::Pawn(Side::White));
            } else {
                assert_eq!(dest, Cell::Empty);
            }
        }
    }

    #[test]
    fn test_pawn_on_goal_row_generates_nothing() {
        let moves = legal_moves(&state("X..\n...\n...", Side::White));
        assert!(moves.is_empty());
    }

    #[test]
    fn test_no_pawns_no_moves() {
        let moves = legal_moves(&state("...\n...\nX..", Side::Black));
        assert!(moves.is_empty());
    }
}
