//! History consistency invariant: replaying the history rebuilds the board.

use super::Invariant;
use crate::game::GameInProgress;
use crate::types::GameState;

/// Invariant: the current position is the starting position plus history.
///
/// No pawn moves without a recorded ply, and every recorded ply shows up
/// on the board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut rebuilt = GameState::new();
        for ply in game.history() {
            if !crate::movegen::is_legal(&rebuilt, ply.mv) {
                return false;
            }
            rebuilt.apply_move(ply.mv);
        }
        rebuilt == *game.state()
    }

    fn description() -> &'static str {
        "Replaying the move history reproduces the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Coord, Side};

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameInProgress::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let moves = ["0,0->1,0", "2,2->1,2", "0,1->1,1"].map(|s| s.parse().expect("valid move"));
        let game = GameInProgress::replay(&moves)
            .expect("legal")
            .in_progress()
            .expect("game continues");
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_moved_pawn_without_history_violates() {
        let mut game = GameInProgress::new();
        let board = game.state.board_mut();
        board.set(Coord::new(0, 0).expect("on board"), Cell::Empty);
        board.set(Coord::new(1, 0).expect("on board"), Cell::Pawn(Side::White));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
