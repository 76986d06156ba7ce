//! Alternating turn invariant: White, Black, White, ...

use super::Invariant;
use crate::game::GameInProgress;
use crate::types::Side;

/// Invariant: sides alternate, starting with White.
///
/// The history shows White, Black, White, ... and the side to move is the
/// one due next.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        if history.first().is_some_and(|ply| ply.side != Side::White) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].side == pair[1].side) {
            return false;
        }

        let expected_next = if history.len().is_multiple_of(2) {
            Side::White
        } else {
            Side::Black
        };
        game.state().to_move() == expected_next
    }

    fn description() -> &'static str {
        "Sides alternate turns (white, black, white, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;

    #[test]
    fn test_new_game_holds() {
        let game = GameInProgress::new();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.state().to_move(), Side::White);
    }

    #[test]
    fn test_after_one_move_black_is_due() {
        let mv: Move = "0,2->1,2".parse().expect("valid move");
        let game = GameInProgress::new()
            .make_move(mv)
            .expect("legal")
            .in_progress()
            .expect("game continues");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.state().to_move(), Side::Black);
    }

    #[test]
    fn test_after_two_moves_white_is_due_again() {
        let moves: Vec<Move> = ["0,2->1,2", "2,0->1,0"]
            .iter()
            .map(|s| s.parse().expect("valid move"))
            .collect();
        let game = GameInProgress::replay(&moves)
            .expect("legal")
            .in_progress()
            .expect("game continues");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.state().to_move(), Side::White);
    }

    #[test]
    fn test_same_side_twice_violates() {
        let mut game = GameInProgress::new()
            .make_move("0,2->1,2".parse().expect("valid move"))
            .expect("legal")
            .in_progress()
            .expect("game continues");
        // Relabel Black's turn as White's.
        game.state.set_to_move(Side::White);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
