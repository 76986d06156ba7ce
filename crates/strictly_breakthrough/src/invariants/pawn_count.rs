//! Pawn count invariant: pawns only disappear through recorded captures.

use super::Invariant;
use crate::game::GameInProgress;
use crate::types::{BOARD_SIZE, Side};

/// Invariant: each side has its starting pawns minus those captured.
///
/// A side's pawn count never exceeds a full row, and drops by exactly one
/// for every capture the opponent has in the history.
pub struct PawnCountInvariant;

impl Invariant<GameInProgress> for PawnCountInvariant {
    fn holds(game: &GameInProgress) -> bool {
        [Side::White, Side::Black].into_iter().all(|side| {
            let lost = game
                .history()
                .iter()
                .filter(|ply| ply.side == side.opponent() && ply.capture)
                .count();
            game.state().board().pawn_count(side) + lost == BOARD_SIZE
        })
    }

    fn description() -> &'static str {
        "Each side has its starting pawns minus those captured"
    }
}
