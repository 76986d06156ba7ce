//! Far-row detection.

use crate::types::{Board, Side};
use tracing::instrument;

/// True if any of `side`'s pawns stands on its goal row.
#[instrument(level = "trace", skip(board))]
pub fn reached_goal(board: &Board, side: Side) -> bool {
    board.row(side.goal_row()).contains(&side.pawn())
}
