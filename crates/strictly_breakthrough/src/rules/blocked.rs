//! Blocked-position detection.

use crate::movegen::legal_moves;
use crate::types::GameState;
use tracing::instrument;

/// True if the side to move has no legal move.
///
/// A blocked side loses; the game has no draw.
#[instrument(level = "trace", skip(state))]
pub fn is_blocked(state: &GameState) -> bool {
    legal_moves(state).is_empty()
}
