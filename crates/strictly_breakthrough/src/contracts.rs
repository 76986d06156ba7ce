//! Contract-based validation for breakthrough.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use crate::action::{Move, MoveError};
use crate::game::GameInProgress;
use crate::invariants::{BreakthroughInvariants, InvariantSet};
use crate::types::Cell;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the move is one the side to move may legally play.
pub struct LegalMove;

impl LegalMove {
    /// Validates the move against the cached legal-move set.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.legal_moves().contains(mv) {
            Ok(())
        } else {
            Err(MoveError::Illegal(*mv, game.to_move()))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Move is in the legal-move set
///
/// Postconditions:
/// - Exactly one ply was added
/// - Source is empty, destination holds the mover's pawn
/// - The turn passed to the other side
/// - All [`BreakthroughInvariants`] hold
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(postcondition_failed(
                "exactly one ply must be recorded".to_string(),
            ));
        }
        if let Some(ply) = after.history().last() {
            let board = after.board();
            if board.cell(ply.mv.from()) != Cell::Empty || board.cell(ply.mv.to()) != ply.side.pawn() {
                return Err(postcondition_failed(format!(
                    "{} not reflected on the board",
                    ply.mv
                )));
            }
        }
        if after.to_move() != before.to_move().opponent() {
            return Err(postcondition_failed(
                "side to move did not flip".to_string(),
            ));
        }

        check_invariants(after)
    }
}

fn postcondition_failed(message: String) -> MoveError {
    warn!(%message, "Postcondition failed");
    MoveError::InvariantViolation(format!("Postcondition failed: {}", message))
}

/// Checks all [`BreakthroughInvariants`], logging every violation.
pub(crate) fn check_invariants(game: &GameInProgress) -> Result<(), MoveError> {
    BreakthroughInvariants::check_all(game).map_err(|violations| {
        for violation in &violations {
            warn!(invariant = %violation.description, "Invariant violated");
        }
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        MoveError::InvariantViolation(descriptions)
    })
}
