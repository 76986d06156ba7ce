//! First-class action types for breakthrough.
//!
//! Moves are domain events, not side effects. They can be generated,
//! validated, logged and replayed independently of the board they act on.

use crate::types::{Coord, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A move: a pawn travelling from one cell to another.
///
/// Whether it is a push or a capture depends on the board it is played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    from: Coord,
    to: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// Returns the source cell.
    pub fn from(&self) -> Coord {
        self.from
    }

    /// Returns the destination cell.
    pub fn to(&self) -> Coord {
        self.to
    }

    /// True when the pawn changes column, which only captures do.
    pub fn is_diagonal(&self) -> bool {
        self.from.col() != self.to.col()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses `"r,c->r,c"` or `"r,c r,c"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = match s.split_once("->") {
            Some(parts) => parts,
            None => {
                let mut parts = s.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(from), Some(to), None) => (from, to),
                    _ => return Err(ParseMoveError::Malformed(s.trim().to_string())),
                }
            }
        };
        Ok(Move::new(from.parse()?, to.parse()?))
    }
}

/// A move as recorded in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ply {
    /// Side that made the move.
    pub side: Side,
    /// The move played.
    pub mv: Move,
    /// Whether an opposing pawn was removed.
    pub capture: bool,
}

impl fmt::Display for Ply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.capture { "x" } else { "" };
        write!(f, "{}: {}{}", self.side, self.mv, kind)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already has a winner.
    #[display("Game is already over ({} won)", _0)]
    GameOver(Side),

    /// The move is not in the legal-move set of the side to move.
    #[display("Move {} is not legal for {}", _0, _1)]
    Illegal(Move, Side),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error parsing a coordinate or move from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseMoveError {
    /// Text did not look like `r,c` or `r,c->r,c`.
    #[display("Cannot parse {:?} (expected e.g. \"0,1->1,1\")", _0)]
    Malformed(String),

    /// Coordinate outside the 3x3 board.
    #[display("Coordinate ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for ParseMoveError {}

/// Error parsing a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// Diagram did not have exactly three non-empty lines.
    #[display("Expected 3 rows, found {}", _0)]
    RowCount(usize),

    /// A row did not have exactly three cells.
    #[display("Row {row} has {width} cells, expected 3")]
    RowWidth {
        /// Board row index of the offending line.
        row: usize,
        /// Number of cells found.
        width: usize,
    },

    /// Unknown cell glyph.
    #[display("Unknown cell glyph {:?}", _0)]
    Glyph(char),
}

impl std::error::Error for ParseBoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).expect("on board")
    }

    #[test]
    fn test_display_matches_announcement_format() {
        let mv = Move::new(at(2, 1), at(1, 0));
        assert_eq!(mv.to_string(), "[2][1] -> [1][0]");
    }

    #[test]
    fn test_parse_arrow_and_space_forms() {
        let expected = Move::new(at(0, 1), at(1, 1));
        assert_eq!("0,1->1,1".parse::<Move>(), Ok(expected));
        assert_eq!(" 0,1 -> 1,1 ".parse::<Move>(), Ok(expected));
        assert_eq!("0,1 1,1".parse::<Move>(), Ok(expected));
    }

    #[test]
    fn test_parse_rejects_off_board() {
        assert_eq!(
            "0,1->3,1".parse::<Move>(),
            Err(ParseMoveError::OutOfRange { row: 3, col: 1 })
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "forward".parse::<Move>(),
            Err(ParseMoveError::Malformed(_))
        ));
        assert!(matches!(
            "0,0 1,0 2,0".parse::<Move>(),
            Err(ParseMoveError::Malformed(_))
        ));
    }

    #[test]
    fn test_move_error_messages() {
        let mv = Move::new(at(0, 0), at(2, 0));
        assert_eq!(
            MoveError::Illegal(mv, Side::White).to_string(),
            "Move [0][0] -> [2][0] is not legal for white"
        );
        assert!(MoveError::GameOver(Side::Black).to_string().contains("over"));
    }
}
