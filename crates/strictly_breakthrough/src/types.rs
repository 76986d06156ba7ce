//! Core domain types for 3x3 breakthrough.

use crate::action::{Move, ParseBoardError, ParseMoveError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// Side in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// White starts on row 0 and moves toward row 2 (moves first).
    White,
    /// Black starts on row 2 and moves toward row 0.
    Black,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a forward step for this side.
    pub fn forward(self) -> isize {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Row this side's pawns start on.
    pub fn home_row(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => BOARD_SIZE - 1,
        }
    }

    /// Row this side must reach to win (the opponent's home row).
    pub fn goal_row(self) -> usize {
        self.opponent().home_row()
    }

    /// The cell value of one of this side's pawns.
    pub fn pawn(self) -> Cell {
        Cell::Pawn(self)
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No pawn.
    Empty,
    /// Cell holding a pawn of the given side.
    Pawn(Side),
}

impl Cell {
    /// Glyph used when rendering the board.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Pawn(Side::White) => 'X',
            Cell::Pawn(Side::Black) => 'O',
        }
    }

    /// Returns the owner of the pawn on this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Pawn(side) => Some(side),
        }
    }
}

/// A coordinate on the board, `(row, col)` with both in `0..3`.
///
/// Row 0 is White's home row, row 2 is Black's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[usize; 2]", into = "[usize; 2]")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Creates a coordinate, or `None` if either component is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// Shifts the coordinate, returning `None` when the result leaves the board.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col)
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

impl TryFrom<[usize; 2]> for Coord {
    type Error = ParseMoveError;

    fn try_from([row, col]: [usize; 2]) -> Result<Self, Self::Error> {
        Coord::new(row, col).ok_or(ParseMoveError::OutOfRange { row, col })
    }
}

impl From<Coord> for [usize; 2] {
    fn from(coord: Coord) -> Self {
        [coord.row, coord.col]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}]", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = ParseMoveError;

    /// Parses `"row,col"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| ParseMoveError::Malformed(s.to_string()))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| ParseMoveError::Malformed(s.to_string()))
        };
        let (row, col) = (parse(row)?, parse(col)?);
        Coord::try_from([row, col])
    }
}

/// 3x3 breakthrough board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with no pawns.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the starting board: White fills row 0, Black fills row 2.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.cells[Side::White.home_row()] = [Cell::Pawn(Side::White); BOARD_SIZE];
        board.cells[Side::Black.home_row()] = [Cell::Pawn(Side::Black); BOARD_SIZE];
        board
    }

    /// Creates a board from explicit rows, `rows[0]` being row 0.
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells: rows }
    }

    /// Gets the cell at the given coordinate.
    pub fn cell(&self, at: Coord) -> Cell {
        self.cells[at.row][at.col]
    }

    /// Sets the cell at the given coordinate.
    pub fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.row][at.col] = cell;
    }

    /// Returns one row of cells.
    pub fn row(&self, row: usize) -> &[Cell; BOARD_SIZE] {
        &self.cells[row]
    }

    /// Coordinates of every pawn belonging to `side`, in row-major order.
    pub fn pawns(&self, side: Side) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&at| self.cell(at) == side.pawn())
    }

    /// Number of pawns `side` has left.
    pub fn pawn_count(&self, side: Side) -> usize {
        self.pawns(side).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    /// One line per row, Black's home row on top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter().rev() {
            for cell in row {
                write!(f, "[ {} ]", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a diagram of three lines, top line is row 2.
    ///
    /// `X` is a white pawn, `O` a black pawn, `.` an empty cell.
    /// Whitespace inside a line is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount(lines.len()));
        }

        let mut board = Board::empty();
        for (i, line) in lines.iter().enumerate() {
            let row = BOARD_SIZE - 1 - i;
            let glyphs: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowWidth { row, width: glyphs.len() });
            }
            for (col, glyph) in glyphs.into_iter().enumerate() {
                board.cells[row][col] = match glyph {
                    'X' | 'x' => Cell::Pawn(Side::White),
                    'O' | 'o' => Cell::Pawn(Side::Black),
                    '.' => Cell::Empty,
                    other => return Err(ParseBoardError::Glyph(other)),
                };
            }
        }
        Ok(board)
    }
}

/// A board together with the side to move.
///
/// `Copy`, so speculative play works on private copies and never leaks
/// into sibling branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Side,
}

impl GameState {
    /// Creates the starting position with White to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            to_move: Side::White,
        }
    }

    /// Creates a state from an arbitrary board and side to move.
    pub fn from_parts(board: Board, to_move: Side) -> Self {
        Self { board, to_move }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_to_move(&mut self, side: Side) {
        self.to_move = side;
    }

    /// Applies a move (unchecked - use `GameInProgress::make_move` for validation).
    ///
    /// Clears the source, puts the mover's pawn on the destination and
    /// passes the turn. The move must come from `legal_moves` for this
    /// state; debug builds assert it.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert!(
            crate::movegen::is_legal(self, mv),
            "apply_move called with illegal move {mv} for {}",
            self.to_move
        );
        self.board.set(mv.from(), Cell::Empty);
        self.board.set(mv.to(), self.to_move.pawn());
        self.to_move = self.to_move.opponent();
    }

    /// Returns a copy of this state with `mv` applied.
    pub fn after(mut self, mv: Move) -> Self {
        self.apply_move(mv);
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
