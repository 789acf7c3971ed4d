// src/piece.rs
use crate::board::Board;
use crate::square::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Row each color's pawns start on; the only row a two-step advance is allowed from.
pub const RED_PAWN_ROW: i32 = 1;
pub const BLUE_PAWN_ROW: i32 = 6;

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color { Red, Blue }

impl Color {
    pub fn opponent(&self) -> Color {
        match self { Color::Red => Color::Blue, Color::Blue => Color::Red }
    }

    /// Row direction this color's pawns advance in.
    fn pawn_direction(&self) -> i32 {
        match self { Color::Red => 1, Color::Blue => -1 }
    }

    fn pawn_start_row(&self) -> i32 {
        match self { Color::Red => RED_PAWN_ROW, Color::Blue => BLUE_PAWN_ROW }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "RED"),
            Color::Blue => write!(f, "BLUE"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind { Pawn, Rook, Knight, Bishop, Queen, King }

impl PieceKind {
    pub fn symbol(&self) -> char {
        match self {
            PieceKind::Pawn => 'P', PieceKind::Rook => 'R', PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B', PieceKind::Queen => 'Q', PieceKind::King => 'K',
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self { Piece { kind, color } }

    pub fn symbol(&self) -> char { self.kind.symbol() }

    /// Whether this piece may move `from -> to` given the current occupancy of `board`.
    ///
    /// Only geometry and, for sliders, path clearance are checked. The
    /// destination's occupant is not inspected here; same-color captures are
    /// rejected by `Board::try_move`. Both squares are expected to be on the board.
    pub fn is_valid_move(&self, board: &Board, from: Square, to: Square) -> bool {
        let row_diff = to.row - from.row;
        let col_diff = to.col - from.col;
        match self.kind {
            PieceKind::Pawn => self.is_valid_pawn_move(from, row_diff, col_diff),
            PieceKind::Rook => {
                (row_diff == 0 || col_diff == 0) && board.is_path_clear(from, to)
            }
            PieceKind::Knight => {
                let (r, c) = (row_diff.abs(), col_diff.abs());
                (r == 2 && c == 1) || (r == 1 && c == 2)
            }
            PieceKind::Bishop => {
                row_diff.abs() == col_diff.abs() && board.is_path_clear(from, to)
            }
            PieceKind::Queen => {
                (row_diff == 0 || col_diff == 0 || row_diff.abs() == col_diff.abs())
                    && board.is_path_clear(from, to)
            }
            // Includes the zero move; try_move rejects it as a same-color capture.
            PieceKind::King => row_diff.abs() <= 1 && col_diff.abs() <= 1,
        }
    }

    // Diagonal steps are accepted whether or not the target holds an enemy piece,
    // and straight steps may land on an occupied square.
    fn is_valid_pawn_move(&self, from: Square, row_diff: i32, col_diff: i32) -> bool {
        let dir = self.color.pawn_direction();
        let col_diff = col_diff.abs();
        if row_diff == dir && col_diff == 0 {
            return true;
        }
        if from.row == self.color.pawn_start_row() && row_diff == 2 * dir && col_diff == 0 {
            return true;
        }
        row_diff == dir && col_diff == 1
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
