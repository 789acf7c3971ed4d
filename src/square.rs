// src/square.rs
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i32 = 8;

lazy_static! {
    // Column letter then row digit, e.g. "A2" or "h7".
    static ref ALGEBRAIC_SQUARE: Regex =
        Regex::new(r"^([A-Ha-h])([1-8])$").expect("algebraic square pattern is valid");
}

/// A (row, column) coordinate. Row 0 is RED's home rank, column 0 is file 'A'.
///
/// Coordinates are signed and may point off the board; every board operation
/// checks `is_on_board` first and treats such squares as nonexistent.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    pub const fn new(row: i32, col: i32) -> Self {
        Square { row, col }
    }

    #[inline]
    pub fn is_on_board(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Board-array indices, or `None` for an off-board square.
    #[inline]
    pub(crate) fn index(&self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// Square reached by stepping `(d_row, d_col)` away. The result may be off-board.
    #[inline]
    pub fn offset(&self, d_row: i32, d_col: i32) -> Square {
        Square::new(self.row + d_row, self.col + d_col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }

    /// Parses "A1".."H8" (case-insensitive) using `row = digit - '1'`, `col = letter - 'A'`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let caps = ALGEBRAIC_SQUARE.captures(s.trim())?;
        let file = caps[1].bytes().next()?.to_ascii_uppercase();
        let rank = caps[2].bytes().next()?;
        Some(Square::new((rank - b'1') as i32, (file - b'A') as i32))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "??");
        }
        let file_char = (b'A' + self.col as u8) as char;
        let rank_char = (b'1' + self.row as u8) as char;
        write!(f, "{}{}", file_char, rank_char)
    }
}
