// src/board.rs
use crate::errors::MoveError;
use crate::piece::{Color, Piece, PieceKind};
use crate::square::{Square, BOARD_SIZE};
use log::{debug, info, warn};
use std::fmt;

const SIZE: usize = BOARD_SIZE as usize;

/// Back rank order from column A to column H.
const BACK_RANK: [PieceKind; SIZE] = [
    PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen,
    PieceKind::King, PieceKind::Bishop, PieceKind::Knight, PieceKind::Rook,
];
const RED_HOME_ROW: usize = 0;
const BLUE_HOME_ROW: usize = SIZE - 1;

/// Everything needed to take back one applied move exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
    prior_game_over: bool,
}

/// The 8x8 grid of optional occupants plus the stored game-over flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; SIZE]; SIZE],
    game_over: bool,
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Board { squares: [[None; SIZE]; SIZE], game_over: false }
    }

    /// The standard starting layout: RED on rows 0-1, BLUE on rows 6-7.
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.squares[RED_HOME_ROW][col] = Some(Piece::new(*kind, Color::Red));
            board.squares[BLUE_HOME_ROW][col] = Some(Piece::new(*kind, Color::Blue));
            board.squares[RED_HOME_ROW + 1][col] = Some(Piece::new(PieceKind::Pawn, Color::Red));
            board.squares[BLUE_HOME_ROW - 1][col] = Some(Piece::new(PieceKind::Pawn, Color::Blue));
        }
        board
    }

    /// The occupant of `square`, or `None` if it is empty or off the board.
    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        square.index().and_then(|(r, c)| self.squares[r][c])
    }

    /// Puts `piece` (or nothing) on `square` and returns the previous occupant.
    /// Off-board squares are left alone.
    pub fn place_piece(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let (r, c) = square.index()?;
        std::mem::replace(&mut self.squares[r][c], piece)
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.place_piece(square, None)
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get_piece(sq).map(|p| (sq, p)))
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(sq, _)| sq)
    }

    /// True when every square strictly between `from` and `to` is on the board and empty.
    ///
    /// Only straight and diagonal lines have a path; any other displacement,
    /// including no displacement at all, counts as blocked.
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let row_diff = to.row - from.row;
        let col_diff = to.col - from.col;
        let straight = (row_diff == 0) != (col_diff == 0);
        let diagonal = row_diff != 0 && row_diff.abs() == col_diff.abs();
        if !straight && !diagonal {
            return false;
        }
        let (step_row, step_col) = (row_diff.signum(), col_diff.signum());
        let steps = row_diff.abs().max(col_diff.abs());
        (1..steps).all(|i| {
            let sq = from.offset(i * step_row, i * step_col);
            sq.is_on_board() && self.get_piece(sq).is_none()
        })
    }

    /// Validates and applies `from -> to`, returning what is needed to undo it.
    ///
    /// Fails, leaving the board untouched, if either square is off the board,
    /// `from` is empty, the piece's movement rule rejects the move, or `to`
    /// holds a piece of the mover's color. A piece on `to` of the other color
    /// is captured.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        let (fr, fc) = from.index().ok_or(MoveError::OutOfBounds(from))?;
        let (tr, tc) = to.index().ok_or(MoveError::OutOfBounds(to))?;
        let moved = self.squares[fr][fc].ok_or(MoveError::EmptySquare(from))?;
        if !moved.is_valid_move(self, from, to) {
            return Err(MoveError::IllegalMovePattern { piece: moved, from, to });
        }
        let captured = self.squares[tr][tc];
        if matches!(captured, Some(target) if target.color == moved.color) {
            return Err(MoveError::SameColorCapture { from, to });
        }

        let record = MoveRecord { from, to, moved, captured, prior_game_over: self.game_over };
        self.squares[fr][fc] = None;
        self.squares[tr][tc] = Some(moved);
        debug!("{} {} {} -> {}", moved.color, moved.symbol(), from, to);

        if let Some(victim) = captured {
            if victim.kind == PieceKind::King {
                info!("{} king captured at {}. Player {} has lost the game.", victim.color, to, victim.color);
            } else {
                debug!("{} captured {} {} at {}", moved.color, victim.color, victim.symbol(), to);
            }
        }
        // Raised whenever a king lands on `to`; is_game_over recomputes it from the board.
        if moved.kind == PieceKind::King {
            self.game_over = true;
        }
        Ok(record)
    }

    /// Applies `from -> to` if legal. See `try_move` for the rules.
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        match self.try_move(from, to) {
            Ok(_) => true,
            Err(e @ MoveError::SameColorCapture { .. }) => {
                warn!("Invalid move. {}", e);
                false
            }
            Err(e) => {
                debug!("Rejected move {} -> {}: {}", from, to, e);
                false
            }
        }
    }

    /// Takes back a move produced by `try_move`, restoring any captured piece.
    /// Must be applied to the most recent move still on the board.
    pub fn undo_move(&mut self, record: &MoveRecord) {
        self.place_piece(record.from, Some(record.moved));
        self.place_piece(record.to, record.captured);
        self.game_over = record.prior_game_over;
        debug!("undo {} {} {} -> {}", record.moved.color, record.moved.symbol(), record.from, record.to);
    }

    /// True iff no king of `color` remains on the board.
    pub fn is_player_king_captured(&self, color: Color) -> bool {
        self.find_king(color).is_none()
    }

    /// Recomputes the game-over flag from the board and returns it.
    pub fn is_game_over(&mut self) -> bool {
        self.game_over =
            self.is_player_king_captured(Color::Red) || self.is_player_king_captured(Color::Blue);
        self.game_over
    }

    /// The stored flag as last written by a move or by `is_game_over`.
    pub fn game_over_flag(&self) -> bool {
        self.game_over
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    A  B  C  D  E  F  G  H")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} |", row + 1)?;
            for col in 0..BOARD_SIZE {
                match self.get_piece(Square::new(row, col)) {
                    Some(piece) => {
                        let ansi = match piece.color { Color::Red => "\x1b[1;31m", Color::Blue => "\x1b[1;34m" };
                        write!(f, "{}{:>2}\x1b[0m|", ansi, piece.symbol())?;
                    }
                    None => write!(f, "{:>2}|", '.')?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
