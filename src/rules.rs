// src/rules.rs
//! Threat, check and checkmate queries over a `Board`.
//!
//! A square is threatened when some enemy piece's movement rule accepts a move
//! onto it. That is the only notion of attack here, so pawns threaten the
//! square straight ahead of them as well as both forward diagonals.

use crate::board::Board;
use crate::piece::Color;
use crate::square::Square;
use log::debug;

impl Board {
    /// True iff a piece not of `color_to_protect` could move onto `square`.
    /// Off-board squares are never threatened.
    pub fn is_square_under_threat(&self, square: Square, color_to_protect: Color) -> bool {
        if !square.is_on_board() {
            return false;
        }
        self.pieces().any(|(from, piece)| {
            piece.color != color_to_protect && piece.is_valid_move(self, from, square)
        })
    }

    /// Whether `color`'s king is on the board and under threat.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .map_or(false, |king| self.is_square_under_threat(king, color))
    }

    /// True if any square on the board is free of threat for `color`.
    ///
    /// This is a coarse test: `_king_square` is not consulted and the king is
    /// not required to be able to reach the safe square.
    pub fn can_escape_check(&self, _king_square: Square, color: Color) -> bool {
        Square::all().any(|sq| !self.is_square_under_threat(sq, color))
    }

    /// Plays `from -> to` on a copy of the board and reports whether `color`'s
    /// king is threatened afterwards. A rejected move is evaluated on the
    /// unchanged copy. Returns false when `color` has no king after the move.
    pub fn is_move_putting_king_in_check(&self, from: Square, to: Square, color: Color) -> bool {
        let mut trial = self.clone();
        let _ = trial.try_move(from, to);
        match trial.find_king(color) {
            Some(king) => trial.is_square_under_threat(king, color),
            None => false,
        }
    }

    /// Whether `color` is checkmated: its king is under threat and no legal
    /// move of any of its pieces leaves the king's current square unthreatened.
    ///
    /// The square is fixed before the search. A king stepping aside does not
    /// count as an escape while the square it left is still attacked.
    ///
    /// Every candidate is played on this board and taken back with
    /// `undo_move`, so the board is left exactly as it was, captures included.
    /// A missing king is not checkmate.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        let king = match self.find_king(color) {
            Some(sq) => sq,
            None => return false,
        };
        if !self.is_square_under_threat(king, color) {
            return false;
        }

        let own: Vec<Square> = self
            .pieces()
            .filter(|(_, p)| p.color == color)
            .map(|(sq, _)| sq)
            .collect();
        for from in own {
            for to in Square::all() {
                let record = match self.try_move(from, to) {
                    Ok(record) => record,
                    Err(_) => continue,
                };
                // Judged on the square the king stood on before the trial.
                let escaped = !self.is_square_under_threat(king, color);
                self.undo_move(&record);
                if escaped {
                    debug!("{} escapes check with {} -> {}", color, from, to);
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::piece::{Color, Piece, PieceKind};
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).expect("valid square")
    }

    fn board_with(pieces: &[(&str, PieceKind, Color)]) -> Board {
        let mut board = Board::empty();
        for (at, kind, color) in pieces {
            board.place_piece(sq(at), Some(Piece::new(*kind, *color)));
        }
        board
    }

    #[test]
    fn threat_comes_only_from_the_other_color() {
        let board = board_with(&[("D4", PieceKind::Rook, Color::Blue)]);
        assert!(board.is_square_under_threat(sq("D1"), Color::Red));
        assert!(board.is_square_under_threat(sq("H4"), Color::Red));
        assert!(!board.is_square_under_threat(sq("D1"), Color::Blue));
        assert!(!board.is_square_under_threat(sq("E5"), Color::Red));
        assert!(!board.is_square_under_threat(Square::new(3, -1), Color::Red));
    }

    #[test]
    fn blocked_slider_does_not_threaten() {
        let board = board_with(&[
            ("A1", PieceKind::Bishop, Color::Blue),
            ("C3", PieceKind::Pawn, Color::Red),
        ]);
        assert!(board.is_square_under_threat(sq("C3"), Color::Red));
        assert!(!board.is_square_under_threat(sq("D4"), Color::Red));
    }

    #[test]
    fn knight_threatens_over_pieces() {
        let board = board_with(&[
            ("B1", PieceKind::Knight, Color::Red),
            ("B2", PieceKind::Pawn, Color::Blue),
            ("C2", PieceKind::Pawn, Color::Blue),
        ]);
        assert!(board.is_square_under_threat(sq("C3"), Color::Blue));
        assert!(board.is_square_under_threat(sq("D2"), Color::Blue));
    }

    #[test]
    fn pawn_threatens_straight_ahead_and_diagonals() {
        let board = board_with(&[("D4", PieceKind::Pawn, Color::Red)]);
        assert!(board.is_square_under_threat(sq("D5"), Color::Blue));
        assert!(board.is_square_under_threat(sq("C5"), Color::Blue));
        assert!(board.is_square_under_threat(sq("E5"), Color::Blue));
        assert!(!board.is_square_under_threat(sq("D3"), Color::Blue));
    }

    #[test]
    fn in_check_requires_a_king() {
        let board = board_with(&[("E8", PieceKind::Queen, Color::Blue)]);
        assert!(!board.is_in_check(Color::Red));
        let board = board_with(&[
            ("E1", PieceKind::King, Color::Red),
            ("E8", PieceKind::Queen, Color::Blue),
        ]);
        assert!(board.is_in_check(Color::Red));
        assert!(!board.is_in_check(Color::Blue));
    }

    #[test]
    fn escape_check_looks_for_any_safe_square() {
        let board = board_with(&[
            ("A1", PieceKind::King, Color::Red),
            ("B2", PieceKind::Queen, Color::Blue),
        ]);
        assert!(board.can_escape_check(sq("A1"), Color::Red));

        let mut covered = Board::empty();
        for square in Square::all() {
            covered.place_piece(square, Some(Piece::new(PieceKind::King, Color::Blue)));
        }
        assert!(!covered.can_escape_check(sq("A1"), Color::Red));
    }

    #[test]
    fn moving_a_pinned_piece_exposes_the_king() {
        let board = board_with(&[
            ("E1", PieceKind::King, Color::Red),
            ("E2", PieceKind::Rook, Color::Red),
            ("E8", PieceKind::Rook, Color::Blue),
        ]);
        let before = board.clone();
        assert!(board.is_move_putting_king_in_check(sq("E2"), sq("D2"), Color::Red));
        assert!(!board.is_move_putting_king_in_check(sq("E2"), sq("E5"), Color::Red));
        assert!(!board.is_move_putting_king_in_check(sq("E2"), sq("E8"), Color::Red));
        assert_eq!(board, before);
    }

    #[test]
    fn putting_in_check_without_a_king_is_false() {
        let board = board_with(&[
            ("E2", PieceKind::Rook, Color::Red),
            ("E8", PieceKind::Rook, Color::Blue),
        ]);
        assert!(!board.is_move_putting_king_in_check(sq("E2"), sq("D2"), Color::Red));
    }

    #[test]
    fn cornered_king_is_checkmated() {
        // Queen and king cover each other, so no capture frees A1.
        let mut board = board_with(&[
            ("A1", PieceKind::King, Color::Red),
            ("B2", PieceKind::Queen, Color::Blue),
            ("B1", PieceKind::King, Color::Blue),
        ]);
        let before = board.clone();
        assert!(board.is_checkmate(Color::Red));
        assert!(!board.is_checkmate(Color::Blue));
        assert_eq!(board, before);
    }

    #[test]
    fn unguarded_queen_can_be_captured() {
        let mut board = board_with(&[
            ("A1", PieceKind::King, Color::Red),
            ("B2", PieceKind::Queen, Color::Blue),
            ("H8", PieceKind::King, Color::Blue),
        ]);
        let before = board.clone();
        assert!(!board.is_checkmate(Color::Red));
        assert_eq!(board, before);
    }

    #[test]
    fn smothered_king_and_its_defences() {
        let smothered = [
            ("H1", PieceKind::King, Color::Red),
            ("G1", PieceKind::Rook, Color::Red),
            ("G2", PieceKind::Pawn, Color::Red),
            ("H2", PieceKind::Pawn, Color::Red),
            ("F2", PieceKind::Knight, Color::Blue),
            ("A8", PieceKind::King, Color::Blue),
        ];
        let mut board = board_with(&smothered);
        assert!(board.is_checkmate(Color::Red));

        // A knight on D1 can take the checking knight; the search must put it back.
        let mut board = board_with(&smothered);
        board.place_piece(sq("D1"), Some(Piece::new(PieceKind::Knight, Color::Red)));
        let before = board.clone();
        assert!(!board.is_checkmate(Color::Red));
        assert_eq!(board, before);
        assert_eq!(board.get_piece(sq("F2")), Some(Piece::new(PieceKind::Knight, Color::Blue)));

        // So can a queen sliding down the F file.
        let mut board = board_with(&smothered);
        board.place_piece(sq("F8"), Some(Piece::new(PieceKind::Queen, Color::Red)));
        assert!(!board.is_checkmate(Color::Red));
    }

    #[test]
    fn king_square_stays_fixed_during_the_search() {
        let mut board = board_with(&[
            ("A1", PieceKind::King, Color::Red),
            ("B3", PieceKind::Knight, Color::Blue),
            ("H8", PieceKind::King, Color::Blue),
        ]);
        // Every square the king could step to is safe, but A1 stays attacked.
        for step in ["A2", "B1", "B2"] {
            assert!(!board.is_square_under_threat(sq(step), Color::Red), "{}", step);
        }
        let before = board.clone();
        assert!(board.is_checkmate(Color::Red));
        assert_eq!(board, before);

        // Stepping onto the checking line shields the square itself.
        let mut board = board_with(&[
            ("E1", PieceKind::King, Color::Red),
            ("E8", PieceKind::Rook, Color::Blue),
            ("A8", PieceKind::King, Color::Blue),
        ]);
        assert!(board.is_in_check(Color::Red));
        assert!(!board.is_checkmate(Color::Red));
    }

    #[test]
    fn no_check_or_no_king_is_not_checkmate() {
        let mut board = Board::new_game();
        assert!(!board.is_checkmate(Color::Red));
        assert!(!board.is_checkmate(Color::Blue));

        let mut board = board_with(&[("B2", PieceKind::Queen, Color::Blue)]);
        assert!(!board.is_checkmate(Color::Red));
    }
}
