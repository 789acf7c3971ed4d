//! Rules engine for a two-player RED/BLUE chess variant on an 8x8 board.
//!
//! The board owns occupancy and move mechanics, each piece kind decides
//! whether a displacement is legal, and the rules module answers threat,
//! check and checkmate queries. Capturing the enemy king ends the game.

pub mod board;
pub mod errors;
pub mod game;
pub mod input;
pub mod piece;
pub mod rules;
pub mod square;

pub use board::{Board, MoveRecord};
pub use errors::{CommandError, MoveError, SaveLoadError};
pub use game::{Game, GameResult, DEFAULT_STATS_FILENAME};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
