// src/errors.rs
use crate::piece::{Color, Piece};
use crate::square::Square;
use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum MoveError {
    OutOfBounds(Square),
    EmptySquare(Square),
    NotPlayersPiece { square: Square, player: Color },
    IllegalMovePattern { piece: Piece, from: Square, to: Square }, // Geometry or blocked path
    SameColorCapture { from: Square, to: Square },
}
impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds(sq) => write!(f, "Square ({}, {}) is off the board.", sq.row, sq.col),
            MoveError::EmptySquare(sq) => write!(f, "No piece found at {}.", sq),
            MoveError::NotPlayersPiece { square, player } => write!(f, "The piece at {} does not belong to {}.", square, player),
            MoveError::IllegalMovePattern { piece, from, to } => write!(f, "{} {} cannot move from {} to {}.", piece.color, piece.symbol(), from, to),
            MoveError::SameColorCapture { .. } => write!(f, "Cannot capture a piece of the same color."),
        }
    }
}
impl Error for MoveError {}

#[derive(Debug)]
pub enum CommandError {
    InvalidFormat(String),
    InvalidSquare(String),
    Move(MoveError),
    SaveLoadError(SaveLoadError),
    IoError(io::Error),
}
impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidFormat(input) => write!(f, "Invalid input format: '{}'. Enter a square like 'A2'.", input),
            CommandError::InvalidSquare(input) => write!(f, "Not a square on the board: '{}'.", input),
            CommandError::Move(e) => write!(f, "Invalid move. {}", e),
            CommandError::SaveLoadError(e) => write!(f, "Stats Save Error: {}", e),
            CommandError::IoError(e) => write!(f, "Input/Output error: {}", e),
        }
    }
}
impl Error for CommandError {}

impl From<MoveError> for CommandError {
    fn from(e: MoveError) -> Self { CommandError::Move(e) }
}
impl From<SaveLoadError> for CommandError {
    fn from(e: SaveLoadError) -> Self { CommandError::SaveLoadError(e) }
}
impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self { CommandError::IoError(e) }
}

#[derive(Debug)]
pub enum SaveLoadError {
    Serialization(serde_json::Error),
    Io(String, io::Error),
}
impl fmt::Display for SaveLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveLoadError::Serialization(e) => write!(f, "Serialization error: {}", e),
            SaveLoadError::Io(file, e) => write!(f, "I/O error with file '{}': {}", file, e),
        }
    }
}
impl Error for SaveLoadError {}
