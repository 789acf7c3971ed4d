// src/game.rs
use crate::board::{Board, MoveRecord};
use crate::errors::{MoveError, SaveLoadError};
use crate::piece::{Color, Piece};
use crate::square::Square;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

pub const DEFAULT_STATS_FILENAME: &str = "redblue_chess_stats.json";

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    KingCaptured { winner: Color },
    Checkmate { winner: Color },
    Draw,
}

#[derive(Debug, Clone)]
struct PlayedMove {
    player: Color,
    record: MoveRecord,
    time_taken: Duration,
}

#[derive(Debug, Serialize)]
pub struct GameStats {
    pub result: Option<GameResult>,
    pub total_game_duration_secs: u64,
    pub red_moves: Vec<MoveStat>,
    pub blue_moves: Vec<MoveStat>,
}

#[derive(Debug, Serialize)]
pub struct MoveStat {
    pub move_notation: String, // e.g. "P A2-A4"
    pub captured: Option<char>,
    pub time_taken: Duration,
}

/// A game in progress: the board, whose turn it is, and what has been played.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Color,
    history: Vec<PlayedMove>,
    turn_start_time: Instant,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Standard layout, RED to move.
    pub fn new() -> Self {
        Game::from_board(Board::new_game(), Color::Red)
    }

    pub fn from_board(board: Board, to_move: Color) -> Self {
        Game { board, current_player: to_move, history: Vec::new(), turn_start_time: Instant::now() }
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn current_player(&self) -> Color { self.current_player }

    pub fn moves_played(&self) -> usize { self.history.len() }

    /// The piece on `square`, provided it belongs to the player to move.
    pub fn select(&self, square: Square) -> Result<Piece, MoveError> {
        if !square.is_on_board() {
            return Err(MoveError::OutOfBounds(square));
        }
        match self.board.get_piece(square) {
            None => Err(MoveError::EmptySquare(square)),
            Some(piece) if piece.color != self.current_player => {
                Err(MoveError::NotPlayersPiece { square, player: self.current_player })
            }
            Some(piece) => Ok(piece),
        }
    }

    /// Plays a move for the current player and passes the turn on success.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        self.select(from)?;
        let record = self.board.try_move(from, to)?;
        self.history.push(PlayedMove {
            player: self.current_player,
            record,
            time_taken: self.turn_start_time.elapsed(),
        });
        self.current_player = self.current_player.opponent();
        self.turn_start_time = Instant::now();
        Ok(record)
    }

    /// How the game has ended, if it has, judged from the player to move.
    pub fn outcome(&mut self) -> Option<GameResult> {
        let to_move = self.current_player;
        if self.board.is_game_over() {
            if self.board.is_player_king_captured(to_move) {
                return Some(GameResult::KingCaptured { winner: to_move.opponent() });
            }
            return Some(GameResult::Draw);
        }
        if self.board.is_checkmate(to_move) {
            info!("{} is checkmated", to_move);
            return Some(GameResult::Checkmate { winner: to_move.opponent() });
        }
        None
    }

    pub fn generate_stats(&self, final_result: Option<GameResult>) -> GameStats {
        let mut red_moves = Vec::new();
        let mut blue_moves = Vec::new();
        let mut total_duration = Duration::ZERO;

        for played in &self.history {
            total_duration += played.time_taken;
            let record = &played.record;
            let stat = MoveStat {
                move_notation: format!("{} {}-{}", record.moved.symbol(), record.from, record.to),
                captured: record.captured.map(|p| p.symbol()),
                time_taken: played.time_taken,
            };
            match played.player {
                Color::Red => red_moves.push(stat),
                Color::Blue => blue_moves.push(stat),
            }
        }

        GameStats {
            result: final_result,
            total_game_duration_secs: total_duration.as_secs(),
            red_moves,
            blue_moves,
        }
    }

    /// Writes the game report as pretty JSON to `path`, replacing any previous
    /// report there. Returns the number of moves recorded.
    pub fn write_report(&self, path: impl AsRef<Path>, final_result: Option<GameResult>) -> Result<usize, SaveLoadError> {
        let path = path.as_ref();
        let report_error = |e| SaveLoadError::Io(path.display().to_string(), e);

        let file = File::create(path).map_err(report_error)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.generate_stats(final_result))
            .map_err(SaveLoadError::Serialization)?;
        writer.flush().map_err(report_error)?;

        info!("Game report with {} moves written to {}", self.history.len(), path.display());
        Ok(self.history.len())
    }
}
