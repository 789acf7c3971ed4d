// src/main.rs
use env_logger::Env;
use redblue_chess::errors::CommandError;
use redblue_chess::input::{parse_user_input, UserInput};
use redblue_chess::{Game, GameResult, Square, DEFAULT_STATS_FILENAME};
use std::error::Error;
use std::io::{self, Write};

/// What the player answered at a prompt.
enum Answer {
    Square(Square),
    Retry,
    Exit,
}

/// Prints `message`, reads one line and parses it. EOF counts as `EXIT`.
fn prompt(message: &str) -> Result<Answer, CommandError> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        println!("\nEnd of input detected.");
        return Ok(Answer::Exit);
    }
    match parse_user_input(&line) {
        Ok(UserInput::Square(sq)) => Ok(Answer::Square(sq)),
        Ok(UserInput::Exit) => Ok(Answer::Exit),
        Ok(UserInput::Help) => {
            print_help();
            Ok(Answer::Retry)
        }
        Err(e) => {
            println!("{}", e);
            Ok(Answer::Retry)
        }
    }
}

fn save_stats(game: &Game, result: Option<GameResult>) {
    match game.write_report(DEFAULT_STATS_FILENAME, result) {
        Ok(moves) => println!("Game report ({} moves) saved to '{}'.", moves, DEFAULT_STATS_FILENAME),
        Err(e) => eprintln!("Warning: Failed to save stats: {}", e),
    }
}

// --- Main Game Loop ---

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    println!("==============================");
    println!("|      RED vs BLUE Chess     |");
    println!("==============================");
    print_help();

    let mut game = Game::new();

    'game_loop: loop {
        println!();
        println!("{}", game.board());
        println!("Current player: {}", game.current_player());

        if let Some(result) = game.outcome() {
            match result {
                GameResult::KingCaptured { winner } => println!("Game over. Player {} wins!", winner),
                GameResult::Checkmate { winner } => println!("Checkmate. Player {} wins!", winner),
                GameResult::Draw => println!("Game over. It's a draw."),
            }
            save_stats(&game, Some(result));
            break 'game_loop;
        }

        let from = match prompt("Enter the position of the piece (e.g., 'a2', 'EXIT' to end the game): ")? {
            Answer::Square(sq) => sq,
            Answer::Retry => continue 'game_loop,
            Answer::Exit => {
                save_stats(&game, None);
                break 'game_loop;
            }
        };
        if let Err(e) = game.select(from) {
            println!("Invalid selection. {}", e);
            continue 'game_loop;
        }

        let to = match prompt("Enter the destination to move the piece (e.g., 'a4'): ")? {
            Answer::Square(sq) => sq,
            Answer::Retry => continue 'game_loop,
            Answer::Exit => {
                save_stats(&game, None);
                break 'game_loop;
            }
        };
        if let Err(e) = game.play(from, to) {
            println!("Invalid move. {}", e);
        }
    }

    println!("Game ended. Thank you for playing!");
    Ok(())
}

/// Prints available commands.
fn print_help() {
    println!("\nAvailable Commands:");
    println!("  <square>       Column letter then row digit, e.g. a2 or H7.");
    println!("                 You are asked for the piece to move, then its destination.");
    println!("  help           Show this help message.");
    println!("  exit           Leave the game (saves stats to {}).", DEFAULT_STATS_FILENAME);
    println!("Capture the enemy king, or leave it no way out of check, to win.");
    println!();
}
