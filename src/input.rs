// src/input.rs
use crate::errors::CommandError;
use crate::square::Square;

#[derive(Debug, PartialEq, Eq)]
pub enum UserInput {
    Square(Square),
    Help,
    Exit,
}

/// Parses one line typed at a prompt. Input is case-insensitive.
///
/// `EXIT` and `HELP` are recognised as commands; anything else must be
/// exactly two characters naming a square ("a2", "H8").
pub fn parse_user_input(input: &str) -> Result<UserInput, CommandError> {
    let upper = input.trim().to_uppercase();
    match upper.as_str() {
        "EXIT" => return Ok(UserInput::Exit),
        "HELP" | "?" => return Ok(UserInput::Help),
        _ => {}
    }
    if upper.chars().count() != 2 {
        return Err(CommandError::InvalidFormat(upper));
    }
    Square::from_algebraic(&upper)
        .map(UserInput::Square)
        .ok_or(CommandError::InvalidSquare(upper))
}
