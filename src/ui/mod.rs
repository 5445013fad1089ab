use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::board::{ChessBoard, RoundAction, Square};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("expected two whitespace-separated integers, got {0:?}")]
    Malformed(String),
}

/// What a prompt answer means. Anything that does not parse as a square is
/// a request to undo the previous action; q/quit ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptReply {
    Square(Square),
    Undo,
    Quit,
}

fn parse_square(text: &str) -> Result<Square, InputError> {
    let mut parts = text.split_whitespace();
    let row = parts
        .next()
        .and_then(|token| token.parse::<i8>().ok())
        .ok_or_else(|| InputError::Malformed(text.to_string()))?;
    let col = parts
        .next()
        .and_then(|token| token.parse::<i8>().ok())
        .ok_or_else(|| InputError::Malformed(text.to_string()))?;
    if parts.next().is_some() {
        return Err(InputError::Malformed(text.to_string()));
    }
    Ok(Square::new(row, col))
}

fn parse_reply(line: &str) -> PromptReply {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return PromptReply::Quit;
    }
    match parse_square(trimmed) {
        Ok(square) => PromptReply::Square(square),
        Err(err) => {
            debug!("treating input as undo request: {}", err);
            PromptReply::Undo
        }
    }
}

fn prompt(text: &str) -> Option<String> {
    print!("{}", text);
    io::stdout().flush().ok();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None, // EOF ends the session
        Ok(_) => Some(line),
    }
}

fn report_undo(board: &mut ChessBoard) {
    if board.attempt_round(RoundAction::Undo) {
        println!("Last move undone.");
    } else {
        println!("Nothing to undo.");
    }
}

/// Runs the interactive round loop until EOF or an explicit quit. Each round
/// asks for a piece square and a target square; non-numeric input at either
/// prompt undoes the previous action instead.
pub fn run(mut board: ChessBoard) {
    loop {
        board.display();
        let player = if board.is_player_one_turn() {
            "Player One"
        } else {
            "Player Two"
        };

        let line = match prompt(&format!(
            "{}: enter the row and column of the piece to move (anything else to undo): ",
            player
        )) {
            Some(line) => line,
            None => break,
        };
        let from = match parse_reply(&line) {
            PromptReply::Quit => break,
            PromptReply::Undo => {
                report_undo(&mut board);
                continue;
            }
            PromptReply::Square(square) => square,
        };

        let line = match prompt("Enter the target row and column (anything else to undo): ") {
            Some(line) => line,
            None => break,
        };
        let to = match parse_reply(&line) {
            PromptReply::Quit => break,
            PromptReply::Undo => {
                report_undo(&mut board);
                continue;
            }
            PromptReply::Square(square) => square,
        };

        if board.attempt_round(RoundAction::Move { from, to }) {
            println!(
                "Moved ({}, {}) to ({}, {}).",
                from.row, from.col, to.row, to.col
            );
        } else {
            println!("That move is not possible.");
        }
    }
}
