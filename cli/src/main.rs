// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minigo CLI - Command-line interface for the rules engine
//!
//! This binary provides a headless way to play a game in a terminal or to
//! replay a saved move list and inspect the result. It owns everything the
//! engine leaves to its callers: input parsing, rendering and persistence.

mod record;
mod render;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use minigo_core::{MinigoGame, Move, Player, Point};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "minigo", about = "Minigo rules engine command-line interface", version)]
struct Args {
    /// Board size
    #[clap(short, long, default_value = "9", global = true)]
    size: usize,

    /// Enable debug logging (overridden by RUST_LOG)
    #[clap(long, global = true)]
    debug: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game interactively on stdin
    Play {
        /// Resume from a saved move list
        #[clap(long)]
        resume: Option<PathBuf>,

        /// Write the move list here when the session ends
        #[clap(long)]
        save: Option<PathBuf>,
    },
    /// Replay a saved move list and print the final position
    Replay {
        /// JSON move list
        file: PathBuf,

        /// Print every position, not just the last
        #[clap(long)]
        all: bool,
    },
}

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Move(Move),
    Board,
    Score,
    History,
    Show(usize),
    Resign,
    Quit,
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let mut game = MinigoGame::try_new(args.size)?;

    match args.command {
        Command::Play { resume, save } => {
            if let Some(path) = resume {
                let record = record::load_moves(&path)?;
                let dropped = record.skipped + game.set_move_history(record.moves);
                tracing::info!(turns = game.turn_count(), dropped, "Resumed game from {}", path.display());
            }

            let stdin = io::stdin();
            let result = run_session(&mut game, stdin.lock(), io::stdout());

            if let Some(path) = save {
                record::save_moves(&path, game.move_history())?;
            }
            result
        }
        Command::Replay { file, all } => {
            let record = record::load_moves(&file)?;
            let dropped = record.skipped + game.set_move_history(record.moves);
            if dropped > 0 {
                tracing::warn!(dropped, "Replay skipped illegal moves");
            }

            if all {
                for (turn, board) in game.board_history().iter().enumerate() {
                    println!("Turn {}", turn);
                    println!("{}", render::render_board(board));
                }
            }
            print!("{}", render::render_game(&game));
            print_result(&game);
            Ok(())
        }
    }
}

/// Run the interactive loop until quit, resignation, end of input, or two passes
fn run_session<R: BufRead, W: Write>(game: &mut MinigoGame, input: R, mut out: W) -> Result<()> {
    write!(out, "{}", render::render_game(game))?;

    // A resumed record may already end in two passes
    if game.is_over() {
        return write_game_over(game, &mut out);
    }

    for line in input.lines() {
        let line = line?;
        let command = match parse_input(&line, game.board_size()) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match command {
            Input::Move(mv) => {
                let mover = game.current_player();
                match game.play(mv) {
                    Ok(captured) => {
                        tracing::debug!(?mover, ?mv, captured = captured.len(), "Move played");
                        write!(out, "{}", render::render_game(game))?;
                    }
                    Err(e) => writeln!(out, "Illegal move: {}", e)?,
                }

                if game.is_over() {
                    write_game_over(game, &mut out)?;
                    break;
                }
            }
            Input::Board => write!(out, "{}", render::render_game(game))?,
            Input::Score => writeln!(out, "Black {} - White {}", game.black_score(), game.white_score())?,
            Input::History => writeln!(out, "{}", serde_json::to_string(game.move_history())?)?,
            Input::Show(turn) => match game.board_at(turn) {
                Some(board) => write!(out, "Turn {}\n{}", turn, render::render_board(board))?,
                None => writeln!(out, "No position at turn {}; the game has {} turns", turn, game.turn_count())?,
            },
            Input::Resign => {
                let resigner = game.current_player();
                writeln!(
                    out,
                    "{} resigns. {}",
                    render::player_name(resigner),
                    outcome_text(resigner.opponent())
                )?;
                break;
            }
            Input::Quit => break,
        }
    }

    Ok(())
}

fn write_game_over<W: Write>(game: &MinigoGame, out: &mut W) -> Result<()> {
    let result = game.result();
    writeln!(
        out,
        "Game over. Black {} - White {}. {}",
        result.black,
        result.white,
        outcome_text(result.winner())
    )?;
    Ok(())
}

fn print_result(game: &MinigoGame) {
    let result = game.result();
    if game.is_over() {
        println!("Final score: Black {} - White {}. {}", result.black, result.white, outcome_text(result.winner()));
    } else {
        println!("Game in progress. Black {} - White {}", result.black, result.white);
    }
}

fn outcome_text(winner: Player) -> String {
    match winner {
        Player::None => "Tied.".to_string(),
        player => format!("{} wins.", render::player_name(player)),
    }
}

/// Parse a line of input: a move like "D4" or "3 4" (row, column), "pass",
/// "resign", "show <turn>", or one of "board", "score", "history", "quit".
fn parse_input(input: &str, board_size: usize) -> Result<Input> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "pass" => return Ok(Input::Move(Move::Pass)),
        "board" => return Ok(Input::Board),
        "score" => return Ok(Input::Score),
        "history" => return Ok(Input::History),
        "resign" => return Ok(Input::Resign),
        "quit" | "exit" => return Ok(Input::Quit),
        _ => {}
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    if let ["show", turn] = parts.as_slice() {
        let turn = turn.parse::<usize>().map_err(|_| anyhow!("Invalid turn '{}'", turn))?;
        return Ok(Input::Show(turn));
    }

    // Numeric "row column"
    if let [x, y] = parts.as_slice() {
        let x = x.parse::<usize>().map_err(|_| anyhow!("Invalid row '{}'", x))?;
        let y = y.parse::<usize>().map_err(|_| anyhow!("Invalid column '{}'", y))?;
        return Ok(Input::Move(Move::Place(Point::new(x, y))));
    }

    // Coordinate like "D4": column letter (skipping I), 1-indexed row from the top
    let mut chars = input.chars();
    let Some(col_char) = chars.next() else {
        bail!("Empty input");
    };
    let y = match col_char {
        'a'..='h' => col_char as usize - 'a' as usize,
        'j'..='z' => col_char as usize - 'a' as usize - 1,
        _ => bail!("Invalid move format. Examples: 'D4', '3 4', 'pass'."),
    };
    let row = match chars.as_str().parse::<usize>() {
        Ok(r) if r > 0 && r <= board_size => r - 1,
        _ => bail!("Invalid row. Must be between 1 and {}.", board_size),
    };

    Ok(Input::Move(Move::Place(Point::new(row, y))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_and_commands() {
        assert_eq!(parse_input("pass", 9).unwrap(), Input::Move(Move::Pass));
        assert_eq!(parse_input(" D4 ", 9).unwrap(), Input::Move(Move::Place(Point::new(3, 3))));
        assert_eq!(parse_input("j9", 9).unwrap(), Input::Move(Move::Place(Point::new(8, 8))));
        assert_eq!(parse_input("2 7", 9).unwrap(), Input::Move(Move::Place(Point::new(2, 7))));
        assert_eq!(parse_input("SCORE", 9).unwrap(), Input::Score);
        assert_eq!(parse_input("quit", 9).unwrap(), Input::Quit);
        assert_eq!(parse_input("Resign", 9).unwrap(), Input::Resign);
        assert_eq!(parse_input("show 12", 9).unwrap(), Input::Show(12));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_input("", 9).is_err());
        assert!(parse_input("d10", 9).is_err());
        assert!(parse_input("?4", 9).is_err());
        assert!(parse_input("1 x", 9).is_err());
        assert!(parse_input("show -1", 9).is_err());
    }

    #[test]
    fn session_ends_after_two_passes() {
        let mut game = MinigoGame::new(5);
        let input = "c3\nfoo\nc3\npass\npass\nb2\n";
        let mut out = Vec::new();

        run_session(&mut game, input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Illegal move: Position (2, 2) already occupied"));
        assert!(text.contains("Game over. Black 25 - White 5.5. Black wins."));
        assert_eq!(game.turn_count(), 3);
        assert_eq!(game.board().get(Point::new(1, 1)), Player::None);
    }

    #[test]
    fn resign_ends_session_without_a_move() {
        let mut game = MinigoGame::new(9);
        let input = "d4\nresign\ne5\n";
        let mut out = Vec::new();

        run_session(&mut game, input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("White resigns. Black wins."));
        assert_eq!(game.move_history(), &[Move::Place(Point::new(3, 3))]);
    }

    #[test]
    fn show_renders_earlier_positions() {
        let mut game = MinigoGame::new(5);
        let input = "a1\nb2\nshow 1\nshow 9\n";
        let mut out = Vec::new();

        run_session(&mut game, input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let shown = render::render_board(game.board_at(1).unwrap());
        assert!(text.contains(&format!("Turn 1\n{}", shown)));
        assert!(!shown.contains('○'));
        assert!(text.contains("No position at turn 9; the game has 2 turns"));
    }

    #[test]
    fn resumed_finished_game_stops_at_once() {
        let moves = vec![Move::Place(Point::new(2, 2)), Move::Pass, Move::Pass];
        let mut game = MinigoGame::from_moves(5, moves).unwrap();
        let mut out = Vec::new();

        run_session(&mut game, "b2\n".as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Game over. Black 25 - White 5.5. Black wins."));
        assert!(!text.contains("Illegal move"));
        assert_eq!(game.turn_count(), 3);
    }
}
