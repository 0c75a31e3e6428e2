// SPDX-License-Identifier: MIT OR Apache-2.0

//! Move list files.
//!
//! A record is the JSON array of moves the engine replays on resume. Older
//! records stored each move as a nullable point, `null` for a pass; both
//! layouts load. Entries that decode as neither are skipped, the same way
//! the engine skips moves it rejects during replay.

use anyhow::{Context, Result};
use minigo_core::{Move, Point};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordedMove {
    Tagged(Move),
    Nullable(Option<Point>),
}

impl From<RecordedMove> for Move {
    fn from(recorded: RecordedMove) -> Self {
        match recorded {
            RecordedMove::Tagged(mv) => mv,
            RecordedMove::Nullable(point) => Move::from(point),
        }
    }
}

/// A decoded move list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Entries that decoded as moves, in order
    pub moves: Vec<Move>,
    /// Entries that could not be decoded
    pub skipped: usize,
}

/// Decode a move list from JSON text.
///
/// Only a document that is not a JSON array is an error.
pub fn parse_moves(json: &str) -> Result<Record> {
    let entries: Vec<Value> = serde_json::from_str(json).context("Failed to decode move list")?;
    let mut record = Record { moves: Vec::with_capacity(entries.len()), skipped: 0 };

    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<RecordedMove>(entry) {
            Ok(recorded) => record.moves.push(recorded.into()),
            Err(e) => {
                tracing::debug!(index, "Skipping undecodable move: {}", e);
                record.skipped += 1;
            }
        }
    }

    Ok(record)
}

/// Load a move list from a file
pub fn load_moves(path: &Path) -> Result<Record> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read move list from {}", path.display()))?;
    parse_moves(&json)
}

/// Write a move list to a file
pub fn save_moves(path: &Path, moves: &[Move]) -> Result<()> {
    let json = serde_json::to_string_pretty(moves).context("Failed to encode move list")?;
    fs::write(path, json).with_context(|| format!("Failed to write move list to {}", path.display()))?;
    tracing::info!(moves = moves.len(), "Saved move list to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use minigo_core::MinigoGame;

    #[test]
    fn tagged_and_nullable_layouts_load() {
        let tagged = parse_moves(r#"[{"Place":{"x":2,"y":3}},"Pass"]"#).unwrap();
        let nullable = parse_moves(r#"[{"x":2,"y":3},null]"#).unwrap();

        let expected = vec![Move::Place(Point::new(2, 3)), Move::Pass];
        assert_eq!(tagged.moves, expected);
        assert_eq!(nullable.moves, expected);
        assert_eq!(tagged.skipped, 0);
    }

    #[test]
    fn bad_entries_are_skipped() {
        let record = parse_moves(r#"[{"x":0,"y":0},{"x":-1,"y":0},{"x":1},"Resign",{"x":1,"y":1}]"#).unwrap();

        assert_eq!(record.moves, vec![Move::Place(Point::new(0, 0)), Move::Place(Point::new(1, 1))]);
        assert_eq!(record.skipped, 3);

        let game = MinigoGame::from_moves(9, record.moves).unwrap();
        assert_eq!(game.turn_count(), 2);
    }

    #[test]
    fn non_array_is_an_error() {
        assert!(parse_moves("{\"moves\": 3}").is_err());
        assert!(parse_moves("[{\"x\":").is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        let moves = vec![Move::Pass, Move::Place(Point::new(0, 8))];

        save_moves(&path, &moves).unwrap();
        assert_eq!(load_moves(&path).unwrap(), Record { moves, skipped: 0 });
    }
}
