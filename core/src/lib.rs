// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minigo Core - Go Rules Engine
//!
//! This crate provides the rules of Go for a small-board game:
//! - Board representation and group/liberty queries
//! - Move legality (bounds, occupancy, suicide, positional repetition)
//! - Stone capture
//! - Area scoring with a fixed komi
//! - Move history with deterministic replay
//!
//! The engine is a plain value type with no I/O. Callers own persistence,
//! transport and rendering; they drive it with [`MinigoGame::place_stone_at`]
//! and [`MinigoGame::pass`] and read back its queries.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod game;
pub mod rules;
pub mod scoring;

pub use board::Board;
pub use game::MinigoGame;
pub use scoring::GameResult;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Compensation added to White's area score.
pub const KOMI: f64 = 5.5;

/// The value of a point on the board, and the side to move.
///
/// `None` is both "no stone" on the board and "no player" in degenerate
/// contexts such as the opponent of nobody.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Black player (moves first)
    Black,
    /// White player
    White,
    /// Empty point / no player
    #[default]
    None,
}

impl Player {
    /// Returns the opposing player. The opponent of `None` is `None`.
    pub fn opponent(&self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
            Player::None => Player::None,
        }
    }

    /// True for `Black` and `White`.
    pub fn is_stone(&self) -> bool {
        !matches!(self, Player::None)
    }
}

/// A location on the board: `x` is the row, `y` the column, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    /// Row
    pub x: usize,
    /// Column
    pub y: usize,
}

impl Point {
    /// Create a new point
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Check if the point lies on a board of the given size
    pub fn is_on_board(&self, board_size: usize) -> bool {
        self.x < board_size && self.y < board_size
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One entry of the move history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a stone for the side to move
    Place(Point),
    /// Pass the turn
    Pass,
}

impl Move {
    /// The placed point, or `None` for a pass
    pub fn point(&self) -> Option<Point> {
        match self {
            Move::Place(point) => Some(*point),
            Move::Pass => None,
        }
    }
}

// Histories stored as nullable coordinates use `None` for a pass.
impl From<Option<Point>> for Move {
    fn from(point: Option<Point>) -> Self {
        point.map_or(Move::Pass, Move::Place)
    }
}

impl From<Move> for Option<Point> {
    fn from(mv: Move) -> Self {
        mv.point()
    }
}

/// Reasons a move or a game construction is rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the board
    #[error("Invalid coordinate {0}")]
    InvalidCoordinate(Point),

    /// The position is already occupied
    #[error("Position {0} already occupied")]
    OccupiedPosition(Point),

    /// The move would leave the mover's own stones without liberties
    #[error("Move at {0} would result in self-capture")]
    SelfCapture(Point),

    /// The move would repeat an earlier position for the same side
    #[error("Move at {0} repeats an earlier position")]
    KoViolation(Point),

    /// Boards must have at least one point
    #[error("Invalid board size {0}")]
    InvalidBoardSize(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_swaps_colors() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::None.opponent(), Player::None);
        assert!(!Player::default().is_stone());
    }

    #[test]
    fn nullable_points_map_to_moves() {
        assert_eq!(Move::from(None), Move::Pass);
        assert_eq!(Move::from(Some(Point::new(0, 0))), Move::Place(Point::new(0, 0)));
        assert_eq!(Option::<Point>::from(Move::Pass), None);
    }

    #[test]
    fn point_bounds() {
        assert!(Point::new(8, 8).is_on_board(9));
        assert!(!Point::new(9, 0).is_on_board(9));
        assert_eq!(Point::new(2, 3).to_string(), "(2, 3)");
    }
}
