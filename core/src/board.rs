// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use crate::{Player, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A square grid of points, each empty or holding a stone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Number of rows (and columns)
    size: usize,
    /// Row-major contents
    positions: Vec<Player>,
}

impl Board {
    /// Create a new empty board with the specified size
    pub fn new(size: usize) -> Self {
        Self {
            size,
            positions: vec![Player::None; size * size],
        }
    }

    /// Get the size of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the contents of a point. Points off the board read as empty.
    pub fn get(&self, point: Point) -> Player {
        if !point.is_on_board(self.size) {
            return Player::None;
        }

        self.positions[self.index(point)]
    }

    /// Set the contents of a point. Returns false if the point is off the board.
    pub fn set(&mut self, point: Point, value: Player) -> bool {
        if !point.is_on_board(self.size) {
            return false;
        }

        let idx = self.index(point);
        self.positions[idx] = value;
        true
    }

    /// Convert a point to a vector index
    fn index(&self, point: Point) -> usize {
        point.x * self.size + point.y
    }

    /// Orthogonal neighbors of a point that lie on the board
    pub fn neighbors(&self, point: Point) -> Vec<Point> {
        let mut result = Vec::with_capacity(4);
        let Point { x, y } = point;

        // Up
        if x > 0 {
            result.push(Point::new(x - 1, y));
        }

        // Down
        if x + 1 < self.size {
            result.push(Point::new(x + 1, y));
        }

        // Left
        if y > 0 {
            result.push(Point::new(x, y - 1));
        }

        // Right
        if y + 1 < self.size {
            result.push(Point::new(x, y + 1));
        }

        result
    }

    /// Every point on the board in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |y| Point::new(x, y)))
    }

    /// All points holding `value`
    pub fn points_with(&self, value: Player) -> Vec<Point> {
        self.points().filter(|p| self.get(*p) == value).collect()
    }

    /// Number of points holding `value`
    pub fn count(&self, value: Player) -> usize {
        self.positions.iter().filter(|v| **v == value).count()
    }

    /// True when no stone is on the board
    pub fn is_empty(&self) -> bool {
        self.positions.iter().all(|v| !v.is_stone())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.positions.chunks(self.size.max(1)) {
            for value in row {
                let symbol = match value {
                    Player::Black => 'X',
                    Player::White => 'O',
                    Player::None => '.',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
