// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game rules and validation logic

use crate::{board::Board, GameError, Player, Point};
use std::collections::{HashSet, VecDeque};

/// The outcome of a legal placement, not yet committed to a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The board after the stone is placed and captures are removed
    pub board: Board,
    /// Opponent stones removed by the placement
    pub captured: Vec<Point>,
}

/// Validates placements against a board and its history
pub struct RuleValidator<'a> {
    /// The committed board
    board: &'a Board,
    /// Every committed board, the initial empty board first
    history: &'a [Board],
}

impl<'a> RuleValidator<'a> {
    /// Create a new rules validator
    pub fn new(board: &'a Board, history: &'a [Board]) -> Self {
        Self { board, history }
    }

    /// Check a placement by `mover` at `point`.
    ///
    /// Works on a scratch copy of the board, so a rejected move leaves
    /// nothing behind. On success the returned [`Placement`] holds the board
    /// to commit.
    pub fn check_move(&self, point: Point, mover: Player) -> Result<Placement, GameError> {
        if !point.is_on_board(self.board.size()) {
            return Err(GameError::InvalidCoordinate(point));
        }

        if self.board.get(point).is_stone() {
            return Err(GameError::OccupiedPosition(point));
        }

        let mut next = self.board.clone();
        next.set(point, mover);

        let captured = points_without_liberties(&next, mover.opponent());
        for &stone in &captured {
            next.set(stone, Player::None);
        }

        if !points_without_liberties(&next, mover).is_empty() {
            return Err(GameError::SelfCapture(point));
        }

        if self.repeats_position(&next, mover) {
            return Err(GameError::KoViolation(point));
        }

        Ok(Placement { board: next, captured })
    }

    /// Positional repetition restricted to same-parity history.
    ///
    /// Only boards at history indices whose parity belongs to the mover's
    /// opponent are compared: even indices when the opponent is Black, odd
    /// otherwise. This is narrower than full positional superko and must
    /// stay that way, since widening it changes which moves are legal.
    fn repeats_position(&self, candidate: &Board, mover: Player) -> bool {
        let parity = if mover.opponent() == Player::Black { 0 } else { 1 };

        self.history
            .iter()
            .skip(parity)
            .step_by(2)
            .any(|earlier| earlier == candidate)
    }
}

/// Multi-source flood seeded at every `from` point, expanding only into
/// `through` points over orthogonal adjacency.
///
/// Returns the `through` points that were touched. With `through` empty and
/// `from` a color this is the set of empty points that reach that color;
/// with `through` a color and `from` empty it is the set of stones that have
/// a liberty somewhere in their group.
pub fn reach(board: &Board, through: Player, from: Player) -> HashSet<Point> {
    let mut reached = HashSet::new();
    let mut queue: VecDeque<Point> = board.points_with(from).into();

    while let Some(current) = queue.pop_front() {
        for neighbor in board.neighbors(current) {
            if board.get(neighbor) == through && reached.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    reached
}

/// Points of `color` whose group touches no empty point
pub fn points_without_liberties(board: &Board, color: Player) -> Vec<Point> {
    let with_liberties = reach(board, color, Player::None);

    board
        .points_with(color)
        .into_iter()
        .filter(|p| !with_liberties.contains(p))
        .collect()
}

/// Find all stones in a group connected to the stone at `point`
pub fn find_group(board: &Board, point: Point) -> Vec<Point> {
    let target = board.get(point);
    if !target.is_stone() {
        return Vec::new();
    }

    let mut group = Vec::new();
    let mut visited = HashSet::new();
    let mut stack = vec![point];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        group.push(current);

        for neighbor in board.neighbors(current) {
            if board.get(neighbor) == target && !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    group
}

/// Calculate the number of distinct liberties of a group of stones
pub fn liberties(board: &Board, group: &[Point]) -> usize {
    let mut liberty_set = HashSet::new();

    for &stone in group {
        for neighbor in board.neighbors(stone) {
            if board.get(neighbor) == Player::None {
                liberty_set.insert(neighbor);
            }
        }
    }

    liberty_set.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len());
        for (x, row) in rows.iter().enumerate() {
            for (y, c) in row.chars().enumerate() {
                let value = match c {
                    'X' => Player::Black,
                    'O' => Player::White,
                    _ => Player::None,
                };
                board.set(Point::new(x, y), value);
            }
        }
        board
    }

    #[test]
    fn group_liberties_are_shared() {
        let board = board_from(&["XX.", "O..", "..."]);
        let group = find_group(&board, Point::new(0, 0));
        assert_eq!(group.len(), 2);
        assert_eq!(liberties(&board, &group), 2);
    }

    #[test]
    fn surrounded_group_has_no_liberties() {
        let board = board_from(&["OX.", "X..", "..."]);
        assert_eq!(points_without_liberties(&board, Player::White), vec![Point::new(0, 0)]);
        assert!(points_without_liberties(&board, Player::Black).is_empty());
    }

    #[test]
    fn reach_stops_at_other_colors() {
        let board = board_from(&["X.O", "X.O", "X.O"]);
        let black = reach(&board, Player::None, Player::Black);
        let white = reach(&board, Player::None, Player::White);
        assert_eq!(black.len(), 3);
        assert_eq!(black, white);
    }

    #[test]
    fn rejected_move_leaves_board_untouched() {
        let board = board_from(&[".O.", "O..", "..."]);
        let history = vec![Board::new(3)];
        let validator = RuleValidator::new(&board, &history);

        assert_eq!(
            validator.check_move(Point::new(0, 0), Player::Black),
            Err(GameError::SelfCapture(Point::new(0, 0)))
        );
        assert_eq!(board.get(Point::new(0, 0)), Player::None);
    }
}
