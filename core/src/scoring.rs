// SPDX-License-Identifier: MIT OR Apache-2.0

//! Area scoring

use crate::{board::Board, rules::reach, Player};
use serde::{Deserialize, Serialize};

/// The parts of a player's area score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Stones of the player on the board
    pub stones: usize,
    /// Empty points that reach only the player's stones
    pub territory: usize,
    /// Compensation (White only)
    pub komi: f64,
}

impl ScoreBreakdown {
    /// The area score
    pub fn total(&self) -> f64 {
        (self.stones + self.territory) as f64 + self.komi
    }
}

/// Count stones and uniquely reached empty points for `player`.
///
/// An empty point is territory when a flood through empty points reaches it
/// from the player's stones and not from the opponent's. `Player::None`
/// scores nothing.
pub fn breakdown(board: &Board, player: Player, komi: f64) -> ScoreBreakdown {
    if !player.is_stone() {
        return ScoreBreakdown { stones: 0, territory: 0, komi: 0.0 };
    }

    let own = reach(board, Player::None, player);
    let other = reach(board, Player::None, player.opponent());

    ScoreBreakdown {
        stones: board.count(player),
        territory: own.difference(&other).count(),
        komi: if player == Player::White { komi } else { 0.0 },
    }
}

/// Area score of `player` on `board`
pub fn area_score(board: &Board, player: Player, komi: f64) -> f64 {
    breakdown(board, player, komi).total()
}

/// Both scores of a position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    /// Black's area score
    pub black: f64,
    /// White's area score, komi included
    pub white: f64,
}

impl GameResult {
    /// Score both players on `board`
    pub fn of(board: &Board, komi: f64) -> Self {
        Self {
            black: area_score(board, Player::Black, komi),
            white: area_score(board, Player::White, komi),
        }
    }

    /// The player with the higher score, `Player::None` on a tie
    pub fn winner(&self) -> Player {
        if self.black > self.white {
            Player::Black
        } else if self.white > self.black {
            Player::White
        } else {
            Player::None
        }
    }

    /// Absolute score difference
    pub fn margin(&self) -> f64 {
        (self.black - self.white).abs()
    }
}
