// SPDX-License-Identifier: MIT OR Apache-2.0

//! The game of Minigo as a replayable state machine

use crate::{
    board::Board,
    rules::RuleValidator,
    scoring::{self, GameResult},
    GameError, Move, Player, Point, KOMI,
};

/// A game of Go: the committed board, whose turn it is, and the history
/// from which both can be rebuilt.
///
/// Every successful move appends to [`move_history`](Self::move_history) and
/// [`board_history`](Self::board_history), so the board history always has
/// one more entry than the move history. Illegal moves change nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinigoGame {
    /// Fixed at construction
    board_size: usize,
    /// Equal to the last entry of `board_history`
    board: Board,
    /// Side to move, Black first
    current_player: Player,
    /// Consecutive passes just played
    pass_count: u32,
    /// Committed moves
    move_history: Vec<Move>,
    /// Board after each committed move, starting with the empty board
    board_history: Vec<Board>,
}

impl MinigoGame {
    /// Create a new game on an empty `board_size` × `board_size` board.
    ///
    /// # Panics
    ///
    /// Panics if `board_size` is zero. Use [`try_new`](Self::try_new) to
    /// handle that case.
    pub fn new(board_size: usize) -> Self {
        match Self::try_new(board_size) {
            Ok(game) => game,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create a new game, rejecting an empty board
    pub fn try_new(board_size: usize) -> Result<Self, GameError> {
        if board_size == 0 {
            return Err(GameError::InvalidBoardSize(board_size));
        }

        let board = Board::new(board_size);
        Ok(Self {
            board_size,
            board: board.clone(),
            current_player: Player::Black,
            pass_count: 0,
            move_history: Vec::new(),
            board_history: vec![board],
        })
    }

    /// Create a game and replay `moves` on it, dropping illegal ones
    pub fn from_moves<I>(board_size: usize, moves: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = Move>,
    {
        let mut game = Self::try_new(board_size)?;
        game.set_move_history(moves);
        Ok(game)
    }

    /// Place a stone for the current player at row `x`, column `y`.
    ///
    /// Returns true if the move was legal and has been played.
    pub fn place_stone_at(&mut self, x: usize, y: usize) -> bool {
        self.play_stone(Point::new(x, y)).is_ok()
    }

    /// Place a stone for the current player, returning the captured stones
    pub fn play_stone(&mut self, point: Point) -> Result<Vec<Point>, GameError> {
        let mover = self.current_player;
        let placement = match RuleValidator::new(&self.board, &self.board_history).check_move(point, mover) {
            Ok(placement) => placement,
            Err(e) => {
                tracing::debug!(turn = self.turn_count(), ?mover, "Rejected move: {}", e);
                return Err(e);
            }
        };

        if !placement.captured.is_empty() {
            tracing::trace!(?mover, captured = placement.captured.len(), "Stones captured at {}", point);
        }

        self.commit(Move::Place(point), placement.board);
        self.pass_count = 0;
        Ok(placement.captured)
    }

    /// Pass the current player's turn. Always succeeds.
    ///
    /// Two consecutive passes end the game, but the engine keeps accepting
    /// moves; stopping is up to the caller.
    pub fn pass(&mut self) {
        let board = self.board.clone();
        self.commit(Move::Pass, board);
        self.pass_count += 1;
    }

    /// Play a history entry
    pub fn play(&mut self, mv: Move) -> Result<Vec<Point>, GameError> {
        match mv {
            Move::Place(point) => self.play_stone(point),
            Move::Pass => {
                self.pass();
                Ok(Vec::new())
            }
        }
    }

    fn commit(&mut self, mv: Move, board: Board) {
        tracing::trace!(turn = self.turn_count(), player = ?self.current_player, ?mv, "Move committed");
        self.board_history.push(board.clone());
        self.board = board;
        self.move_history.push(mv);
        self.current_player = self.current_player.opponent();
    }

    /// Replace the whole game with a replay of `moves` from an empty board.
    ///
    /// Moves the rules reject during the replay are skipped rather than
    /// failing the replay. Returns the number of skipped moves.
    pub fn set_move_history<I>(&mut self, moves: I) -> usize
    where
        I: IntoIterator<Item = Move>,
    {
        let board = Board::new(self.board_size);
        self.board = board.clone();
        self.board_history = vec![board];
        self.move_history.clear();
        self.current_player = Player::Black;
        self.pass_count = 0;

        let mut dropped = 0;
        for mv in moves {
            if self.play(mv).is_err() {
                dropped += 1;
            }
        }

        if dropped > 0 {
            tracing::debug!(dropped, kept = self.turn_count(), "Replay skipped illegal moves");
        }
        dropped
    }

    /// The committed moves, passes included
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// The board after each committed move, starting with the empty board
    pub fn board_history(&self) -> &[Board] {
        &self.board_history
    }

    /// The board as it was after `turn` moves (0 is the empty board)
    pub fn board_at(&self, turn: usize) -> Option<&Board> {
        self.board_history.get(turn)
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The side that is not to move
    pub fn noncurrent_player(&self) -> Player {
        self.current_player.opponent()
    }

    /// Consecutive passes just played
    pub fn pass_count(&self) -> u32 {
        self.pass_count
    }

    /// Number of committed moves
    pub fn turn_count(&self) -> usize {
        self.move_history.len()
    }

    /// Width and height of the board
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Compensation awarded to White
    pub fn komi(&self) -> f64 {
        KOMI
    }

    /// True once two consecutive passes have been played
    pub fn is_over(&self) -> bool {
        self.pass_count >= 2
    }

    /// Area score of `player` on the current board, komi included for White
    pub fn score_of(&self, player: Player) -> f64 {
        scoring::area_score(&self.board, player, KOMI)
    }

    /// Black's area score
    pub fn black_score(&self) -> f64 {
        self.score_of(Player::Black)
    }

    /// White's area score, komi included
    pub fn white_score(&self) -> f64 {
        self.score_of(Player::White)
    }

    /// Both scores of the current board
    pub fn result(&self) -> GameResult {
        GameResult::of(&self.board, KOMI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_is_empty() {
        let game = MinigoGame::new(9);
        assert_eq!(game.board_size(), 9);
        assert!(game.board().is_empty());
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.turn_count(), 0);
        assert_eq!(game.pass_count(), 0);
        assert_eq!(game.board_history().len(), 1);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(MinigoGame::try_new(0), Err(GameError::InvalidBoardSize(0)));
    }

    #[test]
    #[should_panic(expected = "Invalid board size 0")]
    fn zero_size_panics() {
        let _ = MinigoGame::new(0);
    }

    #[test]
    fn board_tracks_last_snapshot() {
        let mut game = MinigoGame::new(5);
        assert!(game.place_stone_at(1, 1));
        game.pass();
        assert!(game.place_stone_at(2, 2));

        assert_eq!(game.board_history().last(), Some(game.board()));
        assert_eq!(game.board_at(2), game.board_at(1));
        assert_eq!(game.board_at(4), None);
    }
}
