//! Commands, moves and results exchanged with the presentation layer.
//!
//! The shell issues a [`Command`], the game answers with a [`MoveResult`].
//! Caller misuse is reported as a [`GameError`]; an occupied square is a
//! normal [`MoveResult::Illegal`] outcome.

use super::status::{GameStatus, TieKind};
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Request from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Place the current player's mark at zero-based `row`, `col`.
    Move {
        /// Row, `0..=2`.
        row: usize,
        /// Column, `0..=2`.
        col: usize,
    },
    /// Abandon the current game and start over.
    Reset,
}

/// Outcome of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move was played; the given player moves next.
    Continue(Player),
    /// The square was already occupied; nothing changed.
    Illegal(Position),
    /// The mover completed a line.
    Win(Player),
    /// The game is drawn.
    Tie(TieKind),
}

impl MoveResult {
    /// Returns true if this result ends the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveResult::Win(_) | MoveResult::Tie(_))
    }
}

/// Caller misuse of the game API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Row or column outside `0..=2`.
    #[display("Position ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A move was attempted after the game ended.
    #[display("Game is already over: {}", _0)]
    GameOver(GameStatus),

    /// A saved game does not replay to the state it claims.
    #[display("Saved game does not match its move history")]
    InconsistentState,
}

impl std::error::Error for GameError {}
