//! Tic-tac-toe game logic.
//!
//! A [`GameState`] owns a 3x3 [`Board`], alternates [`Player`]s and decides
//! outcomes. The presentation layer sends [`Command`]s and gets back
//! [`MoveResult`]s; misuse surfaces as [`GameError`].
//!
//! Ties are detected early: once every row, column and diagonal holds both
//! an X and an O the game is drawn, even with squares left.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, MoveResult, Player};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.apply_move(1, 1)?, MoveResult::Continue(Player::O));
//! assert!(matches!(game.apply_move(1, 1)?, MoveResult::Illegal(_)));
//! # Ok::<(), tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{Command, GameError, Move, MoveResult};
pub use game::{GameState, TIE_CHECK_FROM, WIN_CHECK_FROM};
pub use position::Position;
pub use status::{GameStatus, TieKind};
pub use types::{Board, Player, Square};
