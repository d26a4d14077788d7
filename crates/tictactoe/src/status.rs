//! Game status and tie classification.

use super::Player;
use serde::{Deserialize, Serialize};

/// Why a game ended in a tie.
///
/// Both kinds are ties; the distinction only changes the message shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum TieKind {
    /// Every square is occupied.
    #[display("Board is full")]
    BoardFull,
    /// Empty squares remain but every line holds both an X and an O.
    #[display("No more winning moves possible")]
    NoWinPossible,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a tie.
    Tied(TieKind),
}

impl GameStatus {
    /// Returns true once the game has been won or tied.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Tied(kind) => write!(f, "Tie ({})", kind),
        }
    }
}
