//! Modal prompts shown over the board, and the messages they carry.

use tictactoe::{Player, TieKind};

/// A modal dialog waiting for the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// The chosen square is taken. Any key dismisses it.
    IllegalMove,
    /// The game just ended. Any key dismisses it.
    GameOver {
        /// Outcome announcement.
        message: String,
    },
    /// Yes/no: start another game?
    PlayAgain,
    /// Yes/no: leave the program?
    ConfirmQuit,
}

impl Prompt {
    /// Window title.
    pub fn title(&self) -> &'static str {
        match self {
            Prompt::IllegalMove => "Illegal Move",
            Prompt::GameOver { .. } => "Game Over",
            Prompt::PlayAgain => "Play Again?",
            Prompt::ConfirmQuit => "Quit Game",
        }
    }

    /// Main text.
    pub fn body(&self) -> &str {
        match self {
            Prompt::IllegalMove => "That space is already occupied! Please choose another.",
            Prompt::GameOver { message } => message,
            Prompt::PlayAgain => "Would you like to play another game?",
            Prompt::ConfirmQuit => "Are you sure you want to quit?",
        }
    }

    /// Returns true for yes/no questions.
    pub fn is_question(&self) -> bool {
        matches!(self, Prompt::PlayAgain | Prompt::ConfirmQuit)
    }

    /// Key hint shown under the body.
    pub fn hint(&self) -> &'static str {
        if self.is_question() {
            "[Y]es / [N]o"
        } else {
            "Press any key to continue"
        }
    }
}

/// Status line while a game is running.
pub fn turn_message(player: Player) -> String {
    format!("Player {}'s turn", player)
}

/// Status line and announcement for a win.
pub fn win_message(player: Player) -> String {
    format!("Player {} wins!", player)
}

/// Status line after a tie.
pub const TIE_STATUS: &str = "It's a tie!";

/// Announcement for a tie, naming how it came about.
pub fn tie_message(kind: TieKind) -> String {
    format!("The game is a tie! ({})", kind)
}
