//! The game engine: board, turn and outcome bookkeeping.

use super::action::{Command, GameError, Move, MoveResult};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules;
use super::status::{GameStatus, TieKind};
use super::types::{Board, Player, Square};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// First move count at which a win is possible, and so checked.
pub const WIN_CHECK_FROM: usize = 5;

/// First move count at which a tie is checked.
pub const TIE_CHECK_FROM: usize = 7;

/// Complete state of one game session.
///
/// Owns the board exclusively. Not synchronized: all mutations must come
/// from a single thread of control.
///
/// Deserializing replays the saved history and rejects any state that the
/// moves do not reproduce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedGame")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) move_count: usize,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            move_count: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is (the winner, once won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of moves played since the last reset.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves played since the last reset, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game has been won or tied.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Empty squares.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Runs a command from the presentation layer.
    ///
    /// A reset answers `Continue(X)`.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> Result<MoveResult, GameError> {
        match command {
            Command::Move { row, col } => self.apply_move(row, col),
            Command::Reset => {
                self.reset();
                Ok(MoveResult::Continue(self.current_player))
            }
        }
    }

    /// Places the current player's mark at zero-based `row`, `col`.
    ///
    /// An occupied square yields [`MoveResult::Illegal`] and changes nothing.
    ///
    /// # Errors
    ///
    /// - [`GameError::OutOfRange`] if `row` or `col` is outside `0..=2`.
    /// - [`GameError::GameOver`] if the game has already been won or tied.
    #[instrument(skip(self), fields(player = %self.current_player, move_count = self.move_count))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveResult, GameError> {
        let position = Position::from_row_col(row, col).inspect_err(|e| {
            warn!(error = %e, "Rejected move");
        })?;

        if self.status.is_over() {
            warn!(status = %self.status, "Move attempted after game over");
            return Err(GameError::GameOver(self.status));
        }

        if !self.board.is_empty(position) {
            warn!(%position, "Square already occupied");
            return Ok(MoveResult::Illegal(position));
        }

        let player = self.current_player;
        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));
        self.move_count += 1;
        debug!(%position, %player, move_count = self.move_count, "Mark placed");

        let result = if self.move_count >= WIN_CHECK_FROM && self.is_win(player) {
            self.status = GameStatus::Won(player);
            info!(%player, "Game won");
            MoveResult::Win(player)
        } else if self.move_count >= TIE_CHECK_FROM && self.is_tie() {
            let kind = if self.move_count == 9 {
                TieKind::BoardFull
            } else {
                TieKind::NoWinPossible
            };
            self.status = GameStatus::Tied(kind);
            info!(%kind, "Game tied");
            MoveResult::Tie(kind)
        } else {
            self.current_player = player.opponent();
            MoveResult::Continue(self.current_player)
        };

        self.check_invariants();
        Ok(result)
    }

    /// Returns true if `player` holds a complete row, column or diagonal.
    #[instrument(skip(self))]
    pub fn is_win(&self, player: Player) -> bool {
        rules::is_win(&self.board, player)
    }

    /// Returns true if the board is full or no line can still be completed.
    ///
    /// Assumes the last mover did not just win.
    #[instrument(skip(self))]
    pub fn is_tie(&self) -> bool {
        rules::is_tie(&self.board)
    }

    /// Classifies the current tie, if any.
    pub fn tie_kind(&self) -> Option<TieKind> {
        rules::tie_kind(&self.board)
    }

    /// Abandons the current game and restores the initial state.
    #[instrument(skip(self), fields(move_count = self.move_count, status = %self.status))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Game reset");
    }

    /// Verifies [`GameInvariants`] in debug builds.
    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in &violations {
                tracing::error!(%violation, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Game invariants violated");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form of a [`GameState`], untrusted until replayed.
#[derive(Deserialize)]
struct SavedGame {
    board: Board,
    current_player: Player,
    move_count: usize,
    status: GameStatus,
    history: Vec<Move>,
}

impl TryFrom<SavedGame> for GameState {
    type Error = GameError;

    #[instrument(skip(saved), fields(moves = saved.history.len()))]
    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        if saved.history.len() > Position::ALL.len() {
            warn!("Saved game has too many moves");
            return Err(GameError::InconsistentState);
        }

        let mut game = Self::new();
        for mv in &saved.history {
            game.apply_move(mv.position.row(), mv.position.col())
                .map_err(|_| GameError::InconsistentState)?;
        }

        let claimed = Self {
            board: saved.board,
            current_player: saved.current_player,
            move_count: saved.move_count,
            status: saved.status,
            history: saved.history,
        };
        if game != claimed {
            warn!("Saved game does not match its history");
            return Err(GameError::InconsistentState);
        }
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_execute_dispatches() {
        let mut game = GameState::new();
        assert_eq!(
            game.execute(Command::Move { row: 1, col: 1 }),
            Ok(MoveResult::Continue(Player::O))
        );
        assert_eq!(game.execute(Command::Reset), Ok(MoveResult::Continue(Player::X)));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_range_checked_before_game_over() {
        let mut game = GameState::new();
        game.status = GameStatus::Won(Player::X);
        assert_eq!(
            game.apply_move(5, 0),
            Err(GameError::OutOfRange { row: 5, col: 0 })
        );
    }

    fn saved(game: &GameState) -> SavedGame {
        SavedGame {
            board: game.board.clone(),
            current_player: game.current_player,
            move_count: game.move_count,
            status: game.status,
            history: game.history.clone(),
        }
    }

    #[test]
    fn test_saved_game_replays() {
        let mut game = GameState::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.apply_move(row, col).unwrap();
        }
        assert_eq!(GameState::try_from(saved(&game)), Ok(game));
    }

    #[test]
    fn test_saved_game_with_wrong_mover_rejected() {
        let mut game = GameState::new();
        game.apply_move(1, 1).unwrap();
        let mut raw = saved(&game);
        raw.history[0].player = Player::O;
        assert_eq!(
            GameState::try_from(raw),
            Err(GameError::InconsistentState)
        );
    }

    #[test]
    fn test_saved_game_with_runaway_counter_rejected() {
        let mut raw = saved(&GameState::new());
        raw.move_count = usize::MAX;
        assert_eq!(
            GameState::try_from(raw),
            Err(GameError::InconsistentState)
        );
    }
}
