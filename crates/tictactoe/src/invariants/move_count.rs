//! Move count invariant: the counter, the history and the board agree.

use super::Invariant;
use crate::GameState;

/// Invariant: exactly `move_count` squares are occupied, one per history entry.
pub struct MoveCountMatchesBoard;

impl Invariant<GameState> for MoveCountMatchesBoard {
    fn holds(game: &GameState) -> bool {
        let occupied = game.board().occupied_count();
        occupied == game.move_count() && occupied == game.history().len()
    }

    fn description() -> &'static str {
        "Occupied squares match move count and history"
    }
}
