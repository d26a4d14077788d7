//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and the player to move must
/// follow the last move. After a terminal move the mover stays current.
pub struct AlternatingTurns;

impl Invariant<GameState> for AlternatingTurns {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let Some(last) = history.last() else {
            return game.current_player() == Player::X;
        };

        if history[0].player != Player::X {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected = if game.is_over() {
            last.player
        } else {
            last.player.opponent()
        };
        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
