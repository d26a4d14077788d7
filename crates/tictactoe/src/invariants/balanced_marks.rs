//! Balanced marks invariant: X never trails O and leads by at most one.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: X marks minus O marks is 0 or 1.
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X marks equal O marks or exceed them by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_extra_o_violates() {
        let mut game = GameState::new();
        game.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!BalancedMarks::holds(&game));
    }
}
