//! Tie detection logic for tic-tac-toe.
//!
//! A game is tied when the board is full, or earlier, when every line is
//! "dead": it already holds at least one X and at least one O, so nobody
//! can complete it.

use crate::{Board, Player, Position, TieKind};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Returns true if `line` contains both an X and an O.
pub fn is_line_dead(board: &Board, line: &[Position; 3]) -> bool {
    let has = |player| line.iter().any(|pos| board.get(*pos).player() == Some(player));
    has(Player::X) && has(Player::O)
}

/// Returns true if no line can still be completed by either player.
#[instrument(skip(board))]
pub fn no_win_possible(board: &Board) -> bool {
    Board::LINES.iter().all(|line| is_line_dead(board, line))
}

/// Returns true if the game cannot be won by anyone.
///
/// Only meaningful when the last mover has not just won.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    tie_kind(board).is_some()
}

/// Classifies a tie, or returns `None` if play can continue.
#[instrument(skip(board))]
pub fn tie_kind(board: &Board) -> Option<TieKind> {
    if is_full(board) {
        Some(TieKind::BoardFull)
    } else if no_win_possible(board) {
        Some(TieKind::NoWinPossible)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;
    use crate::rules::win::check_winner;

    /// Builds a board from a 9-char row-major pattern of `X`, `O` and `.`.
    fn board_from(pattern: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().zip(pattern.chars()) {
            match c {
                'X' => board.set(*pos, Square::Occupied(Player::X)),
                'O' => board.set(*pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_tie(&board));
    }

    #[test]
    fn test_full_board_draw() {
        // X O X / O X X / O X O
        let board = board_from("XOXOXXOXO");
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
        assert_eq!(tie_kind(&board), Some(TieKind::BoardFull));
    }

    #[test]
    fn test_all_lines_dead_before_full() {
        // X O X / O X . / O X O
        let board = board_from("XOXOX.OXO");
        assert!(!is_full(&board));
        assert!(no_win_possible(&board));
        assert_eq!(tie_kind(&board), Some(TieKind::NoWinPossible));
    }

    #[test]
    fn test_single_one_sided_row_is_live() {
        // X O X / X O O / . X .  -- bottom row only has X
        let board = board_from("XOXXOO.X.");
        assert!(!is_line_dead(&board, &Board::LINES[2]));
        assert_eq!(tie_kind(&board), None);
    }

    #[test]
    fn test_one_live_line_keeps_game_going() {
        // X O X / . O . / . X .  -- left column only has X
        let board = board_from("XOX.O..X.");
        assert!(!no_win_possible(&board));
        assert_eq!(tie_kind(&board), None);
    }

    #[test]
    fn test_empty_line_is_live() {
        let board = board_from("XO.......");
        assert!(!is_line_dead(&board, &Board::LINES[1]));
        assert!(is_line_dead(&board, &Board::LINES[0]));
    }
}
