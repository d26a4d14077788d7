//! Keyboard navigation over the board.

use crossterm::event::KeyCode;
use tictactoe::Position;

/// Moves the cursor one square for arrow keys or `hjkl`, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(2)),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(2), col),
        _ => return cursor,
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Returns true for keys handled by [`move_cursor`].
pub fn is_navigation(key: KeyCode) -> bool {
    matches!(
        key,
        KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Char('h' | 'j' | 'k' | 'l')
    )
}

/// Maps keypad digits `1`-`9` to squares, row-major from the top left.
pub fn keypad_position(c: char) -> Option<Position> {
    c.to_digit(10)
        .and_then(|d| Position::from_label_or_number(&d.to_string()))
}
