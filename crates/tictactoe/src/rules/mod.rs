//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Every call recomputes
//! from the full board; nothing is tracked incrementally.

pub mod tie;
pub mod win;

pub use tie::{is_full, is_line_dead, is_tie, no_win_possible, tie_kind};
pub use win::{check_winner, is_win};
