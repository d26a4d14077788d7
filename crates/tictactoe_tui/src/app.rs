//! Application state and key handling.
//!
//! [`App`] owns the single [`GameState`] and is the only thing that
//! mutates it, one key event at a time.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use derive_getters::Getters;
use tictactoe::{Command, GameState, MoveResult, Position};
use tracing::{debug, info, instrument, warn};

use crate::config::TuiConfig;
use crate::input;
use crate::prompt::{self, Prompt};

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// The game being played.
    game: GameState,
    /// Square targeted by Enter/Space.
    cursor: Position,
    /// Text for the status bar.
    status_message: String,
    /// Modal dialog currently open; it receives the next key.
    prompt: Option<Prompt>,
    /// Set once the user has asked to leave.
    should_quit: bool,
    /// Ask before quitting.
    confirm_quit: bool,
    /// Offer another game once one ends.
    prompt_play_again: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        let game = GameState::new();
        let status_message = prompt::turn_message(game.current_player());
        Self {
            game,
            cursor: Position::Center,
            status_message,
            prompt: None,
            should_quit: false,
            confirm_quit: *config.confirm_quit(),
            prompt_play_again: *config.prompt_play_again(),
        }
    }

    /// Handles a key press. Release events are ignored.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Interrupted");
            self.should_quit = true;
            return;
        }

        if let Some(open) = self.prompt.take() {
            self.answer_prompt(open, key.code);
            return;
        }

        match key.code {
            code if input::is_navigation(code) => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = input::keypad_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.request_quit(),
            _ => {}
        }
    }

    /// Places the current player's mark at `position`.
    ///
    /// Does nothing once the game is over: the board is disabled until reset.
    #[instrument(skip(self))]
    pub fn play(&mut self, position: Position) {
        if self.game.is_over() {
            debug!("Board disabled, ignoring move");
            return;
        }

        let command = Command::Move {
            row: position.row(),
            col: position.col(),
        };
        match self.game.execute(command) {
            Ok(MoveResult::Continue(next)) => {
                self.status_message = prompt::turn_message(next);
            }
            Ok(MoveResult::Illegal(pos)) => {
                debug!(%pos, "Illegal move");
                self.prompt = Some(Prompt::IllegalMove);
            }
            Ok(MoveResult::Win(player)) => {
                let message = prompt::win_message(player);
                self.status_message = message.clone();
                self.prompt = Some(Prompt::GameOver { message });
            }
            Ok(MoveResult::Tie(kind)) => {
                self.status_message = prompt::TIE_STATUS.to_string();
                self.prompt = Some(Prompt::GameOver {
                    message: prompt::tie_message(kind),
                });
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.status_message = e.to_string();
            }
        }
    }

    /// Starts a new game, abandoning the current one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
        self.prompt = None;
        self.status_message = prompt::turn_message(self.game.current_player());
    }

    /// Quits, or asks first when confirmation is enabled.
    #[instrument(skip(self))]
    pub fn request_quit(&mut self) {
        if self.confirm_quit {
            self.prompt = Some(Prompt::ConfirmQuit);
        } else {
            self.should_quit = true;
        }
    }

    fn answer_prompt(&mut self, open: Prompt, code: KeyCode) {
        match (open, code) {
            (Prompt::IllegalMove, _) => {}
            (Prompt::GameOver { .. }, _) => {
                if self.prompt_play_again {
                    self.prompt = Some(Prompt::PlayAgain);
                }
            }
            (Prompt::PlayAgain, KeyCode::Char('y' | 'Y') | KeyCode::Enter) => self.reset(),
            (Prompt::PlayAgain, KeyCode::Char('n' | 'N') | KeyCode::Esc) => self.request_quit(),
            (Prompt::ConfirmQuit, KeyCode::Char('y' | 'Y') | KeyCode::Enter) => {
                info!("Quit confirmed");
                self.should_quit = true;
            }
            (Prompt::ConfirmQuit, KeyCode::Char('n' | 'N') | KeyCode::Esc) => {}
            (question, _) => self.prompt = Some(question),
        }
    }
}
