//! UI rendering using ratatui.

mod board;
mod modal;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;
pub use modal::render_prompt;

/// Help line shown under the status bar.
pub const HELP: &str = "Arrows/1-9: move | Enter: place | R: Reset | Q: Quit";

/// Draws the whole screen: title, board, status, help and any open prompt.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(11),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    render_board(frame, chunks[1], app.game(), *app.cursor());

    let status_color = if app.game().is_over() {
        Color::Green
    } else {
        Color::Yellow
    };
    let status = Paragraph::new(app.status_message().as_str())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    if let Some(prompt) = app.prompt() {
        render_prompt(frame, prompt);
    }
}
