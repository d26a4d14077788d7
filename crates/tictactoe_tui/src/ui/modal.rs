//! Modal prompt rendering.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::board::center_rect;
use crate::prompt::Prompt;

const MODAL_WIDTH: u16 = 44;
const MODAL_HEIGHT: u16 = 7;

/// Draws `prompt` in a bordered box over the middle of the screen.
pub fn render_prompt(frame: &mut Frame, prompt: &Prompt) {
    let area = center_rect(frame.area(), MODAL_WIDTH, MODAL_HEIGHT);

    let border = if prompt.is_question() {
        Color::Cyan
    } else {
        Color::Yellow
    };

    let text = vec![
        Line::from(prompt.body()),
        Line::default(),
        Line::from(Span::styled(
            prompt.hint(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(Span::styled(
                    prompt.title(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
