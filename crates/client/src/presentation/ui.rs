//! Frame layout and panel composition.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::presentation::{terminal::Tui, widgets};
use crate::state::AppState;

const MESSAGE_PANEL_HEIGHT: u16 = 6;

pub fn render(terminal: &mut Tui, app_state: &AppState) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, app_state))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, app_state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(MESSAGE_PANEL_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

    widgets::status::render(frame, chunks[0], app_state);
    widgets::board::render(frame, chunks[1], app_state);
    widgets::messages::render(frame, chunks[2], app_state);
    render_footer(frame, chunks[3]);
}

fn render_footer(frame: &mut Frame, area: ratatui::layout::Rect) {
    let footer = Paragraph::new(Line::from(
        "arrows/wasd move | space fire | q quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
