//! Header widget with bullets and the current outcome.
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use wolfhunt_core::Outcome;

use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let snapshot = &app_state.snapshot;

    let (status_text, status_style) = match snapshot.outcome {
        Outcome::Ongoing => ("hunt in progress", Style::default().fg(Color::LightGreen)),
        Outcome::WolfCaughtHunter => (
            "caught by the wolf",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Outcome::HunterReachedSafety => (
            "safe and sound",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Outcome::HunterShotWolf => (
            "wolf is down",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let text = vec![Line::from(vec![
        Span::raw("Bullets: "),
        Span::styled(
            snapshot.bullets.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | "),
        Span::styled(status_text, status_style),
    ])];

    let header = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Hunt "));
    frame.render_widget(header, area);
}
