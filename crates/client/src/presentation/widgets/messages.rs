//! Message log widget.
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
};

use crate::message::MessageLevel;
use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = app_state
        .messages
        .recent(visible.max(1))
        .map(|entry| {
            let style = match entry.level {
                MessageLevel::Info => Style::default().fg(Color::Gray),
                MessageLevel::Alert => Style::default().fg(Color::Yellow),
            };
            ListItem::new(Line::styled(entry.text.clone(), style))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Messages "));
    frame.render_widget(list, area);
}
