//! Board widget rendering the grid with entities and shot impacts.
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use wolfhunt_core::{Cell, Position};

use crate::state::AppState;

/// Render the grid. Impact marks from the latest volley overdraw the cell
/// they landed on until the next state change clears them.
pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let snapshot = &app_state.snapshot;

    let mut lines = Vec::with_capacity(snapshot.grid_size() as usize);
    for (y, row) in snapshot.board.rows().enumerate() {
        let spans: Vec<Span> = row
            .iter()
            .enumerate()
            .flat_map(|(x, cell)| {
                let position = Position::new(x as i32, y as i32);
                let (glyph, style) = if app_state.impacts.contains(&position) {
                    impact_glyph()
                } else {
                    cell_glyph(*cell)
                };
                [Span::styled(glyph, style), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Forest "));
    frame.render_widget(board, area);
}

fn cell_glyph(cell: Cell) -> (&'static str, Style) {
    match cell {
        Cell::Empty => ("·", Style::default().fg(Color::DarkGray)),
        Cell::Hunter => (
            "H",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Cell::Wolf => (
            "W",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Cell::SafeZone => ("S", Style::default().fg(Color::Green)),
    }
}

fn impact_glyph() -> (&'static str, Style) {
    (
        "x",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}
