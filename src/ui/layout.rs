//! Top-level layout and status bar

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the main content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the status bar: backend target on the left, either the last
/// action outcome or key help on the right.
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(" ⇄ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.state.server_url.clone(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
    ];

    if app.state.submitting {
        spans.push(Span::styled(
            "Submitting registration…",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(ref message) = app.state.status_message {
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        ));
    } else {
        spans.push(Span::styled(
            "Tab: next field  ↑/↓: options  Del: clear  Enter: select  Ctrl+C: quit",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
