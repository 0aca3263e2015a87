//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{PASTE_SHORTCUT, REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const QUIT_HINT: &str = " ^C^C:quit ";

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Keyboard hints for the focused row
fn key_hints(on_revenue: bool, on_submit: bool) -> String {
    let focus = if on_revenue {
        "←/→:choose  "
    } else if on_submit {
        "Enter:create  "
    } else {
        ""
    };
    format!(
        "{focus}Tab:next  {SUBMIT_SHORTCUT}:submit  {REVEAL_SHORTCUT}:show  {PASTE_SHORTCUT}:paste  Esc:clear"
    )
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let mut spans = vec![Span::styled(
        format!(
            " {} ",
            key_hints(form.is_revenue_active(), form.is_submit_row_active())
        ),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    if let Some(receipt) = &app.state.last_receipt {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("last: {}", receipt.short_id()),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(QUIT_HINT.len() as u16),
        y: area.y,
        width: (QUIT_HINT.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(QUIT_HINT).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
