//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Style for a button's label given its focus/enabled state
fn label_style(is_selected: bool, is_enabled: bool, color: Option<Color>) -> Style {
    if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(color.unwrap_or(Color::Cyan))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color.unwrap_or(Color::White))
    }
}

/// Render a primary action button, centered label, optional accent color
pub fn render_action_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    is_enabled: bool,
    color: Option<Color>,
) {
    let border_style = if is_selected && is_enabled {
        Style::default().fg(color.unwrap_or(Color::Cyan))
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(format!(" {label} "))
        .alignment(Alignment::Center)
        .style(label_style(is_selected, is_enabled, color));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
