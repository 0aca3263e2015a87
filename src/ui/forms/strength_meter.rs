//! Password strength indicator bar

use crate::strength::{StrengthColor, StrengthResult};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Cells used by the bar itself; the label follows it
const BAR_WIDTH: u16 = 15;

pub fn color_for(color: StrengthColor) -> Color {
    match color {
        StrengthColor::Error => Color::Red,
        StrengthColor::Warning => Color::Yellow,
        StrengthColor::WarningDark => Color::LightRed,
        StrengthColor::Success => Color::Green,
        StrengthColor::SuccessDark => Color::LightGreen,
    }
}

/// Number of filled cells out of `width`
fn filled_cells(strength: &StrengthResult, width: u16) -> u16 {
    (strength.fraction() * f64::from(width)).round() as u16
}

fn meter_line(strength: &StrengthResult, width: u16) -> Line<'static> {
    let filled = filled_cells(strength, width);
    let color = color_for(strength.color());
    Line::from(vec![
        Span::raw(" "),
        Span::styled("█".repeat(filled as usize), Style::default().fg(color)),
        Span::styled(
            "░".repeat(width.saturating_sub(filled) as usize),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" "),
        Span::styled(strength.label(), Style::default().fg(color)),
    ])
}

/// Draw the bar and label on a single row
pub fn draw_strength_meter(frame: &mut Frame, area: Rect, strength: &StrengthResult) {
    let width = BAR_WIDTH.min(area.width.saturating_sub(10));
    frame.render_widget(Paragraph::new(meter_line(strength, width)), area);
}
