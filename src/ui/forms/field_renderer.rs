//! Field rendering utilities for forms

use crate::platform::REVEAL_SHORTCUT;
use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";
const CHOICE_GAP: &str = "   ";

fn border_color(is_active: bool, has_error: bool) -> Color {
    if has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Title line of a field box, with the show/hide hint on secret fields
fn field_title(field: &FormField) -> String {
    if field.is_secret {
        let eye = if field.revealed { "hide" } else { "show" };
        format!(" {} ({eye}: {REVEAL_SHORTCUT}) ", field.label)
    } else {
        format!(" {} ", field.label)
    }
}

/// Draw a text field; the box border turns red when `has_error`
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    has_error: bool,
) {
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled(
        if is_active { CURSOR } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let display_value = field.display_value();
    let content = if display_value.is_empty() {
        let placeholder = Span::styled(
            field.field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        Paragraph::new(Line::from(vec![cursor, placeholder]))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, text_style),
            cursor,
        ]))
    };

    let block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_active, has_error)));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a single-choice field as a horizontal radio row
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    has_error: bool,
) {
    let selected = field.selected();
    let mut spans = Vec::new();
    for (i, option) in field.options().iter().enumerate() {
        let is_selected = selected == Some(i);
        let marker = if is_selected { "(•)" } else { "( )" };
        let style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{marker} {option}"), style));
        spans.push(Span::raw(CHOICE_GAP));
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_active, has_error)));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Option under a column offset from the left border of a choice box
pub fn choice_option_at(options: &[&str], offset: u16) -> Option<usize> {
    let offset = usize::from(offset.checked_sub(1)?);
    let mut start = 0;
    for (i, option) in options.iter().enumerate() {
        // "( ) " marker plus the label
        let end = start + 4 + option.chars().count();
        if (start..end).contains(&offset) {
            return Some(i);
        }
        start = end + CHOICE_GAP.len();
    }
    None
}

/// Red helper text under a field (nothing when `message` is None)
pub fn draw_helper_text(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let helper = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(helper, area);
    }
}
