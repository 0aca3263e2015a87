//! Registration form rendering

use super::field_renderer::{choice_option_at, draw_choice_field, draw_field, draw_helper_text};
use super::strength_meter::draw_strength_meter;
use crate::state::{Form, RegistrationForm, SUBMIT_ROW};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use crate::validation::{Field, RevenueBucket};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const FORM_TITLE: &str = "Register your store";
pub const TERMS_LINE: &str = "By signing up, you agree to our Terms of Service and Privacy Policy";
const BUTTON_LABEL: &str = "Create Account";
const BUTTON_WIDTH: u16 = 24;

/// Screen regions of the form, indexed like `RegistrationForm` fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub boxes: [Rect; 8],
    pub helpers: [Rect; 8],
    pub meter: Rect,
    pub terms: Rect,
    pub button: Rect,
    pub button_helper: Rect,
}

impl FormLayout {
    /// Field index (or `SUBMIT_ROW`) under a screen position
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        if self.button.contains(position) {
            return Some(SUBMIT_ROW);
        }
        self.boxes.iter().position(|rect| rect.contains(position))
    }

    /// Revenue option under a screen position, if it lands on one
    pub fn revenue_option(&self, column: u16, row: u16) -> Option<usize> {
        let revenue = self.boxes[7];
        if !revenue.contains(Position::new(column, row)) {
            return None;
        }
        choice_option_at(&RevenueBucket::LABELS, column - revenue.x)
    }
}

/// Box plus one helper row beneath it
fn split_box(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

fn split_columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Compute the form layout inside the bordered form block
pub fn form_layout(area: Rect) -> FormLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Terms
            Constraint::Length(4),             // Email | Company
            Constraint::Length(4),             // Website | Store
            Constraint::Length(5),             // Password + meter | Confirm
            Constraint::Length(7),             // Description
            Constraint::Length(4),             // Revenue
            Constraint::Length(BUTTON_HEIGHT), // Create Account
            Constraint::Length(1),             // Submit error
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    let (email_row, company_row) = split_columns(rows[1]);
    let (website_row, store_row) = split_columns(rows[2]);
    let (password_col, confirm_col) = split_columns(rows[3]);

    let (email, email_helper) = split_box(email_row);
    let (company, company_helper) = split_box(company_row);
    let (website, website_helper) = split_box(website_row);
    let (store, store_helper) = split_box(store_row);

    let password_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(password_col);
    let (confirm, confirm_helper) = split_box(confirm_col);

    let description_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Length(1)])
        .split(rows[4]);
    let (revenue, revenue_helper) = split_box(rows[5]);

    let button = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(rows[6])[1];

    FormLayout {
        boxes: [
            email,
            company,
            website,
            store,
            password_chunks[0],
            confirm,
            description_chunks[0],
            revenue,
        ],
        helpers: [
            email_helper,
            company_helper,
            website_helper,
            store_helper,
            password_chunks[2],
            confirm_helper,
            description_chunks[1],
            revenue_helper,
        ],
        meter: password_chunks[1],
        terms: rows[0],
        button,
        button_helper: rows[7],
    }
}

/// Draw the whole registration form
pub fn draw_register_form(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {FORM_TITLE} "),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, area);

    let layout = form_layout(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            TERMS_LINE,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        layout.terms,
    );

    for (index, field) in Field::INPUTS.iter().enumerate() {
        let Some(state) = form.get_field(index) else {
            continue;
        };
        let error = form.visible_error(*field);
        let is_active = form.active_field() == index;
        if state.is_choice() {
            draw_choice_field(frame, layout.boxes[index], state, is_active, error.is_some());
        } else {
            draw_field(frame, layout.boxes[index], state, is_active, error.is_some());
        }
        draw_helper_text(frame, layout.helpers[index], error);
    }

    draw_strength_meter(frame, layout.meter, &form.strength);

    let label = if form.is_submitting {
        "Submitting..."
    } else {
        BUTTON_LABEL
    };
    render_action_button(
        frame,
        layout.button,
        label,
        form.is_submit_row_active(),
        !form.is_submitting,
        Some(Color::Green),
    );
    draw_helper_text(
        frame,
        layout.button_helper,
        form.visible_error(Field::Submit),
    );
}
