//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    forms::draw_register_form(frame, content_area, &app.state.form);
    layout::draw_status_bar(frame, status_area, app);

    // Modal error dialog on top of everything
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

/// What a click at a terminal position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Form row (field index or the submit row)
    pub row: usize,
    /// Revenue option, when the click is on one
    pub option: Option<usize>,
}

/// Resolve a mouse position against the current form layout
pub fn hit_test(screen: Rect, column: u16, row: u16) -> Option<Hit> {
    let (content_area, _) = layout::create_layout(screen);
    let form_layout = forms::form_layout(content_area);
    form_layout.hit(column, row).map(|index| Hit {
        row: index,
        option: form_layout.revenue_option(column, row),
    })
}
