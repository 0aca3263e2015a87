//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::CLIPBOARD_MODIFIER;
use crate::state::{AppState, Form};
use crate::submission::{SubmissionError, SubmissionHandler};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Second Ctrl+C must land within this window to quit
const QUIT_WINDOW: Duration = Duration::from_secs(1);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where valid registrations are handed off
    handler: Box<dyn SubmissionHandler>,
    config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Status bar feedback message
    pub status_message: Option<String>,
    /// Terminal size for mouse hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    pub fn new(config: TuiConfig, handler: Box<dyn SubmissionHandler>) -> Self {
        Self {
            state: AppState::from_config(&config),
            handler,
            config,
            quit: false,
            status_message: None,
            terminal_size: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(previous) if now.duration_since(previous) < QUIT_WINDOW => {
                self.quit = true;
            }
            _ => {
                self.last_ctrl_c = Some(now);
                self.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.handle_ctrl_c();
            return Ok(());
        }
        if self.last_ctrl_c.take().is_some() {
            self.status_message = None;
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        let on_submit_row = self.state.form.is_submit_row_active();
        let on_revenue = self.state.form.is_revenue_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Esc => self.status_message = None,
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('r') if ctrl => self.state.form.toggle_reveal(),
            KeyCode::Char('v') if key.modifiers.contains(CLIPBOARD_MODIFIER) => {
                self.paste_from_clipboard()
            }
            KeyCode::Enter if on_submit_row => self.submit().await,
            KeyCode::Enter => self.state.form.newline(),
            KeyCode::Left if on_revenue => self.state.form.select_prev_revenue(),
            KeyCode::Right | KeyCode::Char(' ') if on_revenue => {
                self.state.form.select_next_revenue()
            }
            KeyCode::Char(c)
                if !ctrl
                    && !key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.state.form.input_char(c)
            }
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_errors() {
            return Ok(());
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let Some((height, width)) = self.terminal_size else {
                return Ok(());
            };
            let screen = Rect::new(0, 0, width, height);
            if let Some(hit) = crate::ui::hit_test(screen, mouse.column, mouse.row) {
                self.state.form.set_active_field(hit.row);
                if let Some(option) = hit.option {
                    self.state.form.select_revenue(option);
                }
            }
        }
        Ok(())
    }

    /// Validate and hand the form to the submission handler
    async fn submit(&mut self) {
        let Some(values) = self.state.form.begin_submit() else {
            let invalid = self.state.form.errors.len();
            if invalid > 0 {
                self.status_message = Some(format!("Fix {invalid} highlighted field(s)"));
            }
            return;
        };

        match self.handler.submit(values).await {
            Ok(receipt) => {
                self.state.form.finish_submit(None);
                tracing::info!(submission_id = %receipt.id, "registration accepted");
                self.status_message = Some(format!(
                    "Account request received for {} ({})",
                    receipt.store_name,
                    receipt.short_id()
                ));
                self.state.last_receipt = Some(receipt);
                if self.config.reset_after_submit() {
                    self.state.form.reset();
                }
            }
            Err(err) => self.submission_failed(err),
        }
    }

    fn submission_failed(&mut self, err: SubmissionError) {
        tracing::warn!(error = %err, "registration submission failed");
        let message = format!("Could not create account: {err}");
        self.state.form.finish_submit(Some(message.clone()));
        self.push_error(message);
    }

    /// Bracketed paste from the terminal
    pub fn handle_paste(&mut self, text: &str) {
        if !self.state.has_errors() {
            self.state.form.paste(text);
        }
    }

    fn paste_from_clipboard(&mut self) {
        match read_clipboard() {
            Ok(text) => self.handle_paste(&text),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard read failed");
                self.status_message = Some("Clipboard unavailable".to_string());
            }
        }
    }
}

fn read_clipboard() -> Result<String> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}
