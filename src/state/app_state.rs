//! Application state definitions

use super::forms::RegistrationForm;
use crate::config::TuiConfig;
use crate::submission::SubmissionReceipt;
use std::collections::VecDeque;

/// Everything the screen renders from
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: RegistrationForm,
    /// Errors waiting to be shown in the modal dialog, oldest first
    pub error_queue: VecDeque<String>,
    /// Receipt of the most recent accepted registration
    pub last_receipt: Option<SubmissionReceipt>,
}

impl AppState {
    pub fn from_config(config: &TuiConfig) -> Self {
        let mut form = RegistrationForm::with_triggers(config.triggers());
        if config.reveal_passwords() {
            form.password.revealed = true;
            form.confirm_password.revealed = true;
        }
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
