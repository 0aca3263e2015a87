//! Registration form state

use super::field::FormField;
use crate::strength::{self, StrengthResult};
use crate::validation::{self, Field, FormValues, RevenueBucket, ValidationResult};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// When validation re-runs while the user is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationTriggers {
    pub on_change: bool,
    pub on_blur: bool,
}

impl Default for ValidationTriggers {
    fn default() -> Self {
        Self {
            on_change: true,
            on_blur: true,
        }
    }
}

/// Index of the "Create Account" button row
pub const SUBMIT_ROW: usize = 8;

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub email: FormField,
    pub company_name: FormField,
    pub website: FormField,
    pub store_name: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub description: FormField,
    pub revenue: FormField,
    pub active_field_index: usize,
    pub errors: ValidationResult,
    pub strength: StrengthResult,
    /// Message for a failed hand-off after validation passed
    pub submit_error: Option<String>,
    pub is_submitting: bool,
    pub triggers: ValidationTriggers,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::with_triggers(ValidationTriggers::default())
    }

    pub fn with_triggers(triggers: ValidationTriggers) -> Self {
        Self {
            email: FormField::text(Field::Email),
            company_name: FormField::text(Field::CompanyName),
            website: FormField::text(Field::Website),
            store_name: FormField::text(Field::StoreName),
            password: FormField::text(Field::Password),
            confirm_password: FormField::text(Field::ConfirmPassword),
            description: FormField::text(Field::Description),
            revenue: FormField::choice(Field::Revenue, &RevenueBucket::LABELS),
            active_field_index: 0,
            errors: ValidationResult::new(),
            // Baseline indicator before the first keystroke
            strength: strength::evaluate(""),
            submit_error: None,
            is_submitting: false,
            triggers,
        }
    }

    /// Start over with empty inputs, keeping the trigger settings
    pub fn reset(&mut self) {
        for field in Field::INPUTS {
            if let Some(f) = self.field_mut(field) {
                f.clear();
                f.touched = false;
            }
        }
        self.active_field_index = 0;
        self.errors = ValidationResult::new();
        self.strength = strength::evaluate("");
        self.submit_error = None;
        self.is_submitting = false;
    }

    /// Returns true if the button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    pub fn is_revenue_active(&self) -> bool {
        self.active_field_index == 7
    }

    pub fn field_mut(&mut self, field: Field) -> Option<&mut FormField> {
        match field {
            Field::Email => Some(&mut self.email),
            Field::CompanyName => Some(&mut self.company_name),
            Field::Website => Some(&mut self.website),
            Field::StoreName => Some(&mut self.store_name),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
            Field::Description => Some(&mut self.description),
            Field::Revenue => Some(&mut self.revenue),
            Field::Submit => None,
        }
    }

    pub fn field(&self, field: Field) -> Option<&FormField> {
        Field::INPUTS
            .iter()
            .position(|f| *f == field)
            .and_then(|i| self.get_field(i))
    }

    /// Snapshot of the current inputs
    pub fn values(&self) -> FormValues {
        FormValues {
            email: self.email.as_text().to_string(),
            company_name: self.company_name.as_text().to_string(),
            website: self.website.as_text().to_string(),
            revenue: self.revenue.as_text().to_string(),
            store_name: self.store_name.as_text().to_string(),
            description: self.description.as_text().to_string(),
            password: self.password.as_text().to_string(),
            confirm_password: self.confirm_password.as_text().to_string(),
        }
    }

    /// Re-run every rule against the current snapshot
    pub fn revalidate(&mut self) {
        self.errors = validation::validate(&self.values());
    }

    /// Error text to show beneath a field; hidden until the field is touched
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if field == Field::Submit {
            return self.submit_error.as_deref();
        }
        let touched = self.field(field).is_some_and(|f| f.touched);
        if touched {
            self.errors.message(field)
        } else {
            None
        }
    }

    pub fn touch_all(&mut self) {
        for field in Field::INPUTS {
            if let Some(f) = self.field_mut(field) {
                f.touched = true;
            }
        }
    }

    /// Handle a value change on the active field
    fn changed(&mut self) {
        let Some(field) = self.get_field(self.active_field_index).map(|f| f.field) else {
            return;
        };
        if field == Field::Password {
            self.strength = strength::evaluate(self.password.as_text());
        }
        if self.triggers.on_change {
            self.revalidate();
        }
    }

    /// Mark a field as interacted with once focus leaves it
    fn blur(&mut self, index: usize) {
        let Some(field) = self.get_field(index).map(|f| f.field) else {
            return;
        };
        if let Some(f) = self.field_mut(field) {
            f.touched = true;
        }
        if self.triggers.on_blur {
            let values = self.values();
            self.errors
                .update(field, validation::validate_field(&values, field));
            // Confirmation depends on the password
            if field == Field::Password {
                self.errors.update(
                    Field::ConfirmPassword,
                    validation::validate_field(&values, Field::ConfirmPassword),
                );
            }
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
            self.changed();
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
            self.changed();
        }
    }

    /// Line break, only honoured by the description
    pub fn newline(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            if field.is_multiline {
                field.push_char('\n');
                self.changed();
            }
        }
    }

    pub fn paste(&mut self, text: &str) {
        if let Some(field) = self.get_active_field_mut() {
            if field.is_choice() {
                return;
            }
            field.push_str(text);
            self.changed();
        }
    }

    /// Toggle show/hide on the active password field
    pub fn toggle_reveal(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.toggle_reveal();
        }
    }

    pub fn select_next_revenue(&mut self) {
        self.revenue.select_next();
        self.revenue_changed();
    }

    pub fn select_prev_revenue(&mut self) {
        self.revenue.select_prev();
        self.revenue_changed();
    }

    pub fn select_revenue(&mut self, index: usize) {
        self.revenue.select(index);
        self.revenue_changed();
    }

    fn revenue_changed(&mut self) {
        if self.triggers.on_change {
            self.revalidate();
        }
    }

    /// Gate a submission: touch everything and validate.
    ///
    /// Returns the snapshot to hand off when the form is valid and no
    /// submission is already running; otherwise focuses the first invalid
    /// field and returns `None`.
    pub fn begin_submit(&mut self) -> Option<FormValues> {
        if self.is_submitting {
            return None;
        }
        self.submit_error = None;
        self.touch_all();
        self.revalidate();

        if let Some(first) = self.errors.first_invalid() {
            if let Some(index) = Field::INPUTS.iter().position(|f| *f == first) {
                self.active_field_index = index;
            }
            return None;
        }

        self.is_submitting = true;
        Some(self.values())
    }

    /// Record the outcome of a hand-off started with `begin_submit`
    pub fn finish_submit(&mut self, failure: Option<String>) {
        self.is_submitting = false;
        self.submit_error = failure;
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        9 // eight inputs plus the submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(SUBMIT_ROW);
        if index != self.active_field_index {
            self.blur(self.active_field_index);
        }
        self.active_field_index = index;
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.email),
            1 => Some(&mut self.company_name),
            2 => Some(&mut self.website),
            3 => Some(&mut self.store_name),
            4 => Some(&mut self.password),
            5 => Some(&mut self.confirm_password),
            6 => Some(&mut self.description),
            7 => Some(&mut self.revenue),
            // Submit row has no input
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.company_name),
            2 => Some(&self.website),
            3 => Some(&self.store_name),
            4 => Some(&self.password),
            5 => Some(&self.confirm_password),
            6 => Some(&self.description),
            7 => Some(&self.revenue),
            _ => None,
        }
    }
}
