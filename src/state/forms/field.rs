//! Form field value objects

use crate::validation::Field;

/// Character shown in place of each hidden password character
const MASK_CHAR: char = '*';

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Single choice out of a fixed option list
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form input with its interaction state
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: Field,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
    pub is_secret: bool,
    /// Set once focus has left the field (or on submit)
    pub touched: bool,
    /// Secret fields only: show the plain value
    pub revealed: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(field: Field) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline: field.is_multiline(),
            is_secret: field.is_secret(),
            touched: false,
            revealed: false,
        }
    }

    /// Create a new single-choice field
    pub fn choice(field: Field, options: &'static [&'static str]) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            value: FieldValue::Choice {
                options,
                selected: None,
            },
            is_multiline: false,
            is_secret: false,
            touched: false,
            revealed: false,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    /// The raw value: typed text, or the selected option's label
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => selected
                .and_then(|i| options.get(i).copied())
                .unwrap_or(""),
        }
    }

    /// Index of the selected option (None for text fields)
    pub fn selected(&self) -> Option<usize> {
        match &self.value {
            FieldValue::Choice { selected, .. } => *selected,
            FieldValue::Text(_) => None,
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match &self.value {
            FieldValue::Choice { options, .. } => options,
            FieldValue::Text(_) => &[],
        }
    }

    /// Select an option by index; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if index < options.len() {
                *selected = Some(index);
            }
        }
    }

    /// Move the selection forward (wraps around)
    pub fn select_next(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                Some(i) => (i + 1) % options.len(),
                None => 0,
            });
        }
    }

    /// Move the selection backward (wraps around)
    pub fn select_prev(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                Some(0) | None => options.len() - 1,
                Some(i) => i - 1,
            });
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => {
                if c == '\n' && !self.is_multiline {
                    return;
                }
                s.push(c);
            }
            FieldValue::Choice { .. } => {
                // 1-based digit picks an option
                if let Some(d) = c.to_digit(10) {
                    if d > 0 {
                        self.select(d as usize - 1);
                    }
                }
            }
        }
    }

    /// Append pasted text; single-line fields drop line breaks
    pub fn push_str(&mut self, text: &str) {
        if let FieldValue::Text(s) = &mut self.value {
            if self.is_multiline {
                s.push_str(text);
            } else {
                s.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice { .. } => {
                // Choice fields are changed by selection, not deletion
            }
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
        }
    }

    pub fn toggle_reveal(&mut self) {
        if self.is_secret {
            self.revealed = !self.revealed;
        }
    }

    /// Get the display value for rendering (secrets masked unless revealed)
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) if self.is_secret && !self.revealed => {
                MASK_CHAR.to_string().repeat(s.chars().count())
            }
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { .. } => self.as_text().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RevenueBucket;
    use pretty_assertions::assert_eq;

    mod text_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_uses_field_metadata() {
            let field = FormField::text(Field::Description);
            assert_eq!(field.label, "Description*");
            assert!(field.is_multiline);
            assert!(!field.is_secret);
            assert!(!field.touched);
        }

        #[test]
        fn test_push_and_pop() {
            let mut field = FormField::text(Field::StoreName);
            field.push_char('a');
            field.push_char('b');
            field.pop_char();
            assert_eq!(field.as_text(), "a");
        }

        #[test]
        fn test_single_line_ignores_newline() {
            let mut field = FormField::text(Field::Email);
            field.push_char('\n');
            field.push_str("a\r\nb");
            assert_eq!(field.as_text(), "ab");
        }

        #[test]
        fn test_multiline_keeps_newline() {
            let mut field = FormField::text(Field::Description);
            field.push_str("line one\nline two");
            assert_eq!(field.as_text(), "line one\nline two");
        }

        #[test]
        fn test_push_str_on_choice_is_noop() {
            let mut field = FormField::choice(Field::Revenue, &RevenueBucket::LABELS);
            field.push_str("10+");
            assert_eq!(field.as_text(), "");
        }
    }

    mod secret_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_display_is_masked() {
            let mut field = FormField::text(Field::Password);
            field.push_str("abc123");
            assert_eq!(field.display_value(), "******");
            assert_eq!(field.as_text(), "abc123");
        }

        #[test]
        fn test_reveal_toggles_plain_display() {
            let mut field = FormField::text(Field::ConfirmPassword);
            field.push_str("pässword");
            field.toggle_reveal();
            assert_eq!(field.display_value(), "pässword");
            field.toggle_reveal();
            assert_eq!(field.display_value(), "********");
        }

        #[test]
        fn test_reveal_ignored_on_plain_field() {
            let mut field = FormField::text(Field::Email);
            field.toggle_reveal();
            assert!(!field.revealed);
        }
    }

    mod choice_field {
        use super::*;
        use pretty_assertions::assert_eq;

        fn revenue() -> FormField {
            FormField::choice(Field::Revenue, &RevenueBucket::LABELS)
        }

        #[test]
        fn test_starts_unselected() {
            let field = revenue();
            assert!(field.is_choice());
            assert_eq!(field.selected(), None);
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_select_next_wraps() {
            let mut field = revenue();
            field.select_next();
            assert_eq!(field.as_text(), "0-10000");
            field.select(4);
            field.select_next();
            assert_eq!(field.selected(), Some(0));
        }

        #[test]
        fn test_select_prev_from_none_goes_to_last() {
            let mut field = revenue();
            field.select_prev();
            assert_eq!(field.as_text(), "10+");
            field.select_prev();
            assert_eq!(field.as_text(), "1M-10M");
        }

        #[test]
        fn test_digit_selects_option() {
            let mut field = revenue();
            field.push_char('2');
            assert_eq!(field.as_text(), "10000-100000");
            field.push_char('0');
            field.push_char('9');
            assert_eq!(field.as_text(), "10000-100000");
        }

        #[test]
        fn test_clear_unselects() {
            let mut field = revenue();
            field.select(3);
            field.pop_char();
            assert_eq!(field.selected(), Some(3));
            field.clear();
            assert_eq!(field.selected(), None);
        }
    }
}
