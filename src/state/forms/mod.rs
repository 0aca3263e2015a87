//! Form domain layer
//!
//! Input values plus the interaction substate the core does not own:
//! focus, touched flags and password visibility.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, RegistrationForm, ValidationTriggers, SUBMIT_ROW};
