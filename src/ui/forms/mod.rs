//! Form rendering module
//!
//! - `field_renderer`: text and choice field boxes plus helper text
//! - `strength_meter`: password strength bar
//! - `register_form`: layout and drawing of the registration form

mod field_renderer;
mod register_form;
mod strength_meter;

pub use register_form::{draw_register_form, form_layout};
