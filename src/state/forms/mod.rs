//! Form domain layer
//!
//! Type-safe handling of the contact form's fields and values.

mod field;
mod form_state;

pub use field::{ContactField, FormField, UnknownField};
pub use form_state::ContactForm;
