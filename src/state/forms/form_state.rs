//! Contact form state

use super::field::{ContactField, FormField};

/// The contact form's four values. Every field is always present; an
/// untouched field holds the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub message: FormField,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::empty(ContactField::Name),
            email: FormField::empty(ContactField::Email),
            phone: FormField::empty(ContactField::Phone),
            message: FormField::empty(ContactField::Message),
        }
    }

    pub fn field(&self, field: ContactField) -> &FormField {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut FormField {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }

    /// Current text of a field
    pub fn get(&self, field: ContactField) -> &str {
        self.field(field).as_text()
    }

    /// Replace one field's value, leaving the others untouched
    pub fn set(&mut self, field: ContactField, value: String) {
        self.field_mut(field).set_text(value);
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        for field in ContactField::ALL {
            self.field_mut(field).clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| self.field(field).is_empty())
    }

    /// Fields in tab order
    pub fn fields(&self) -> [&FormField; 4] {
        [&self.name, &self.email, &self.phone, &self.message]
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
