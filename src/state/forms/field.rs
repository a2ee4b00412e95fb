//! Form field value objects

use std::fmt;
use std::str::FromStr;

/// The four inputs of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    /// All fields in tab order
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Phone, Self::Message];

    /// Wire name of the field
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Phone => "Your Phone Number",
            Self::Message => "Your Message",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "What's your name?",
            Self::Email => "What's your email?",
            Self::Phone => "Enter your phone number",
            Self::Message => "What's your message?",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Position in tab order
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::Message => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a field name is not one of the four known keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl FromStr for ContactField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub field: ContactField,
    pub value: String,
}

impl FormField {
    /// Create an empty field
    pub fn empty(field: ContactField) -> Self {
        Self {
            field,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    pub fn is_multiline(&self) -> bool {
        self.field.is_multiline()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod contact_field {
        use super::*;

        #[test]
        fn test_parse_known_keys() {
            assert_eq!("name".parse(), Ok(ContactField::Name));
            assert_eq!("email".parse(), Ok(ContactField::Email));
            assert_eq!("phone".parse(), Ok(ContactField::Phone));
            assert_eq!("message".parse(), Ok(ContactField::Message));
        }

        #[test]
        fn test_parse_unknown_key() {
            let parsed: Result<ContactField, _> = "subject".parse();
            assert_eq!(parsed, Err(UnknownField("subject".to_string())));
        }

        #[test]
        fn test_parse_is_case_sensitive() {
            assert!("Name".parse::<ContactField>().is_err());
        }

        #[test]
        fn test_index_round_trips() {
            for field in ContactField::ALL {
                assert_eq!(ContactField::from_index(field.index()), Some(field));
            }
            assert_eq!(ContactField::from_index(4), None);
        }

        #[test]
        fn test_only_message_is_multiline() {
            let multiline: Vec<_> = ContactField::ALL
                .into_iter()
                .filter(ContactField::is_multiline)
                .collect();
            assert_eq!(multiline, vec![ContactField::Message]);
        }

        #[test]
        fn test_display_uses_key() {
            assert_eq!(ContactField::Phone.to_string(), "phone");
        }
    }

    mod form_field {
        use super::*;

        #[test]
        fn test_empty_field() {
            let field = FormField::empty(ContactField::Name);
            assert!(field.is_empty());
            assert_eq!(field.label(), "Your Name");
        }

        #[test]
        fn test_push_and_pop() {
            let mut field = FormField::empty(ContactField::Email);
            field.push_char('a');
            field.push_char('é');
            assert_eq!(field.as_text(), "aé");
            field.pop_char();
            assert_eq!(field.as_text(), "a");
        }

        #[test]
        fn test_pop_on_empty_is_noop() {
            let mut field = FormField::empty(ContactField::Phone);
            field.pop_char();
            assert!(field.is_empty());
        }

        #[test]
        fn test_set_and_clear() {
            let mut field = FormField::empty(ContactField::Message);
            field.set_text("line one\nline two".to_string());
            assert!(field.is_multiline());
            assert_eq!(field.as_text(), "line one\nline two");
            field.clear();
            assert!(field.is_empty());
        }
    }
}
