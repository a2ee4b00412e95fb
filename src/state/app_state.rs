//! Application state definitions

use super::forms::ContactField;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Services,
    Technologies,
    Experience,
    Projects,
    Contact,
}

impl View {
    /// Views in sidebar order
    pub const ALL: [View; 5] = [
        Self::Services,
        Self::Technologies,
        Self::Experience,
        Self::Projects,
        Self::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Services => "Services",
            Self::Technologies => "Tech",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Services => 0,
            Self::Technologies => 1,
            Self::Experience => 2,
            Self::Projects => 3,
            Self::Contact => 4,
        }
    }

    /// View bound to a number key ('1'..='5')
    pub fn from_digit(c: char) -> Option<Self> {
        let digit = c.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(|idx| Self::ALL.get(idx).copied())
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Row of the contact form holding focus: one of the fields or the Send button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFocus {
    Field(ContactField),
    SendButton,
}

impl Default for ContactFocus {
    fn default() -> Self {
        Self::Field(ContactField::Name)
    }
}

impl ContactFocus {
    const ROWS: usize = ContactField::ALL.len() + 1;

    fn index(&self) -> usize {
        match self {
            Self::Field(field) => field.index(),
            Self::SendButton => ContactField::ALL.len(),
        }
    }

    fn from_index(index: usize) -> Self {
        ContactField::from_index(index)
            .map(Self::Field)
            .unwrap_or(Self::SendButton)
    }

    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::ROWS)
    }

    pub fn prev(&self) -> Self {
        Self::from_index((self.index() + Self::ROWS - 1) % Self::ROWS)
    }

    /// Field being edited, if focus is on a field
    pub fn field(&self) -> Option<ContactField> {
        match self {
            Self::Field(field) => Some(*field),
            Self::SendButton => None,
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    /// Index of the highlighted project in the Projects view
    pub selected_project: usize,
    /// Vertical scroll offset for list views
    pub scroll_offset: usize,
    pub contact_focus: ContactFocus,
}

impl AppState {
    /// Switch view, resetting per-view scroll
    pub fn navigate(&mut self, view: View) {
        if self.current_view != view {
            self.current_view = view;
            self.scroll_offset = 0;
        }
    }

    pub fn select_next_project(&mut self, project_count: usize) {
        if project_count > 0 && self.selected_project + 1 < project_count {
            self.selected_project += 1;
        }
    }

    pub fn select_prev_project(&mut self) {
        self.selected_project = self.selected_project.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, max: usize) {
        if self.scroll_offset < max {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}
