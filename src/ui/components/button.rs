//! Boxed buttons for the sidebar and the contact form

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Visual state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Focused,
    /// Shown but not actionable, e.g. Send while a message is in flight
    Busy,
}

impl ButtonState {
    pub fn new(is_focused: bool, is_busy: bool) -> Self {
        match (is_focused, is_busy) {
            (_, true) => Self::Busy,
            (true, false) => Self::Focused,
            (false, false) => Self::Normal,
        }
    }

    fn border(self) -> (Style, BorderType) {
        match self {
            Self::Focused => (Style::default().fg(Color::Cyan), BorderType::Thick),
            Self::Normal => (Style::default().fg(Color::DarkGray), BorderType::Plain),
            Self::Busy => (Style::default().fg(Color::Yellow), BorderType::Rounded),
        }
    }

    fn text(self) -> Style {
        match self {
            Self::Focused => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            Self::Normal => Style::default(),
            Self::Busy => Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        }
    }
}

/// Render a centered label inside a bordered box
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, state: ButtonState) {
    let (border_style, border_type) = state.border();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let paragraph = Paragraph::new(Line::from(Span::styled(label.to_string(), state.text())))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Render a sidebar entry: the number key dimmed, then the view label
pub fn render_sidebar_button(
    frame: &mut Frame,
    area: Rect,
    key: usize,
    label: &str,
    is_selected: bool,
) {
    let state = ButtonState::new(is_selected, false);
    let (border_style, border_type) = state.border();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let line = Line::from(vec![
        Span::styled(format!("{key} "), Style::default().fg(Color::DarkGray)),
        Span::styled(label.to_string(), state.text()),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_busy_wins_over_focus() {
        assert_eq!(ButtonState::new(true, true), ButtonState::Busy);
        assert_eq!(ButtonState::new(true, false), ButtonState::Focused);
        assert_eq!(ButtonState::new(false, false), ButtonState::Normal);
    }

    #[test]
    fn test_sidebar_button_shows_key_and_label() {
        let mut terminal = Terminal::new(TestBackend::new(18, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_sidebar_button(frame, area, 4, "Projects", true);
            })
            .unwrap();
        let row: String = terminal.backend().buffer().content()[18..36]
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(row.contains("4 Projects"));
    }
}
