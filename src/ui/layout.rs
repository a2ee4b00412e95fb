//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::contact::SubmissionStatus;
use crate::platform::SEND_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 18;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    // Buttons centered vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, view) in View::ALL.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            idx + 1,
            view.label(),
            app.state.current_view == *view,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Delivery indicator
    let indicator = match app.workflow.status() {
        SubmissionStatus::Sending => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
        SubmissionStatus::Succeeded => Span::styled(" ● ", Style::default().fg(Color::Green)),
        SubmissionStatus::Failed(_) => Span::styled(" ● ", Style::default().fg(Color::Red)),
        SubmissionStatus::Idle => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
    };
    spans.push(indicator);

    // View-specific hints
    let hints = get_view_hints(app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    let quit_hint = if app.quit_pending() {
        " Press Ctrl+C again to quit "
    } else {
        " ^C^C:quit "
    };

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Services | View::Technologies | View::Experience => {
            "1-5:section  Tab:next  j/k:scroll  q:quit".to_string()
        }
        View::Projects => "1-5:section  Tab:next  j/k:select  q:quit".to_string(),
        View::Contact => format!("Tab:next field  {SEND_SHORTCUT}:send  Esc:back"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_line() {
        let area = Rect::new(0, 0, 80, 24);
        let (sidebar, main) = create_layout(area);
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(main.width, 80 - SIDEBAR_WIDTH);
        assert_eq!(main.height, 23);
    }

    #[test]
    fn test_contact_hints_mention_send() {
        assert!(get_view_hints(View::Contact).contains("Ctrl+S:send"));
        assert!(!get_view_hints(View::Projects).contains("send"));
    }
}
