//! Contact form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::catalog::ContactDetails;
use crate::state::ContactFocus;
use crate::ui::components::{render_button, ButtonState, BUTTON_HEIGHT};
use crate::ui::palette::tone_color;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the contact form with the contact details panel
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and details panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(70), // Form area
            Constraint::Percentage(30), // Details panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_details(frame, main_chunks[1], app.catalog.contact_details());
}

/// Draw the form fields, send button and status line
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Contact Me ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = app.workflow.form();
    let fields = form.fields();

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Send button
    constraints.push(Constraint::Length(2)); // Status line
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let focus = app.state.contact_focus;
    for (idx, field) in fields.iter().enumerate() {
        let is_active = focus.field() == Some(field.field);
        draw_field(frame, chunks[idx], field, is_active);
    }

    // Send button, narrow and left-aligned
    let button_row = chunks[fields.len()];
    let button_area = Rect {
        width: button_row.width.min(14),
        ..button_row
    };
    let sending = app.workflow.is_sending();
    let label = if sending { "Sending" } else { "Send" };
    let state = ButtonState::new(focus == ContactFocus::SendButton, sending);
    render_button(frame, button_area, label, state);

    // Status line coloured by outcome
    let status = app.workflow.status();
    if let Some(tone) = status.tone() {
        let paragraph = Paragraph::new(status.message())
            .style(Style::default().fg(tone_color(tone)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, chunks[fields.len() + 1]);
    }
}

/// Draw the direct contact channels
fn draw_details(frame: &mut Frame, area: Rect, details: &ContactDetails) {
    let block = Block::default()
        .title(" Contact Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let label = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled("Email", label)),
        Line::from(details.email.as_str()),
        Line::from(""),
    ];
    if !details.phone.is_empty() {
        lines.push(Line::from(Span::styled("Phone", label)));
        lines.push(Line::from(details.phone.as_str()));
        lines.push(Line::from(""));
    }
    if let Some(whatsapp) = &details.whatsapp_url {
        lines.push(Line::from(Span::styled("WhatsApp", label)));
        lines.push(Line::from(Span::styled(
            whatsapp.as_str(),
            Style::default().fg(Color::LightBlue),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
