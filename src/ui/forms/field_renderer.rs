//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs on screen, borders included
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline() {
        7
    } else {
        3
    }
}

/// Build the lines shown inside a field box
fn field_lines<'a>(field: &'a FormField, is_active: bool) -> Vec<Line<'a>> {
    let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));

    if field.is_empty() {
        let mut spans = vec![];
        if is_active {
            spans.push(cursor);
        }
        spans.push(Span::styled(
            field.field.placeholder(),
            Style::default().fg(Color::DarkGray),
        ));
        return vec![Line::from(spans)];
    }

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    // split('\n') keeps a trailing empty line so the cursor follows a newline
    let mut lines: Vec<Line> = field
        .as_text()
        .split('\n')
        .map(|l| Line::from(Span::styled(l, text_style)))
        .collect();

    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }
    lines
}

/// Draw a form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = field_lines(field, is_active);

    // Keep the end of long messages in view
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(paragraph, area);
}
