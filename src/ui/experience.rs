//! Work experience timeline

use super::palette::hex_color;
use crate::app::App;
use crate::catalog::ExperienceEntry;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the experience timeline, newest entries last as declared
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Work Experience ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines: Vec<Line> = app
        .catalog
        .experiences()
        .iter()
        .skip(app.state.scroll_offset)
        .flat_map(entry_lines)
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Three lines per entry: marker + title, company, date
fn entry_lines(entry: &ExperienceEntry) -> Vec<Line<'_>> {
    let marker_color = hex_color(&entry.icon_color).unwrap_or(Color::Gray);
    vec![
        Line::from(vec![
            Span::styled(" ● ", Style::default().fg(marker_color).bg(Color::White)),
            Span::raw(" "),
            Span::styled(
                entry.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(" │  "),
            Span::styled(entry.company_name.as_str(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::raw(" │  "),
            Span::styled(entry.date.as_str(), Style::default().fg(Color::DarkGray)),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_renders_three_lines() {
        let entry = ExperienceEntry {
            title: "Engineer".to_string(),
            company_name: "Acme".to_string(),
            icon: "acme".to_string(),
            icon_color: "#333333".to_string(),
            date: "2020 - 2021".to_string(),
        };
        let lines = entry_lines(&entry);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Rgb(0x33, 0x33, 0x33)));
        assert_eq!(lines[2].spans[1].content, "2020 - 2021");
    }
}
