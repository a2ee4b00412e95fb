//! Projects list and detail pane

use super::palette::tag_color;
use crate::app::App;
use crate::catalog::ProjectEntry;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Draw the projects list with the selected project's details
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let projects = app.catalog.projects();

    if projects.is_empty() {
        let message = Paragraph::new("No projects yet.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" Projects ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(message, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // List
            Constraint::Percentage(60), // Detail
        ])
        .split(area);

    let selected = app.state.selected_project.min(projects.len() - 1);
    draw_list(frame, chunks[0], projects, selected);
    draw_detail(frame, chunks[1], &projects[selected]);
}

/// Draw the project names, keeping the selection in view
fn draw_list(frame: &mut Frame, area: Rect, projects: &[ProjectEntry], selected: usize) {
    let items: Vec<ListItem> = projects
        .iter()
        .map(|p| ListItem::new(p.name.as_str()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Projects ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw description, tags and links of one project
fn draw_detail(frame: &mut Frame, area: Rect, project: &ProjectEntry) {
    let block = Block::default()
        .title(format!(" {} ", project.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines = vec![
        Line::from(project.summary()),
        Line::from(""),
        tag_line(project),
        Line::from(""),
    ];

    let links = project.links();
    if links.is_empty() {
        lines.push(Line::from(Span::styled(
            "No public links",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (label, url) in links {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
            Span::styled(
                url,
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Tags as `#name` spans in declared order
fn tag_line(project: &ProjectEntry) -> Line<'_> {
    let spans: Vec<Span> = project
        .tags
        .iter()
        .flat_map(|tag| {
            [
                Span::styled(
                    format!("#{}", tag.name),
                    Style::default().fg(tag_color(&tag.color_class)),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProjectTag;

    #[test]
    fn test_tag_line_keeps_order_and_colors() {
        let project = ProjectEntry {
            id: "p".to_string(),
            name: "P".to_string(),
            description: "d".to_string(),
            tags: vec![
                ProjectTag {
                    name: "react".to_string(),
                    color_class: "blue-text-gradient".to_string(),
                },
                ProjectTag {
                    name: "scss".to_string(),
                    color_class: "pink-text-gradient".to_string(),
                },
            ],
            image: "p".to_string(),
            repo_url: None,
            demo_url: None,
        };

        let line = tag_line(&project);
        let tags: Vec<_> = line
            .spans
            .iter()
            .filter(|s| s.content.starts_with('#'))
            .map(|s| (s.content.to_string(), s.style.fg))
            .collect();
        assert_eq!(
            tags,
            vec![
                ("#react".to_string(), Some(Color::LightBlue)),
                ("#scss".to_string(), Some(Color::LightMagenta)),
            ]
        );
    }
}
