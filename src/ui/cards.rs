//! Card grids for the services and technologies sections

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Grid layout configuration
const MIN_CARD_WIDTH: u16 = 20;
const CARD_HEIGHT: u16 = 4; // 1 (top border) + 2 (content) + 1 (bottom border)
const CARD_SPACING_H: u16 = 1;

/// Helper for grid layout calculations
struct GridLayout {
    columns: usize,
    card_width: u16,
}

impl GridLayout {
    /// Create a new grid layout based on available width
    fn new(usable_width: u16) -> Self {
        let columns = if usable_width >= MIN_CARD_WIDTH {
            ((usable_width + CARD_SPACING_H) / (MIN_CARD_WIDTH + CARD_SPACING_H)) as usize
        } else {
            1
        };
        let columns = columns.max(1);

        // Distribute remaining space evenly across cards
        let total_spacing = (columns.saturating_sub(1) as u16) * CARD_SPACING_H;
        let card_width = usable_width.saturating_sub(total_spacing) / columns as u16;

        Self {
            columns,
            card_width: card_width.max(MIN_CARD_WIDTH.min(usable_width)),
        }
    }

    /// Convert linear index to (row, col)
    fn index_to_pos(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Get card area for a given position within the inner area
    fn card_area(&self, inner: Rect, row: usize, col: usize) -> Rect {
        Rect {
            x: inner.x + (col as u16) * (self.card_width + CARD_SPACING_H),
            y: inner.y + (row as u16) * CARD_HEIGHT,
            width: self.card_width,
            height: CARD_HEIGHT,
        }
    }
}

/// One card's content
struct Card<'a> {
    title: &'a str,
    subtitle: &'a str,
}

/// Draw the services section
pub fn draw_services(frame: &mut Frame, area: Rect, app: &App) {
    let cards: Vec<Card> = app
        .catalog
        .services()
        .iter()
        .map(|s| Card {
            title: &s.title,
            subtitle: &s.icon,
        })
        .collect();
    draw_grid(frame, area, " What I Do ", &cards, app.state.scroll_offset);
}

/// Draw the technologies section
pub fn draw_technologies(frame: &mut Frame, area: Rect, app: &App) {
    let cards: Vec<Card> = app
        .catalog
        .technologies()
        .iter()
        .map(|t| Card {
            title: &t.name,
            subtitle: &t.icon,
        })
        .collect();
    draw_grid(frame, area, " Technologies ", &cards, app.state.scroll_offset);
}

/// Draw cards in a grid, starting at the row holding `first_index`
fn draw_grid(frame: &mut Frame, area: Rect, title: &str, cards: &[Card], first_index: usize) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if cards.is_empty() {
        let message = Paragraph::new("Nothing to show.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(message, inner);
        return;
    }

    let grid = GridLayout::new(inner.width);
    let (first_row, _) = grid.index_to_pos(first_index);

    for (idx, card) in cards.iter().enumerate() {
        let (row, col) = grid.index_to_pos(idx);
        if row < first_row {
            continue;
        }
        let card_area = grid.card_area(inner, row - first_row, col);

        // Skip if card is outside visible area
        if card_area.y + card_area.height > inner.y + inner.height {
            continue;
        }
        draw_card(frame, card_area, card);
    }
}

/// Draw a single card
fn draw_card(frame: &mut Frame, area: Rect, card: &Card) {
    let content = vec![
        Line::from(Span::styled(
            card.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.subtitle,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}
