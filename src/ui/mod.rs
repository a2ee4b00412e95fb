//! UI module for rendering the TUI

mod cards;
mod components;
mod experience;
mod forms;
mod layout;
mod palette;
mod projects;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Services => cards::draw_services(frame, main_area, app),
        View::Technologies => cards::draw_technologies(frame, main_area, app),
        View::Experience => experience::draw(frame, main_area, app),
        View::Projects => projects::draw(frame, main_area, app),
        View::Contact => forms::draw_contact(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
