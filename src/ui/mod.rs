//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod layout;
mod login;
mod register;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (main_area, status_area) = layout::create_layout(area);

    // Draw main content based on current view
    match app.state.current_view {
        View::Register => register::draw(frame, main_area, app),
        View::Login => login::draw(frame, main_area),
    }

    // Draw status bar
    layout::draw_status_bar(frame, status_area, app);

    // Error dialog overlays everything (modal)
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
