//! UI module for rendering the TUI

mod confirmation;
pub mod components;
pub mod navbar;
pub mod wizard;

use crate::app::App;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.height <= wizard::NAVBAR_HEIGHT {
        return;
    }

    let navbar_area = Rect::new(area.x, area.y, area.width, 1);
    let main_area = Rect::new(
        area.x,
        area.y + wizard::NAVBAR_HEIGHT,
        area.width,
        area.height - wizard::NAVBAR_HEIGHT,
    );

    navbar::draw(frame, navbar_area, app);

    if app.sequencer.is_submitted() {
        confirmation::draw(frame, main_area);
    } else {
        wizard::draw(frame, main_area, app);
    }
}
