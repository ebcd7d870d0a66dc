//! Top navigation bar: brand plus one label per step

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Columns reserved for the brand mark at the left edge
pub const BRAND_WIDTH: u16 = 12;

const BRAND: &str = "≋ AQUAFORM";

/// Map a click column to a navigation target.
///
/// The brand jumps to the first step; the remaining width is split evenly
/// across the step labels. Returns `None` outside any target.
pub fn nav_target_at(column: u16, width: u16, item_count: usize) -> Option<usize> {
    if item_count == 0 || width <= BRAND_WIDTH {
        return None;
    }
    if column < BRAND_WIDTH {
        return Some(0);
    }
    if column >= width {
        return None;
    }
    let items_width = (width - BRAND_WIDTH) as usize;
    let slot = (column - BRAND_WIDTH) as usize * item_count / items_width;
    Some(slot.min(item_count - 1))
}

/// Draw the navigation bar with the active step highlighted
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.sequencer.current_index();

    let mut spans = vec![Span::styled(
        format!("{BRAND:<width$}", width = BRAND_WIDTH as usize),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    let item_count = app.steps.len();
    if item_count > 0 && area.width > BRAND_WIDTH {
        let items_width = (area.width - BRAND_WIDTH) as usize;
        let slot_width = items_width / item_count;
        for (i, step) in app.steps.iter().enumerate() {
            let style = if i == active && !app.sequencer.is_submitted() {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let label: String = step.nav_label.chars().take(slot_width.saturating_sub(1)).collect();
            spans.push(Span::styled(
                format!("{label:<slot_width$}"),
                style,
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
