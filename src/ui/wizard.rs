//! Wizard step rendering

use crate::app::App;
use crate::ui::components::{button::render_button, button::BUTTON_HEIGHT, field::draw_field};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows taken by the navigation bar and its spacer
pub const NAVBAR_HEIGHT: u16 = 2;

/// Clickable control regions on a step screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Back,
    Forward,
}

/// Map a click inside the wizard area to a control.
///
/// The controls row sits just above the position rail at the bottom: Back in
/// the left third, Next/Submit in the right third. The middle is inert so a
/// stray click cannot navigate.
pub fn control_at(column: u16, row: u16, frame_width: u16, frame_height: u16) -> Option<Control> {
    if frame_height < NAVBAR_HEIGHT + BUTTON_HEIGHT + 1 {
        return None;
    }
    let controls_top = frame_height - 1 - BUTTON_HEIGHT;
    if row < controls_top || row >= controls_top + BUTTON_HEIGHT {
        return None;
    }
    let third = frame_width / 3;
    if column < third {
        Some(Control::Back)
    } else if column >= frame_width.saturating_sub(third) {
        Some(Control::Forward)
    } else {
        None
    }
}

/// Which section the continuous viewport offset currently shows
pub fn visible_index(offset: f32, section_width: f32, step_count: usize) -> usize {
    if step_count == 0 || section_width <= 0.0 {
        return 0;
    }
    let index = (offset / section_width).round();
    (index.max(0.0) as usize).min(step_count - 1)
}

/// Draw the step screen for the section the viewport currently shows
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width as f32;
    let index = visible_index(app.viewport.offset(), width, app.steps.len());
    let Some(step) = app.steps.get(index) else {
        return;
    };
    let step_valid = app.answers.is_step_valid(step);
    let is_last = index + 1 == app.steps.len();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // progress marker
            Constraint::Length(2), // title
            Constraint::Length(2), // subtitle
            Constraint::Min(5),    // fields
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1), // position rail
        ])
        .split(area);

    let progress = format!("{} → {}", step.id, app.steps.len());
    frame.render_widget(
        Paragraph::new(progress).style(Style::default().fg(Color::DarkGray)),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(step.title).style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[1],
    );

    if let Some(subtitle) = step.subtitle {
        frame.render_widget(
            Paragraph::new(subtitle).style(Style::default().fg(Color::Gray)),
            chunks[2],
        );
    }

    draw_fields(frame, chunks[3], app, step);
    draw_controls(frame, chunks[4], app, step_valid, is_last);
    draw_rail(frame, chunks[5], app, width);
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App, step: &crate::state::Step) {
    let mut y = area.y;
    for (i, field) in step.fields.iter().enumerate() {
        let height = if field.kind.is_multiline() { 6 } else { 3 };
        if y + height > area.y + area.height {
            break;
        }
        let field_area = Rect::new(area.x, y, area.width.min(72), height);
        let value = app.answers.get(field.name);
        let missing = app.answers.is_field_missing(field.name, field.required);
        draw_field(frame, field_area, field, value, missing, i == app.active_field());
        y += height + 1;
    }
}

fn draw_controls(frame: &mut Frame, area: Rect, app: &App, step_valid: bool, is_last: bool) {
    let third = area.width / 3;
    let back_area = Rect::new(area.x, area.y, 10.min(third), area.height);
    let forward_width = 16.min(third);
    let forward_area = Rect::new(
        area.x + area.width - forward_width,
        area.y,
        forward_width,
        area.height,
    );

    let at_first = app.sequencer.current_index() == 0;
    render_button(frame, back_area, "← Back", !at_first);

    let forward_label = if app.sequencer.is_submitting() {
        "Sending…"
    } else if is_last {
        "Submit"
    } else {
        "Next"
    };
    render_button(
        frame,
        forward_area,
        forward_label,
        step_valid && !app.sequencer.is_submitting(),
    );

    // Hint sits between the buttons when there is room
    if area.width > 60 {
        let hint = "Press Enter to continue";
        let hint_area = Rect::new(
            area.x + third,
            area.y + 1,
            area.width - third * 2,
            1,
        );
        frame.render_widget(
            Paragraph::new(hint)
                .style(Style::default().fg(Color::DarkGray))
                .centered(),
            hint_area,
        );
    }
}

/// Bottom rail: one dot per step plus a marker tracking the continuous
/// viewport offset, so the eased scroll is visible between steps
fn draw_rail(frame: &mut Frame, area: Rect, app: &App, section_width: f32) {
    let count = app.steps.len();
    if count == 0 || section_width <= 0.0 {
        return;
    }
    let position = app.viewport.offset() / section_width;
    let spans: Vec<Span> = (0..count)
        .map(|i| {
            let distance = (position - i as f32).abs();
            let style = if distance < 0.5 {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled("● ", style)
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod visible_index {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_exact_offsets_map_to_indices() {
            assert_eq!(visible_index(0.0, 80.0, 6), 0);
            assert_eq!(visible_index(160.0, 80.0, 6), 2);
            assert_eq!(visible_index(400.0, 80.0, 6), 5);
        }

        #[test]
        fn test_midway_offsets_round_to_nearest() {
            assert_eq!(visible_index(30.0, 80.0, 6), 0);
            assert_eq!(visible_index(50.0, 80.0, 6), 1);
        }

        #[test]
        fn test_overshoot_clamps_to_last() {
            assert_eq!(visible_index(900.0, 80.0, 6), 5);
        }

        #[test]
        fn test_degenerate_inputs() {
            assert_eq!(visible_index(100.0, 0.0, 6), 0);
            assert_eq!(visible_index(100.0, 80.0, 0), 0);
        }
    }

    mod control_at {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_left_third_of_controls_row_is_back() {
            // 80x24 frame: rail row 23, controls rows 20..23
            assert_eq!(control_at(5, 21, 80, 24), Some(Control::Back));
        }

        #[test]
        fn test_right_third_is_forward() {
            assert_eq!(control_at(75, 21, 80, 24), Some(Control::Forward));
        }

        #[test]
        fn test_middle_is_inert() {
            assert_eq!(control_at(40, 21, 80, 24), None);
        }

        #[test]
        fn test_rows_outside_controls_miss() {
            assert_eq!(control_at(5, 10, 80, 24), None);
            assert_eq!(control_at(5, 23, 80, 24), None);
        }

        #[test]
        fn test_tiny_frame_has_no_controls() {
            assert_eq!(control_at(0, 0, 10, 3), None);
        }
    }
}
