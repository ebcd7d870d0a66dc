//! Field rendering for wizard steps

use crate::state::StepField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one step field with its current value.
///
/// An empty required field gets a red border and a dimmed placeholder;
/// validation never surfaces as anything stronger than this visual state.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &StepField,
    value: &str,
    missing: bool,
    is_active: bool,
) {
    let border_style = if missing {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = || Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(Color::Cyan));

    let content = if value.is_empty() {
        let placeholder = field.placeholder.unwrap_or("");
        Paragraph::new(Line::from(vec![
            cursor(),
            Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
        ]))
    } else if field.kind.is_multiline() {
        let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
        match lines.last_mut() {
            Some(last) => last.spans.push(cursor()),
            None => lines.push(Line::from(cursor())),
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::raw(value.to_string()), cursor()]))
    };

    let marker = if field.required { " *" } else { "" };
    let block = Block::default()
        .title(format!(" {}{marker} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
