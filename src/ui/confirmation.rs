//! Terminal confirmation view shown after submission

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

const HEADLINE: &str = "Stay Dangerous. I'll take it from here.";

const BODY: &str = "Your answers are in. I'll review everything personally and send you \
a tailored breakdown of the ionizer options that fit your situation, plus demos, \
comparisons, and clear next steps.";

/// Draw the post-submission view that replaces the step list
pub fn draw(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(HEADLINE).style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(BODY)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new("Press q to close.").style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}
