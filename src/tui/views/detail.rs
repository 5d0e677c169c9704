//! Step detail panel
//!
//! Title, body text and tips for the current step.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

/// Render the detail panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let step = app.navigator.current_step();

    let block = Block::default()
        .title(format!(
            " Step {} of {} ",
            app.navigator.current_index() + 1,
            app.navigator.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        Line::from(Span::styled(
            step.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(step.content),
        Line::from(""),
        Line::from(Span::styled(
            "Pro Tips:",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    lines.extend(step.tips.iter().map(|tip| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Blue)),
            Span::raw(*tip),
        ])
    }));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
