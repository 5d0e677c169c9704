//! Help dialog
//!
//! Lists the keyboard shortcuts, grouped by context

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Build the help text from the keybinding table
fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for context in [KeyContext::Global, KeyContext::Navigation, KeyContext::Dialog] {
        lines.push(Line::from(vec![Span::styled(
            context.heading(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]));
        for kb in get_keybindings(context) {
            lines.push(key_line(&format_keybinding(kb), kb.description));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from("Click a step marker or button to navigate."));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
