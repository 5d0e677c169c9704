//! Status bar view
//!
//! Shows step position, the latest status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(
            " Step {} of {} ",
            app.navigator.current_index() + 1,
            app.navigator.len()
        ),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " ←/→:Step  1-5:Jump  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.width()).sum();
    let hints_len = Span::raw(hints).width();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints_len);
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::views::test_support::{contains, render_to_buffer};

    #[test]
    fn test_status_message_shown() {
        let mut app = App::default();
        app.previous_step();
        let buffer = render_to_buffer(&mut app, 100, 40);

        assert!(contains(&buffer, "Already at the first step"));
        assert!(contains(&buffer, "q:Quit"));
    }
}
