//! Progress tracker
//!
//! One marker per step. Completed and current steps are highlighted;
//! upcoming steps are dimmed. Each marker is clickable.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::tracker_slots;

/// Style for a marker that has been reached
pub fn reached_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

/// Style for an upcoming marker
pub fn upcoming_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Render the tracker
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let nav = &app.navigator;
    let slots = tracker_slots(area, nav.len());

    for (i, (step, slot)) in nav.catalog().steps().iter().zip(slots.iter()).enumerate() {
        let style = if nav.is_reached(i) {
            reached_style()
        } else {
            upcoming_style()
        };
        let border_type = if i == nav.current_index() {
            BorderType::Double
        } else {
            BorderType::Rounded
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(style);

        let lines = vec![
            Line::from(Span::styled(step.icon, style)),
            Line::from(Span::styled(step.title, style)),
        ];

        let marker = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(marker, *slot);
    }

    app.hit_areas.markers = slots;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::views::test_support::{find, render_to_buffer};

    #[test]
    fn test_reached_markers_highlighted() {
        let mut app = App::default();
        app.select_step(1);
        let buffer = render_to_buffer(&mut app, 100, 40);

        let (x, y) = find(&buffer, "2. Prepare").unwrap();
        assert_eq!(buffer[(x, y)].fg, Color::Cyan);

        let (x, y) = find(&buffer, "3. Watch").unwrap();
        assert_eq!(buffer[(x, y)].fg, Color::DarkGray);
    }
}
