//! Navigation controls
//!
//! "Previous Step" and "Next Step" buttons. A button is drawn dimmed and
//! ignores clicks when it is disabled.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::display::guide::{NEXT_LABEL, PREVIOUS_LABEL};
use crate::tui::app::App;
use crate::tui::layout::control_slots;

/// Render both buttons
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let previous_label = format!("◀ {}", PREVIOUS_LABEL);
    let next_label = format!("{} ▶", NEXT_LABEL);

    let (previous_area, next_area) = control_slots(
        area,
        button_width(&previous_label),
        button_width(&next_label),
    );

    render_button(
        frame,
        &previous_label,
        app.navigator.can_go_previous(),
        previous_area,
    );
    render_button(frame, &next_label, app.navigator.can_go_next(), next_area);

    app.hit_areas.previous = Some(previous_area);
    app.hit_areas.next = Some(next_area);
}

/// Label width plus padding and borders
fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

/// Style for a button's label
pub fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_button(frame: &mut Frame, label: &str, enabled: bool, area: Rect) {
    let border_color = if enabled { Color::Blue } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let button = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(button_style(enabled))
        .block(block);

    frame.render_widget(button, area);
}
