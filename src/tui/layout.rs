//! Layout definitions for the TUI
//!
//! Defines the page structure: header, progress tracker, step detail,
//! materials checklist, navigation controls and status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the progress tracker row, borders included
pub const TRACKER_HEIGHT: u16 = 5;

/// Height of the navigation button row, borders included
pub const CONTROLS_HEIGHT: u16 = 3;

/// Layout regions for the guide page
pub struct GuideLayout {
    /// Guide heading
    pub header: Rect,
    /// One marker per step
    pub tracker: Rect,
    /// Current step title, content and tips
    pub detail: Rect,
    /// Static materials checklist
    pub materials: Rect,
    /// Previous/next buttons
    pub controls: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl GuideLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, material_rows: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                 // Header
                Constraint::Length(TRACKER_HEIGHT),    // Tracker
                Constraint::Min(6),                    // Detail
                Constraint::Length(material_rows + 2), // Materials
                Constraint::Length(CONTROLS_HEIGHT),   // Controls
                Constraint::Length(1),                 // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            tracker: chunks[1],
            detail: chunks[2],
            materials: chunks[3],
            controls: chunks[4],
            status_bar: chunks[5],
        }
    }
}

/// Split the tracker row into `count` equal marker slots
pub fn tracker_slots(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Place the previous button at the left edge and the next button at the right
pub fn control_slots(area: Rect, previous_width: u16, next_width: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(previous_width),
            Constraint::Min(0),
            Constraint::Length(next_width),
        ])
        .split(area);

    (chunks[0], chunks[2])
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_slots_cover_row() {
        let area = Rect::new(0, 3, 100, TRACKER_HEIGHT);
        let slots = tracker_slots(area, 5);

        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0].x, 0);
        assert_eq!(slots.iter().map(|r| r.width).sum::<u16>(), 100);
        assert!(slots.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_control_slots_at_edges() {
        let area = Rect::new(0, 30, 80, CONTROLS_HEIGHT);
        let (previous, next) = control_slots(area, 17, 13);

        assert_eq!(previous.x, 0);
        assert_eq!(previous.width, 17);
        assert_eq!(next.x + next.width, 80);
    }

    #[test]
    fn test_guide_layout_stacks_sections() {
        let layout = GuideLayout::new(Rect::new(0, 0, 100, 40), 3);

        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.tracker.height, TRACKER_HEIGHT);
        assert_eq!(layout.materials.height, 5);
        assert_eq!(layout.status_bar.y, 39);
    }
}
