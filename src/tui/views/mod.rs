//! TUI Views module
//!
//! Renders the guide page: header, progress tracker, step detail,
//! materials checklist, navigation controls and status bar.

pub mod controls;
pub mod detail;
pub mod header;
pub mod materials;
pub mod status_bar;
pub mod tracker;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::GuideLayout;

/// Render the entire application
///
/// Also records the clickable regions of this frame in `app.hit_areas`.
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = GuideLayout::new(frame.area(), materials::row_count());

    header::render(frame, layout.header);
    tracker::render(frame, app, layout.tracker);
    detail::render(frame, app, layout.detail);
    materials::render(frame, layout.materials);
    controls::render(frame, app, layout.controls);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{contains, render_to_buffer};
    use crate::tui::app::{ActiveDialog, App};

    #[test]
    fn test_first_page_sections() {
        let mut app = App::default();
        let buffer = render_to_buffer(&mut app, 100, 40);

        assert!(contains(&buffer, "AP Statistics: Using Grok to Help You Learn"));
        assert!(contains(&buffer, "1. Set Up"));
        assert!(contains(&buffer, "Find a quiet place to focus"));
        assert!(contains(&buffer, "Materials Needed"));
        assert!(contains(&buffer, "Previous Step"));
        assert!(contains(&buffer, "Next Step"));
        assert!(contains(&buffer, "Step 1 of 5"));
    }

    #[test]
    fn test_render_records_hit_areas() {
        let mut app = App::default();
        render_to_buffer(&mut app, 100, 40);

        assert_eq!(app.hit_areas.markers.len(), 5);
        assert!(app.hit_areas.previous.is_some());
        assert!(app.hit_areas.next.is_some());
    }

    #[test]
    fn test_help_dialog_rendered() {
        let mut app = App::default();
        app.open_dialog(ActiveDialog::Help);
        let buffer = render_to_buffer(&mut app, 100, 40);

        assert!(contains(&buffer, "Help"));
        assert!(contains(&buffer, "Previous step"));
        assert!(contains(&buffer, "Press any key to close"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = App::default();
        render_to_buffer(&mut app, 10, 5);
    }
}
