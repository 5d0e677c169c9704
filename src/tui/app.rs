//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use ratatui::layout::{Position, Rect};

use crate::navigation::Navigator;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Something the mouse can click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Tracker marker for the step at this index
    Marker(usize),
    /// "Previous Step" button
    Previous,
    /// "Next Step" button
    Next,
}

/// Screen regions recorded by the last render, used to resolve clicks
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    /// One rect per tracker marker, in step order
    pub markers: Vec<Rect>,
    /// "Previous Step" button
    pub previous: Option<Rect>,
    /// "Next Step" button
    pub next: Option<Rect>,
}

impl HitAreas {
    /// Find what lies under a terminal cell
    pub fn target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let position = Position::new(column, row);

        if let Some(index) = self.markers.iter().position(|r| r.contains(position)) {
            return Some(ClickTarget::Marker(index));
        }
        if self.previous.is_some_and(|r| r.contains(position)) {
            return Some(ClickTarget::Previous);
        }
        if self.next.is_some_and(|r| r.contains(position)) {
            return Some(ClickTarget::Next);
        }
        None
    }
}

/// Main application state
pub struct App {
    /// Current position in the guide
    pub navigator: Navigator,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,

    /// Clickable regions from the last frame
    pub hit_areas: HitAreas,
}

impl App {
    /// Create a new App instance
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            status_message: None,
            hit_areas: HitAreas::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Move to the previous step
    pub fn previous_step(&mut self) {
        if self.navigator.go_to_previous() {
            self.clear_status();
        } else {
            self.set_status("Already at the first step");
        }
    }

    /// Move to the next step
    pub fn next_step(&mut self) {
        if self.navigator.go_to_next() {
            self.clear_status();
        } else {
            self.set_status("Already at the last step");
        }
    }

    /// Jump to a step by zero-based index
    pub fn select_step(&mut self, index: usize) {
        match self.navigator.go_to_step(index) {
            Ok(_) => self.clear_status(),
            Err(_) => self.set_status(format!("There is no step {}", index + 1)),
        }
    }

    /// Jump to the first step
    pub fn first_step(&mut self) {
        self.navigator.go_to_first();
        self.clear_status();
    }

    /// Jump to the last step
    pub fn last_step(&mut self) {
        self.navigator.go_to_last();
        self.clear_status();
    }

    /// Act on a click target
    ///
    /// Clicks on a disabled button do nothing.
    pub fn click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Marker(index) => self.select_step(index),
            ClickTarget::Previous => {
                if self.navigator.can_go_previous() {
                    self.previous_step();
                }
            }
            ClickTarget::Next => {
                if self.navigator.can_go_next() {
                    self.next_step();
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Navigator::default())
    }
}
