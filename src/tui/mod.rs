//! Terminal User Interface module
//!
//! Full-screen rendering of the guide using ratatui: a clickable progress
//! tracker, the current step's details, the materials checklist and
//! previous/next controls.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
