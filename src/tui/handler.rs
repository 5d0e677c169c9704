//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases as well as presses
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if app.has_dialog() {
        // Any key closes the help dialog
        app.close_dialog();
        return Ok(());
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => app.previous_step(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Char(' ') => {
            app.next_step()
        }

        KeyCode::Home | KeyCode::Char('g') => app.first_step(),
        KeyCode::End | KeyCode::Char('G') => app.last_step(),

        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.select_step(index);
        }

        _ => {}
    }

    Ok(())
}

/// Handle a mouse event
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Ok(());
    }

    if app.has_dialog() {
        app.close_dialog();
        return Ok(());
    }

    if let Some(target) = app.hit_areas.target_at(mouse.column, mouse.row) {
        app.click(target);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::ClickTarget;
    use crate::tui::views;
    use ratatui::{backend::TestBackend, Terminal};

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn click(app: &mut App, column: u16, row: u16) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        handle_event(app, Event::Mouse(mouse)).unwrap();
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| views::render(frame, app)).unwrap();
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let mut app = App::default();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.navigator.current_index(), 3);
        assert_eq!(app.navigator.current_step().title, "4. Ask Questions");

        press(&mut app, KeyCode::Left);
        assert_eq!(app.navigator.current_index(), 2);
    }

    #[test]
    fn test_digit_keys_jump() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.navigator.current_index(), 4);

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.navigator.current_index(), 4);
        assert!(app.status_message.is_some());

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.navigator.current_index(), 1);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_home_and_end() {
        let mut app = App::default();
        press(&mut app, KeyCode::End);
        assert_eq!(app.navigator.current_index(), 4);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.navigator.current_index(), 0);
    }

    #[test]
    fn test_help_dialog_swallows_next_key() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.has_dialog());

        press(&mut app, KeyCode::Right);
        assert!(!app.has_dialog());
        assert_eq!(app.navigator.current_index(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_event(&mut app, Event::Key(ctrl_c)).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_unbound_keys_leave_step_alone() {
        let mut app = App::default();
        app.select_step(2);
        for code in [KeyCode::Tab, KeyCode::BackTab, KeyCode::Enter, KeyCode::Up] {
            press(&mut app, code);
            assert_eq!(app.navigator.current_index(), 2);
        }
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::default();
        let mut key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key)).unwrap();
        assert_eq!(app.navigator.current_index(), 0);
    }

    #[test]
    fn test_clicking_each_marker() {
        let mut app = App::default();
        draw(&mut app);

        for i in (0..5).rev() {
            let marker = app.hit_areas.markers[i];
            click(&mut app, marker.x + marker.width / 2, marker.y + 1);
            assert_eq!(app.navigator.current_index(), i);
            assert_eq!(app.navigator.current_step(), &crate::models::STEPS[i]);
            draw(&mut app);
        }
    }

    #[test]
    fn test_clicking_buttons() {
        let mut app = App::default();
        draw(&mut app);

        let next = app.hit_areas.next.unwrap();
        click(&mut app, next.x + 1, next.y + 1);
        assert_eq!(app.navigator.current_index(), 1);

        let previous = app.hit_areas.previous.unwrap();
        click(&mut app, previous.x + 1, previous.y + 1);
        assert_eq!(app.navigator.current_index(), 0);

        // Disabled at the first step
        click(&mut app, previous.x + 1, previous.y + 1);
        assert_eq!(app.navigator.current_index(), 0);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_marker_click_on_last_step_then_next() {
        let mut app = App::default();
        draw(&mut app);

        app.click(ClickTarget::Marker(4));
        draw(&mut app);
        let next = app.hit_areas.next.unwrap();
        click(&mut app, next.x + 1, next.y + 1);

        assert_eq!(app.navigator.current_index(), 4);
        assert!(!app.navigator.can_go_next());
    }

    #[test]
    fn test_right_button_and_scroll_ignored() {
        let mut app = App::default();
        draw(&mut app);
        let marker = app.hit_areas.markers[3];

        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: marker.x + 1,
            row: marker.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        handle_event(&mut app, Event::Mouse(mouse)).unwrap();
        assert_eq!(app.navigator.current_index(), 0);
    }
}
