//! Event handling for the TUI
//!
//! Terminal events (key presses, mouse clicks, resize) are read on a
//! background thread and delivered over a channel, interleaved with ticks.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    /// Event receiver
    receiver: mpsc::Receiver<Event>,
    /// Event thread handle
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                            Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                            Ok(CrosstermEvent::Resize(width, height)) => {
                                Some(Event::Resize(width, height))
                            }
                            Ok(_) => None,
                            Err(err) => {
                                tracing::error!("failed to read terminal event: {}", err);
                                return;
                            }
                        };
                        if let Some(event) = forwarded {
                            if sender.send(event).is_err() {
                                return;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!("failed to poll terminal events: {}", err);
                        return;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver, handler }
    }

    /// Get the next event (blocking)
    ///
    /// Fails once the reader thread has stopped.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
