//! Joystick button polling
//!
//! This module polls the push button every `BUTTON_POLL_PERIOD` and sends a
//! press event to the dispatcher on each released-to-pressed edge.

use core::convert::Infallible;

use embassy_time::Timer;

use crate::channels::SystemContext;
use crate::config::BUTTON_POLL_PERIOD;
use crate::platform::{ButtonInput, Result};
use crate::types::Message;
use crate::{log_debug, log_info};

// ===================================================================
// Edge Detection
// ===================================================================

/// Press-edge detector over a polled level (`true` = released)
///
/// Debouncing comes from the poll interval alone: a bounce inside one
/// period is not filtered, and two transitions within one period look
/// like none.
#[derive(Clone, Copy, Debug)]
pub struct EdgeDetector {
    last: bool,
}

impl EdgeDetector {
    /// Detector assuming the button starts released
    pub const fn new() -> Self {
        Self { last: true }
    }

    /// Feed one sampled level; returns the press event on a high-to-low edge
    pub fn update(&mut self, level: bool) -> Option<Message> {
        let pressed = self.last && !level;
        self.last = level;
        pressed.then(Message::button_press)
    }

    pub fn last_level(&self) -> bool {
        self.last
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

// ===================================================================
// Button Task Implementation
// ===================================================================

/// Button watcher task body; returns only if the pin read fails
pub async fn run_button_watcher<B: ButtonInput, S>(
    mut button: B,
    ctx: &SystemContext<S>,
) -> Result<Infallible> {
    log_info!("Button watcher started");

    let mut detector = EdgeDetector::new();

    loop {
        let level = button.read_button()?;

        if let Some(event) = detector.update(level) {
            log_debug!("Button pressed");
            ctx.queue.send(event).await;
        }

        Timer::after(BUTTON_POLL_PERIOD).await;
    }
}
