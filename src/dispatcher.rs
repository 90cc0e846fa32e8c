//! Message processing
//!
//! The only consumer of the message queue. Every message becomes one
//! console line written under the console lock; alarming joystick
//! positions and button presses each request one buzzer pulse.

use core::convert::Infallible;
use core::fmt::Write;

use heapless::String;

use crate::channels::SystemContext;
use crate::config::{ADC_ALARM_HIGH, ADC_ALARM_LOW, LINE_CAPACITY};
use crate::platform::{LineSink, Result};
use crate::signal::GiveOutcome;
use crate::types::Message;
use crate::{log_debug, log_info, log_warn};

/// Console line for one message
pub type Line = String<LINE_CAPACITY>;

/// True when either axis is outside the [373, 3723] band
pub fn alarm_triggered(x: u16, y: u16) -> bool {
    x > ADC_ALARM_HIGH || x < ADC_ALARM_LOW || y > ADC_ALARM_HIGH || y < ADC_ALARM_LOW
}

impl Message {
    /// Whether this message requests a buzzer pulse
    pub fn triggers_alarm(&self) -> bool {
        match *self {
            Message::AxisReading { x, y } => alarm_triggered(x, y),
            Message::ButtonEvent { .. } => true,
        }
    }
}

/// Human-readable line for a message
pub fn format_line(msg: &Message) -> Line {
    let mut line = Line::new();
    let written = match *msg {
        Message::AxisReading { x, y } => write!(line, "Joy - X: {:4}, Y: {:4}", x, y),
        Message::ButtonEvent { .. } => write!(line, "Button pressed!"),
    };
    // Both formats fit LINE_CAPACITY for any u16 pair
    debug_assert!(written.is_ok(), "console line overflow");
    line
}

/// Handle one message: emit its line under the console lock and, when it
/// triggers, give one buzzer unit before the lock is released.
///
/// Returns the signal outcome when a unit was requested.
pub async fn dispatch<S: LineSink>(
    ctx: &SystemContext<S>,
    msg: &Message,
) -> Result<Option<GiveOutcome>> {
    let line = format_line(msg);

    let mut console = ctx.console.lock().await;
    console.emit_line(&line)?;

    if !msg.triggers_alarm() {
        return Ok(None);
    }

    let outcome = ctx.buzzer.give();
    match outcome {
        GiveOutcome::Accepted => log_debug!("Buzzer requested ({} pending)", ctx.buzzer.count()),
        GiveOutcome::Saturated => log_warn!(
            "Buzzer signal saturated, request dropped ({} lost)",
            ctx.buzzer.lost()
        ),
    }
    Ok(Some(outcome))
}

/// Dispatcher task body; returns only if the console fails
pub async fn run_dispatcher<S: LineSink>(ctx: &SystemContext<S>) -> Result<Infallible> {
    log_info!("Dispatcher started");

    loop {
        let msg = ctx.queue.receive().await;
        dispatch(ctx, &msg).await?;
    }
}
