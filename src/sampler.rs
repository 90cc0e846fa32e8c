//! Joystick axis sampling
//!
//! Reads both ADC channels every `AXIS_SAMPLE_PERIOD` and queues one
//! `AxisReading` per period. The send waits while the queue is full.

use core::convert::Infallible;

use embassy_time::Timer;

use crate::channels::SystemContext;
use crate::config::AXIS_SAMPLE_PERIOD;
use crate::log_info;
use crate::platform::{AxisInput, Result};
use crate::types::{Axis, Message};

/// Read one sample from each axis, vertical first
pub fn sample_axes<A: AxisInput>(adc: &mut A) -> Result<Message> {
    let y = adc.read_axis(Axis::Vertical)?;
    let x = adc.read_axis(Axis::Horizontal)?;
    Ok(Message::axis(x, y))
}

/// Sampler task body; returns only if the ADC fails
pub async fn run_axis_sampler<A: AxisInput, S>(
    mut adc: A,
    ctx: &SystemContext<S>,
) -> Result<Infallible> {
    log_info!("Joystick sampler started");

    loop {
        let reading = sample_axes(&mut adc)?;
        ctx.queue.send(reading).await;

        Timer::after(AXIS_SAMPLE_PERIOD).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{RecordingConsole, ScriptedAdc};
    use crate::platform::{AdcError, PlatformError};
    use embassy_futures::block_on;
    use embassy_futures::select::{select, Either};
    use embassy_time::Duration;

    #[test]
    fn sample_reads_vertical_then_horizontal() {
        let mut adc = ScriptedAdc::new(&[(100, 200)]);
        assert_eq!(sample_axes(&mut adc), Ok(Message::axis(100, 200)));
        assert_eq!(adc.reads(), [Axis::Vertical, Axis::Horizontal]);
    }

    #[test]
    fn sampler_queues_readings_in_order() {
        let adc = ScriptedAdc::new(&[(4095, 0), (2048, 2048), (372, 3000)]);
        let ctx = SystemContext::new(RecordingConsole::new());

        // Three periods plus slack
        let done = block_on(select(
            run_axis_sampler(adc, &ctx),
            Timer::after(Duration::from_millis(250)),
        ));
        assert!(matches!(done, Either::Second(())));

        assert_eq!(ctx.queue.try_receive(), Ok(Message::axis(4095, 0)));
        assert_eq!(ctx.queue.try_receive(), Ok(Message::axis(2048, 2048)));
        assert_eq!(ctx.queue.try_receive(), Ok(Message::axis(372, 3000)));
    }

    #[test]
    fn sampler_blocks_on_full_queue() {
        let adc = ScriptedAdc::new(&[(2048, 2048)]);
        let ctx = SystemContext::new(RecordingConsole::new());
        for _ in 0..ctx.queue.capacity() {
            ctx.queue.try_send(Message::button_press()).unwrap();
        }

        let done = block_on(select(
            run_axis_sampler(adc.clone(), &ctx),
            Timer::after(Duration::from_millis(250)),
        ));
        assert!(matches!(done, Either::Second(())));

        // One sample taken, then stuck on the send
        assert_eq!(adc.reads().len(), 2);
        assert!(ctx.queue.is_full());
    }

    #[test]
    fn adc_failure_ends_the_task() {
        let ctx = SystemContext::new(RecordingConsole::new());
        let result = block_on(run_axis_sampler(ScriptedAdc::failing(), &ctx));
        assert_eq!(
            result.err(),
            Some(PlatformError::Adc(AdcError::ConversionFailed))
        );
        assert!(ctx.queue.is_empty());
    }
}
