//! RP2040 implementations of the collaborator traits
//!
//! Button and buzzer pins go through the generic `PinButton` /
//! `PinActuator` adapters since embassy-rp GPIO implements embedded-hal.

use embassy_rp::adc::{Adc, Blocking, Channel};

use super::{AdcError, AxisInput, LineSink, PlatformError, Result};
use crate::config::ADC_MAX_SAMPLE;
use crate::types::Axis;

/// Two-axis analog joystick on the RP2040 ADC
pub struct PicoJoystick {
    adc: Adc<'static, Blocking>,
    vertical: Channel<'static>,
    horizontal: Channel<'static>,
}

impl PicoJoystick {
    /// `vertical` is ADC0 (GPIO26), `horizontal` is ADC1 (GPIO27)
    pub fn new(
        adc: Adc<'static, Blocking>,
        vertical: Channel<'static>,
        horizontal: Channel<'static>,
    ) -> Self {
        Self {
            adc,
            vertical,
            horizontal,
        }
    }
}

impl AxisInput for PicoJoystick {
    fn read_axis(&mut self, axis: Axis) -> Result<u16> {
        let channel = match axis {
            Axis::Vertical => &mut self.vertical,
            Axis::Horizontal => &mut self.horizontal,
        };

        let sample = self
            .adc
            .blocking_read(channel)
            .map_err(|_| PlatformError::Adc(AdcError::ConversionFailed))?;

        if sample > ADC_MAX_SAMPLE {
            return Err(PlatformError::Adc(AdcError::OutOfRange));
        }
        Ok(sample)
    }
}

/// Console lines over RTT, next to the defmt log stream
pub struct RttConsole;

impl LineSink for RttConsole {
    fn emit_line(&mut self, line: &str) -> Result<()> {
        defmt::println!("{=str}", line);
        Ok(())
    }
}
