//! Platform abstraction
//!
//! The core only talks to hardware through the four collaborator traits
//! below. The firmware implements them on RP2040 peripherals (`rp2040`
//! submodule); host tests use the scripted doubles in `mock`.

pub mod error;

#[cfg(feature = "rp2040")]
pub mod rp2040;

#[cfg(test)]
pub mod mock;

pub use error::{AdcError, ConsoleError, GpioError, PlatformError, Result};

use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::types::Axis;

/// Analog joystick axes
pub trait AxisInput {
    /// Read one 12-bit sample in [0, 4095]
    fn read_axis(&mut self, axis: Axis) -> Result<u16>;
}

/// Digital push button
pub trait ButtonInput {
    /// Current logical level: `true` = released (pull-up), `false` = pressed
    fn read_button(&mut self) -> Result<bool>;
}

/// Binary actuator (buzzer)
pub trait Actuator {
    fn set_actuator(&mut self, active: bool) -> Result<()>;
}

/// Append-only console sink
pub trait LineSink {
    /// Write one complete line
    fn emit_line(&mut self, line: &str) -> Result<()>;
}

/// Button wired to any embedded-hal input pin
pub struct PinButton<P> {
    pin: P,
}

impl<P: InputPin> PinButton<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> ButtonInput for PinButton<P> {
    fn read_button(&mut self) -> Result<bool> {
        self.pin
            .is_high()
            .map_err(|_| PlatformError::Gpio(GpioError::ReadFailed))
    }
}

/// Actuator driven through any embedded-hal output pin, active high
pub struct PinActuator<P> {
    pin: P,
}

impl<P: OutputPin> PinActuator<P> {
    /// Wrap the pin and drive it inactive
    pub fn new(mut pin: P) -> Result<Self> {
        pin.set_low()
            .map_err(|_| PlatformError::Gpio(GpioError::WriteFailed))?;
        Ok(Self { pin })
    }
}

impl<P: OutputPin> Actuator for PinActuator<P> {
    fn set_actuator(&mut self, active: bool) -> Result<()> {
        self.pin
            .set_state(PinState::from(active))
            .map_err(|_| PlatformError::Gpio(GpioError::WriteFailed))
    }
}
