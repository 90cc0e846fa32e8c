//! Mock collaborators for host tests
//!
//! Each double shares its state through `Rc<RefCell<..>>` so a test can keep
//! a handle for inspection after moving the double into a task.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use embassy_time::Instant;
use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin};

use super::{
    Actuator, AdcError, AxisInput, ButtonInput, ConsoleError, LineSink, PlatformError, Result,
};
use crate::types::Axis;

// ===================================================================
// embedded-hal pin
// ===================================================================

#[derive(Debug)]
pub struct MockPinError;

impl digital::Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Pin whose level is shared between clones
#[derive(Clone)]
pub struct MockPin {
    level: Rc<Cell<bool>>,
    fail: bool,
}

impl MockPin {
    pub fn new(level: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(level)),
            fail: false,
        }
    }

    /// Pin that errors on every access
    pub fn failing() -> Self {
        Self {
            level: Rc::new(Cell::new(false)),
            fail: true,
        }
    }

    pub fn set(&self, level: bool) {
        self.level.set(level);
    }

    pub fn level(&self) -> bool {
        self.level.get()
    }
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
        if self.fail {
            return Err(MockPinError);
        }
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        if self.fail {
            return Err(MockPinError);
        }
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        if self.fail {
            return Err(MockPinError);
        }
        self.level.set(true);
        Ok(())
    }
}

// ===================================================================
// Joystick ADC
// ===================================================================

#[derive(Default)]
struct AdcScript {
    /// (horizontal, vertical) pairs; the last one repeats once exhausted
    samples: VecDeque<(u16, u16)>,
    current: (u16, u16),
    reads: Vec<Axis>,
    fail: bool,
}

/// ADC returning scripted samples and recording the read order
#[derive(Clone, Default)]
pub struct ScriptedAdc {
    inner: Rc<RefCell<AdcScript>>,
}

impl ScriptedAdc {
    pub fn new(samples: &[(u16, u16)]) -> Self {
        let adc = Self::default();
        adc.inner.borrow_mut().samples = samples.iter().copied().collect();
        adc
    }

    pub fn failing() -> Self {
        let adc = Self::default();
        adc.inner.borrow_mut().fail = true;
        adc
    }

    pub fn reads(&self) -> Vec<Axis> {
        self.inner.borrow().reads.clone()
    }
}

impl AxisInput for ScriptedAdc {
    fn read_axis(&mut self, axis: Axis) -> Result<u16> {
        let mut script = self.inner.borrow_mut();
        if script.fail {
            return Err(PlatformError::Adc(AdcError::ConversionFailed));
        }

        // A new pair is loaded on every vertical read, which comes first
        if axis == Axis::Vertical {
            if let Some(next) = script.samples.pop_front() {
                script.current = next;
            }
        }
        script.reads.push(axis);

        Ok(match axis {
            Axis::Horizontal => script.current.0,
            Axis::Vertical => script.current.1,
        })
    }
}

// ===================================================================
// Button
// ===================================================================

/// Button replaying a level per poll; holds the last level afterwards
#[derive(Clone)]
pub struct ScriptedButton {
    levels: Rc<RefCell<VecDeque<bool>>>,
    last: Rc<Cell<bool>>,
    polls: Rc<Cell<usize>>,
}

impl ScriptedButton {
    pub fn new(levels: &[bool]) -> Self {
        Self {
            levels: Rc::new(RefCell::new(levels.iter().copied().collect())),
            last: Rc::new(Cell::new(true)),
            polls: Rc::new(Cell::new(0)),
        }
    }

    pub fn polls(&self) -> usize {
        self.polls.get()
    }
}

impl ButtonInput for ScriptedButton {
    fn read_button(&mut self) -> Result<bool> {
        if let Some(level) = self.levels.borrow_mut().pop_front() {
            self.last.set(level);
        }
        self.polls.set(self.polls.get() + 1);
        Ok(self.last.get())
    }
}

// ===================================================================
// Buzzer
// ===================================================================

#[derive(Default)]
struct ActuatorLog {
    events: Vec<(Instant, bool)>,
    level: bool,
    overlapped: bool,
}

/// Actuator recording every level change with its timestamp
#[derive(Clone, Default)]
pub struct RecordingActuator {
    inner: Rc<RefCell<ActuatorLog>>,
}

impl RecordingActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(Instant, bool)> {
        self.inner.borrow().events.clone()
    }

    pub fn levels(&self) -> Vec<bool> {
        self.inner.borrow().events.iter().map(|(_, level)| *level).collect()
    }

    /// True if the buzzer was ever activated while already active
    pub fn overlapped(&self) -> bool {
        self.inner.borrow().overlapped
    }

    pub fn is_active(&self) -> bool {
        self.inner.borrow().level
    }
}

impl Actuator for RecordingActuator {
    fn set_actuator(&mut self, active: bool) -> Result<()> {
        let mut log = self.inner.borrow_mut();
        if active && log.level {
            log.overlapped = true;
        }
        log.level = active;
        log.events.push((Instant::now(), active));
        Ok(())
    }
}

// ===================================================================
// Console
// ===================================================================

/// Console collecting emitted lines
#[derive(Clone, Default)]
pub struct RecordingConsole {
    lines: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl LineSink for RecordingConsole {
    fn emit_line(&mut self, line: &str) -> Result<()> {
        if self.fail {
            return Err(PlatformError::Console(ConsoleError::WriteFailed));
        }
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}
