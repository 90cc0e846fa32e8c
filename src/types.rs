//! Common types and data structures used across the JoyBuzz application
//!
//! This module contains the message type carried by the queue and the
//! task descriptors shared by the supervisor and the firmware entry point.

use core::fmt::Write;

use crate::config::ADC_MAX_SAMPLE;

/// Message passed from the producer tasks to the dispatcher
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum Message {
    /// Both joystick axes, 12-bit samples in [0, 4095]
    AxisReading { x: u16, y: u16 },
    /// Button edge; only the press edge is ever reported
    ButtonEvent { pressed: bool },
}

impl Message {
    /// Build an axis reading from two raw ADC samples
    pub fn axis(x: u16, y: u16) -> Self {
        debug_assert!(x <= ADC_MAX_SAMPLE && y <= ADC_MAX_SAMPLE);
        Message::AxisReading { x, y }
    }

    /// Build the press event sent on a released-to-pressed transition
    pub const fn button_press() -> Self {
        Message::ButtonEvent { pressed: true }
    }
}

/// Joystick axis, tied to one ADC input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum Axis {
    /// VRX on ADC1 (GPIO27)
    Horizontal,
    /// VRY on ADC0 (GPIO26)
    Vertical,
}

/// Fixed task priority; a higher level preempts a lower one
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum TaskPriority {
    Low = 1,
    Mid = 2,
    High = 3,
}

impl TaskPriority {
    pub const fn level(self) -> u8 {
        self as u8
    }
}

/// Static description of one task created at start-up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskSpec {
    pub name: &'static str,
    /// Stack budget in words
    pub stack_words: u32,
    pub priority: TaskPriority,
}

impl TaskSpec {
    pub const fn new(name: &'static str, stack_words: u32, priority: TaskPriority) -> Self {
        Self {
            name,
            stack_words,
            priority,
        }
    }
}

/// Application version information
pub struct AppVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl AppVersion {
    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self { major, minor, patch }
    }

    /// `major.minor.patch`
    pub fn as_string(&self) -> VersionString {
        let mut text = VersionString::new();
        // Three u8 fields and two dots never exceed the capacity
        let written = write!(text, "{}.{}.{}", self.major, self.minor, self.patch);
        debug_assert!(written.is_ok());
        text
    }
}

/// Formatted version, at most "255.255.255"
pub type VersionString = heapless::String<11>;

const fn parse_u8(digits: &str) -> u8 {
    let bytes = digits.as_bytes();
    let mut value = 0u8;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0');
        i += 1;
    }
    value
}

/// Current application version, taken from the package manifest
pub const APP_VERSION: AppVersion = AppVersion::new(
    parse_u8(env!("CARGO_PKG_VERSION_MAJOR")),
    parse_u8(env!("CARGO_PKG_VERSION_MINOR")),
    parse_u8(env!("CARGO_PKG_VERSION_PATCH")),
);
