//! Platform error types
//!
//! Collaborator failures the core cannot recover from. Every task treats
//! one of these as fatal.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// Implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum PlatformError {
    /// ADC conversion failed
    Adc(AdcError),
    /// GPIO operation failed
    Gpio(GpioError),
    /// Console output failed
    Console(ConsoleError),
}

/// ADC-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion reported an error flag
    ConversionFailed,
    /// Sample outside the 12-bit range
    OutOfRange,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum GpioError {
    /// Reading an input pin failed
    ReadFailed,
    /// Driving an output pin failed
    WriteFailed,
}

/// Console-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum ConsoleError {
    /// Sink rejected the line
    WriteFailed,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Adc(e) => write!(f, "ADC error: {:?}", e),
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::Console(e) => write!(f, "console error: {:?}", e),
        }
    }
}

impl From<AdcError> for PlatformError {
    fn from(e: AdcError) -> Self {
        PlatformError::Adc(e)
    }
}

impl From<GpioError> for PlatformError {
    fn from(e: GpioError) -> Self {
        PlatformError::Gpio(e)
    }
}

impl From<ConsoleError> for PlatformError {
    fn from(e: ConsoleError) -> Self {
        PlatformError::Console(e)
    }
}
