//! JoyBuzz - joystick alarm firmware for RP2040
//!
//! Two producer tasks (joystick sampler, button watcher) feed one bounded
//! queue; a dispatcher task prints every message under a console lock and
//! requests buzzer pulses through a counting signal; the buzzer task turns
//! each unit into one on/off pulse.
//!
//! ## Architecture
//! - **Priorities**: buzzer > {joystick, button} > dispatcher, one Embassy
//!   executor per level
//! - **Shared state**: queue, console lock and buzzer signal live in one
//!   `SystemContext` created at start-up
//! - **Hardware**: reached only through the `platform` traits, so the core
//!   runs unchanged in host tests

#![cfg_attr(not(test), no_std)]

pub mod logging;

pub mod actuator;
pub mod buttons;
pub mod channels;
pub mod config;
pub mod dispatcher;
pub mod platform;
pub mod sampler;
pub mod signal;
pub mod supervisor;
pub mod types;

pub use channels::SystemContext;
pub use types::Message;
