//! Buzzer control
//!
//! Each unit taken from the buzzer signal produces one pulse:
//! Idle -> Active (BUZZER_ON) -> Cooldown (BUZZER_OFF) -> Idle.
//! A unit arriving mid-pulse stays counted in the signal until the
//! current pulse has finished, so pulses never overlap.

use core::convert::Infallible;

use embassy_time::Timer;

use crate::channels::SystemContext;
use crate::config::{BUZZER_OFF, BUZZER_ON};
use crate::platform::{Actuator, Result};
use crate::{log_info, log_trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum ActuatorState {
    Idle,
    Active,
    Cooldown,
}

/// Buzzer output driven through the pulse state machine
pub struct BuzzerController<A> {
    output: A,
    state: ActuatorState,
    pulses: u32,
}

impl<A: Actuator> BuzzerController<A> {
    pub fn new(output: A) -> Self {
        Self {
            output,
            state: ActuatorState::Idle,
            pulses: 0,
        }
    }

    pub fn state(&self) -> ActuatorState {
        self.state
    }

    /// Completed pulses since start-up
    pub fn pulses(&self) -> u32 {
        self.pulses
    }

    fn enter(&mut self, state: ActuatorState) -> Result<()> {
        match state {
            ActuatorState::Active => self.output.set_actuator(true)?,
            ActuatorState::Cooldown => self.output.set_actuator(false)?,
            ActuatorState::Idle => {}
        }
        log_trace!("Buzzer {:?} -> {:?}", self.state, state);
        self.state = state;
        Ok(())
    }

    /// Run one full on/off cycle
    pub async fn pulse(&mut self) -> Result<()> {
        self.enter(ActuatorState::Active)?;
        Timer::after(BUZZER_ON).await;

        self.enter(ActuatorState::Cooldown)?;
        Timer::after(BUZZER_OFF).await;

        self.enter(ActuatorState::Idle)?;
        self.pulses = self.pulses.wrapping_add(1);
        Ok(())
    }
}

/// Buzzer task body; returns only if the output pin fails
pub async fn run_actuator<A: Actuator, S>(output: A, ctx: &SystemContext<S>) -> Result<Infallible> {
    log_info!("Buzzer controller started");

    let mut buzzer = BuzzerController::new(output);

    loop {
        ctx.buzzer.take().await;
        buzzer.pulse().await?;
    }
}
