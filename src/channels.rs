//! Inter-task communication
//!
//! The three shared resources of the system live in one `SystemContext`,
//! created once at start-up and handed to every task by reference. No task
//! touches another task's state except through these.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;

use crate::config::{BUZZER_SIGNAL_MAX, BUZZER_SIGNAL_POLICY, QUEUE_CAPACITY};
use crate::signal::{CountingSignal, SignalPolicy};
use crate::types::Message;

/// Queue from the producer tasks to the dispatcher
/// Buffer size: 10 (producers wait when full, nothing is dropped)
pub type MessageQueue = Channel<CriticalSectionRawMutex, Message, QUEUE_CAPACITY>;

/// Lock serializing console output; owns the sink it protects
pub type ConsoleLock<S> = Mutex<CriticalSectionRawMutex, S>;

/// Buzzer requests from the dispatcher to the buzzer task
pub type BuzzerSignal = CountingSignal<CriticalSectionRawMutex>;

pub struct SystemContext<S> {
    pub queue: MessageQueue,
    pub console: ConsoleLock<S>,
    pub buzzer: BuzzerSignal,
}

impl<S> SystemContext<S> {
    /// Context sized from `config`
    pub const fn new(console: S) -> Self {
        Self::with_policy(console, BUZZER_SIGNAL_MAX, BUZZER_SIGNAL_POLICY)
    }

    pub const fn with_policy(console: S, signal_max: u32, policy: SignalPolicy) -> Self {
        Self {
            queue: Channel::new(),
            console: Mutex::new(console),
            buzzer: CountingSignal::new(signal_max, policy),
        }
    }
}
