//! Bounded counting signal
//!
//! The dispatcher gives one unit per alarm, the buzzer task takes one unit
//! per pulse. Built the same way embassy-sync builds its own `Signal`: a
//! blocking mutex around the state plus a waker slot, polled with
//! `poll_fn`.
//!
//! A single task may wait in `take` at a time; a second waiter replaces the
//! first one's waker.

use core::cell::RefCell;
use core::future::poll_fn;
use core::task::Poll;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embassy_sync::waitqueue::WakerRegistration;

/// What happens to a unit given while the count is already at its maximum
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum SignalPolicy {
    /// Count stays within [0, max]; the extra unit is lost
    DropExcess,
    /// Count keeps growing past max so every unit is eventually serviced
    QueueExcess,
}

/// Result of a single `give`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum GiveOutcome {
    Accepted,
    /// Count was at its maximum and the unit was discarded
    Saturated,
}

struct State {
    count: u32,
    lost: u32,
    waker: WakerRegistration,
}

pub struct CountingSignal<M: RawMutex> {
    max: u32,
    policy: SignalPolicy,
    state: BlockingMutex<M, RefCell<State>>,
}

impl<M: RawMutex> CountingSignal<M> {
    /// Create an empty signal holding at most `max` units
    pub const fn new(max: u32, policy: SignalPolicy) -> Self {
        Self {
            max,
            policy,
            state: BlockingMutex::new(RefCell::new(State {
                count: 0,
                lost: 0,
                waker: WakerRegistration::new(),
            })),
        }
    }

    /// Add one unit and wake the waiting consumer
    pub fn give(&self) -> GiveOutcome {
        self.state.lock(|cell| {
            let mut state = cell.borrow_mut();

            let outcome = match self.policy {
                SignalPolicy::DropExcess if state.count >= self.max => {
                    state.lost = state.lost.saturating_add(1);
                    GiveOutcome::Saturated
                }
                SignalPolicy::DropExcess => {
                    state.count += 1;
                    GiveOutcome::Accepted
                }
                SignalPolicy::QueueExcess => {
                    state.count = state.count.saturating_add(1);
                    GiveOutcome::Accepted
                }
            };

            if state.count > 0 {
                state.waker.wake();
            }
            outcome
        })
    }

    /// Wait until a unit is available and consume it
    pub async fn take(&self) {
        poll_fn(|cx| {
            self.state.lock(|cell| {
                let mut state = cell.borrow_mut();
                if state.count > 0 {
                    state.count -= 1;
                    Poll::Ready(())
                } else {
                    state.waker.register(cx.waker());
                    Poll::Pending
                }
            })
        })
        .await
    }

    /// Consume a unit if one is pending, without waiting
    pub fn try_take(&self) -> bool {
        self.state.lock(|cell| {
            let mut state = cell.borrow_mut();
            if state.count > 0 {
                state.count -= 1;
                true
            } else {
                false
            }
        })
    }

    /// Units currently pending
    pub fn count(&self) -> u32 {
        self.state.lock(|cell| cell.borrow().count)
    }

    /// Units discarded because the count was saturated
    pub fn lost(&self) -> u32 {
        self.state.lock(|cell| cell.borrow().lost)
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn policy(&self) -> SignalPolicy {
        self.policy
    }
}
