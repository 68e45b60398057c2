//! Scheduler module - timer abstraction
//!
//! The engine never reads a clock. It asks a [`Scheduler`] to deliver a
//! [`TimerKind`] after a delay and the host calls
//! [`GameEngine::on_timer`](crate::GameEngine::on_timer) when it fires.
//! Every schedule returns a fresh [`TimerHandle`]; the engine ignores handles
//! it has cancelled or replaced, so a late delivery can never act on a reset game.
//!
//! [`VirtualScheduler`] keeps deadlines on a virtual millisecond clock and is
//! what tests and headless hosts use to step time deterministically.

use crate::types::TimerKind;

/// Identity of one scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Deadline callbacks provided by the host
pub trait Scheduler {
    /// Deliver `timer` once after `delay_ms`
    fn schedule(&mut self, delay_ms: u32, timer: TimerKind) -> TimerHandle;

    /// Drop a pending timer; unknown handles are ignored
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTimer {
    due_ms: u64,
    handle: TimerHandle,
    timer: TimerKind,
}

/// Deterministic scheduler on a virtual clock
///
/// Timers fire in (deadline, schedule order) order.
#[derive(Debug, Clone, Default)]
pub struct VirtualScheduler {
    now_ms: u64,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether a timer of this kind is pending
    pub fn is_pending(&self, timer: TimerKind) -> bool {
        self.pending.iter().any(|p| p.timer == timer)
    }

    /// Milliseconds until the earliest pending timer of this kind fires
    pub fn due_in(&self, timer: TimerKind) -> Option<u64> {
        self.pending
            .iter()
            .filter(|p| p.timer == timer)
            .map(|p| p.due_ms.saturating_sub(self.now_ms))
            .min()
    }

    /// Remove the earliest timer due at or before `until_ms`, moving the clock to its deadline
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(TimerHandle, TimerKind)> {
        let (idx, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.handle))?;

        let fired = self.pending.swap_remove(idx);
        self.now_ms = self.now_ms.max(fired.due_ms);
        Some((fired.handle, fired.timer))
    }

    /// Move the clock forward without firing anything
    pub fn advance_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&mut self, delay_ms: u32, timer: TimerKind) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending.push(PendingTimer {
            due_ms: self.now_ms + delay_ms as u64,
            handle,
            timer,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|p| p.handle != handle);
    }
}
