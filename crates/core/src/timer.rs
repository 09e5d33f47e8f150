//! Timer module - deferred tasks and the countdown tick source
//!
//! Nothing here reads the wall clock. The owner advances a monotonic
//! millisecond clock and drains whatever came due; each task remembers the
//! session generation it was scheduled under so the session can discard work
//! that belongs to a round that no longer exists.

use crate::types::{CardId, Generation, COUNTDOWN_TICK_MS};

/// Work deferred to a later point on the scheduler clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deferred {
    /// One second of countdown has elapsed.
    CountdownTick,
    /// Flip a mismatched pair back over.
    ResolveMismatch { first: CardId, second: CardId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduledTask {
    pub generation: Generation,
    pub due_ms: u64,
    pub task: Deferred,
}

/// Pending deferred tasks on a caller-driven clock.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    /// Insertion order; ties on `due_ms` fire in the order they were scheduled.
    pending: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> &[ScheduledTask] {
        &self.pending
    }

    pub fn schedule(&mut self, generation: Generation, delay_ms: u32, task: Deferred) {
        self.pending.push(ScheduledTask {
            generation,
            due_ms: self.now_ms + u64::from(delay_ms),
            task,
        });
    }

    /// Drop every pending task matching `pred`.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&ScheduledTask) -> bool) {
        self.pending.retain(|t| !pred(t));
    }

    /// Remove and return the earliest task due at or before `until_ms`.
    ///
    /// The clock moves to the task's due time, so anything it schedules is
    /// measured from when it was supposed to fire rather than from `until_ms`.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<ScheduledTask> {
        let (idx, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(i, t)| (t.due_ms, *i))?;
        let task = self.pending.remove(idx);
        self.now_ms = self.now_ms.max(task.due_ms);
        Some(task)
    }

    /// Move the clock forward without running anything.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

/// Repeating one-second tick source bound to a single session generation.
///
/// At most one tick is ever pending: `start` cancels the previous source
/// before arming a new one.
#[derive(Debug, Clone, Default)]
pub struct Countdown {
    bound: Option<Generation>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, scheduler: &mut Scheduler, generation: Generation) {
        self.stop(scheduler);
        self.bound = Some(generation);
        scheduler.schedule(generation, COUNTDOWN_TICK_MS, Deferred::CountdownTick);
    }

    pub fn stop(&mut self, scheduler: &mut Scheduler) {
        if self.bound.take().is_some() {
            scheduler.cancel_where(|t| t.task == Deferred::CountdownTick);
        }
    }

    /// Arm the next tick after one has fired.
    pub fn rearm(&mut self, scheduler: &mut Scheduler) {
        if let Some(generation) = self.bound {
            scheduler.cancel_where(|t| t.task == Deferred::CountdownTick);
            scheduler.schedule(generation, COUNTDOWN_TICK_MS, Deferred::CountdownTick);
        }
    }

    pub fn is_running(&self) -> bool {
        self.bound.is_some()
    }

    /// Whether a tick from `generation` belongs to the active source.
    pub fn accepts(&self, generation: Generation) -> bool {
        self.bound == Some(generation)
    }
}
