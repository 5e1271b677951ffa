//! Owned, cancellable timers on a virtual clock
//!
//! The clock only moves when [`TimerQueue::advance`] is called from the tick,
//! so delayed work is deterministic and dies with its owner. Nothing here is
//! fire-and-forget: every timer has a [`TimerHandle`] that can be cancelled.

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Periodic random blink
    AutoBlink,
    /// End of the closed-eyelid pause
    BlinkReopen,
}

#[derive(Debug, Clone)]
struct Pending {
    handle: TimerHandle,
    kind: TimerKind,
    due_ms: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now_ms: f64,
    next_id: u64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire `delay_ms` from now
    pub fn schedule(&mut self, kind: TimerKind, delay_ms: f64) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            kind,
            due_ms: self.now_ms + delay_ms.max(0.0),
        });
        handle
    }

    /// Cancel a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            log::debug!("Cancelling {} pending timers", self.pending.len());
        }
        self.pending.clear();
    }

    /// Move the clock forward and return every timer that came due,
    /// earliest first (ties in scheduling order).
    pub fn advance(&mut self, dt_ms: f64) -> Vec<(TimerHandle, TimerKind)> {
        self.now_ms += dt_ms.max(0.0);
        let now = self.now_ms;

        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| p.due_ms <= now);
        self.pending = rest;

        due.sort_by(|a, b| {
            a.due_ms
                .partial_cmp(&b.due_ms)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.handle.0.cmp(&b.handle.0))
        });
        due.into_iter().map(|p| (p.handle, p.kind)).collect()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    /// Virtual time in milliseconds
    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
