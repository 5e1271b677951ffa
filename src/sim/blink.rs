//! Blink animation state machine
//!
//! `Idle -> Closing -> Reopening -> Idle`
//!
//! Closing is tick-driven: each tick adds a fixed `BLINK_STEP` of progress,
//! independent of frame time. Reopening waits on a delay owned by the caller
//! (see `sim::state`), then [`BlinkState::reopen`] finishes the cycle.

use serde::Serialize;

use crate::consts::BLINK_CLOSE_TICKS;

/// Phase of the current blink cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BlinkPhase {
    #[default]
    Idle,
    /// Eyelid moving down
    Closing,
    /// Fully closed, waiting for the reopen delay
    Reopening,
}

/// Outcome of one [`BlinkState::advance`] step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkStep {
    /// Nothing moved (idle or waiting to reopen)
    Held,
    /// Eyelid moved down but is not closed yet
    Closing,
    /// Eyelid just closed; the reopen delay should be armed now
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlinkState {
    phase: BlinkPhase,
    /// Closing ticks elapsed in this cycle
    ticks: u32,
    eyelid_openness: f64,
}

impl Default for BlinkState {
    fn default() -> Self {
        Self {
            phase: BlinkPhase::Idle,
            ticks: 0,
            eyelid_openness: 1.0,
        }
    }
}

impl BlinkState {
    /// Start a blink. Returns false if one is already running (blinks don't stack).
    pub fn trigger(&mut self) -> bool {
        if self.is_blinking() {
            return false;
        }
        self.phase = BlinkPhase::Closing;
        self.ticks = 0;
        self.eyelid_openness = 1.0;
        log::debug!("Blink started");
        true
    }

    /// Advance one animation tick
    pub fn advance(&mut self) -> BlinkStep {
        if self.phase != BlinkPhase::Closing {
            return BlinkStep::Held;
        }

        self.ticks = (self.ticks + 1).min(BLINK_CLOSE_TICKS);
        if self.ticks == BLINK_CLOSE_TICKS {
            self.eyelid_openness = 0.0;
            self.phase = BlinkPhase::Reopening;
            BlinkStep::Closed
        } else {
            self.eyelid_openness = 1.0 - self.progress();
            BlinkStep::Closing
        }
    }

    /// Finish the cycle after the reopen delay
    pub fn reopen(&mut self) {
        if self.phase == BlinkPhase::Reopening {
            self.phase = BlinkPhase::Idle;
            self.eyelid_openness = 1.0;
            log::debug!("Blink finished");
        }
    }

    /// Abort any running cycle, leaving the eye fully open
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Set how open the eye rests while idle (clamped to [0, 1]).
    ///
    /// Ignored during a blink; returns whether the value was applied.
    pub fn set_eyelid_openness(&mut self, openness: f64) -> bool {
        if self.is_blinking() {
            return false;
        }
        self.eyelid_openness = openness.clamp(0.0, 1.0);
        true
    }

    #[inline]
    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }

    #[inline]
    pub fn is_blinking(&self) -> bool {
        self.phase != BlinkPhase::Idle
    }

    /// Closing progress of the current cycle in [0, 1]
    #[inline]
    pub fn progress(&self) -> f64 {
        f64::from(self.ticks) / f64::from(BLINK_CLOSE_TICKS)
    }

    /// Effective openness (1 = fully open) used for drawing the eyelid
    #[inline]
    pub fn eyelid_openness(&self) -> f64 {
        self.eyelid_openness
    }
}
