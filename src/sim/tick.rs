//! Fixed timestep animation tick
//!
//! Ordering inside one tick is part of the contract:
//! 1. due timers fire (auto-blink, reopen)
//! 2. blink advances
//! 3. gaze decays (only while not tracking)
//!
//! so a frame rendered after the tick sees fully updated state.

use super::blink::BlinkStep;
use super::state::EyeState;

/// Advance the eye state by one tick of `dt_ms` milliseconds
pub fn tick(state: &mut EyeState, dt_ms: f64) {
    for (handle, kind) in state.timers.advance(dt_ms) {
        state.fire(handle, kind);
    }

    if state.blink.advance() == BlinkStep::Closed {
        state.arm_reopen();
    }

    if !state.gaze.is_tracking() {
        state.gaze.decay();
    }
}
