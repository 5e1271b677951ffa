//! Composite eye state
//!
//! Everything the engine mutates between frames lives here, owned once:
//! geometry, gaze, blink, the timer queue and the blink-cadence RNG.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::blink::BlinkState;
use super::gaze::GazeState;
use super::geometry::GeometryModel;
use super::timer::{TimerHandle, TimerKind, TimerQueue};
use crate::consts::REOPEN_DELAY_MS;
use crate::settings::EyeSettings;

#[derive(Debug, Clone)]
pub struct EyeState {
    pub geometry: GeometryModel,
    pub gaze: GazeState,
    pub blink: BlinkState,
    pub timers: TimerQueue,
    /// Seed the blink-cadence RNG was created from
    pub seed: u64,
    rng: Pcg32,
    auto_blink: bool,
    auto_blink_range: (f64, f64),
    auto_blink_timer: Option<TimerHandle>,
    reopen_timer: Option<TimerHandle>,
    attached: bool,
}

impl EyeState {
    pub fn new(settings: &EyeSettings) -> Self {
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            geometry: GeometryModel::default(),
            gaze: GazeState::default(),
            blink: BlinkState::default(),
            timers: TimerQueue::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            auto_blink: settings.auto_blink,
            auto_blink_range: settings.auto_blink_range(),
            auto_blink_timer: None,
            reopen_timer: None,
            attached: false,
        }
    }

    /// Mark the widget live on a surface; timers may be scheduled from now on
    pub fn attach(&mut self) {
        if !self.attached {
            log::info!("Eye attached (seed {})", self.seed);
        }
        self.attached = true;
    }

    /// Cancel every pending timer and any running blink
    pub fn detach(&mut self) {
        self.timers.cancel_all();
        self.auto_blink_timer = None;
        self.reopen_timer = None;
        self.blink.cancel();
        if self.attached {
            log::info!("Eye detached");
        }
        self.attached = false;
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// (Re)start the random blink cadence, replacing any pending one
    pub fn schedule_auto_blink(&mut self) {
        if let Some(handle) = self.auto_blink_timer.take() {
            self.timers.cancel(handle);
        }
        if !self.auto_blink || !self.attached {
            return;
        }

        let (min, max) = self.auto_blink_range;
        let delay = self.rng.random_range(min..max);
        log::debug!("Next auto-blink in {delay:.0} ms");
        self.auto_blink_timer = Some(self.timers.schedule(TimerKind::AutoBlink, delay));
    }

    /// Start a blink if the widget is attached
    pub fn trigger_blink(&mut self) -> bool {
        if !self.attached {
            log::debug!("Blink ignored while detached");
            return false;
        }
        self.blink.trigger()
    }

    /// Arm the closed-eyelid pause after a blink finished closing
    pub fn arm_reopen(&mut self) {
        if let Some(handle) = self.reopen_timer.take() {
            self.timers.cancel(handle);
        }
        self.reopen_timer = Some(self.timers.schedule(TimerKind::BlinkReopen, REOPEN_DELAY_MS));
    }

    /// Run the action of a timer that came due
    pub fn fire(&mut self, handle: TimerHandle, kind: TimerKind) {
        match kind {
            TimerKind::AutoBlink => {
                if self.auto_blink_timer == Some(handle) {
                    self.auto_blink_timer = None;
                }
                self.trigger_blink();
                self.schedule_auto_blink();
            }
            TimerKind::BlinkReopen => {
                if self.reopen_timer == Some(handle) {
                    self.reopen_timer = None;
                }
                self.blink.reopen();
            }
        }
    }

    pub fn auto_blink_pending(&self) -> bool {
        self.auto_blink_timer
            .is_some_and(|handle| self.timers.is_pending(handle))
    }
}
