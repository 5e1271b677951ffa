//! Eye Float - an animated eye widget model
//!
//! Core modules:
//! - `sim`: Deterministic eye state (geometry, gaze, blink, timers, tick)
//! - `renderer`: Draw-command generation with immutable styles
//! - `engine`: Host-facing widget contract and events
//! - `settings`: Serializable widget configuration

pub mod engine;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use engine::{EyeEvent, EyeListener, EyeWidgetEngine, SharedEngine};
pub use renderer::{DrawCommand, Part};
pub use settings::{DisplayMode, EyeSettings};

/// Widget configuration constants
pub mod consts {
    /// Fixed animation tick (~60 Hz), in milliseconds
    pub const TICK_MS: f64 = 16.0;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Eye radius as a fraction of the widget's shorter side
    pub const EYE_RADIUS_RATIO: f64 = 0.4;
    pub const IRIS_RATIO: f64 = 0.35;
    pub const PUPIL_RATIO: f64 = 0.4;
    /// Eye radius used by the smart display mode
    pub const SMART_EYE_SIZE: f64 = 150.0;

    /// Iris reaches at most half its allowed travel
    pub const IRIS_DAMPING: f64 = 0.5;
    /// Pupil moves less than the iris
    pub const PUPIL_DAMPING: f64 = 0.3;
    /// Per-tick gaze multiplier while easing back
    pub const GAZE_DECAY: f64 = 0.9;
    /// Offsets below this snap to zero
    pub const SETTLE_EPSILON: f64 = 0.1;

    /// Closing ticks per blink (progress step of 0.1)
    pub const BLINK_CLOSE_TICKS: u32 = 10;
    /// Pause with the eye closed before reopening
    pub const REOPEN_DELAY_MS: f64 = 50.0;
    /// Random blink delay range [min, max)
    pub const AUTO_BLINK_MIN_MS: f64 = 3000.0;
    pub const AUTO_BLINK_MAX_MS: f64 = 8000.0;

    /// Glow rings around the eye
    pub const GLOW_RINGS: u8 = 5;
    pub const GLOW_SPACING: f64 = 10.0;
    pub const EYELASH_COUNT: u32 = 12;
    pub const EYELASH_LENGTH: f64 = 20.0;
    pub const TARGET_RING_RADIUS: f64 = 15.0;
}
