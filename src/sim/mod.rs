//! Deterministic eye simulation
//!
//! All animation logic lives here. This module must stay pure:
//! - Fixed tick only, no wall clock
//! - Seeded RNG only
//! - No rendering or host dependencies

pub mod blink;
pub mod gaze;
pub mod geometry;
pub mod state;
pub mod tick;
pub mod timer;

pub use blink::{BlinkPhase, BlinkState, BlinkStep};
pub use gaze::GazeState;
pub use geometry::GeometryModel;
pub use state::EyeState;
pub use tick::tick;
pub use timer::{TimerHandle, TimerKind, TimerQueue};
