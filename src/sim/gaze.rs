//! Gaze tracking: target point to bounded iris/pupil offsets
//!
//! The iris travels toward the target inside the eye, and the pupil travels
//! a shorter distance inside the iris. Offsets are only ever computed here,
//! so the travel bounds hold for every finite target:
//! - |iris_offset| <= eye_radius - iris_radius
//! - |pupil_offset| <= iris_radius - pupil_radius

use glam::DVec2;
use serde::Serialize;

use super::geometry::GeometryModel;
use crate::consts::{GAZE_DECAY, IRIS_DAMPING, PUPIL_DAMPING, SETTLE_EPSILON};

/// Scale that clamps a displacement of length `dist` to `max_offset`.
/// Distances under 1 are floored to keep the division finite.
#[inline]
fn clamp_scale(max_offset: f64, dist: f64) -> f64 {
    (max_offset / dist.max(1.0)).min(1.0)
}

/// Current gaze of the eye
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GazeState {
    iris_offset: DVec2,
    pupil_offset: DVec2,
    tracking: bool,
    target: DVec2,
}

impl GazeState {
    /// Look at `target` (widget space)
    pub fn track(&mut self, target: DVec2, geometry: &GeometryModel) {
        let d = target - geometry.center;
        let iris_scale = clamp_scale(geometry.max_iris_offset(), d.length());
        self.iris_offset = d * iris_scale * IRIS_DAMPING;

        let d2 = target - (geometry.center + self.iris_offset);
        let pupil_scale = clamp_scale(geometry.max_pupil_offset(), d2.length());
        self.pupil_offset = d2 * pupil_scale * PUPIL_DAMPING;

        self.tracking = true;
        self.target = target;
    }

    /// Bring the offsets back inside the travel limits after `geometry` changed.
    ///
    /// A tracking eye looks at its target again; a resting one has each offset
    /// shortened to its new limit, keeping direction.
    pub fn refit(&mut self, geometry: &GeometryModel) {
        if self.tracking {
            self.track(self.target, geometry);
            return;
        }
        self.iris_offset = self.iris_offset.clamp_length_max(geometry.max_iris_offset().max(0.0));
        self.pupil_offset = self
            .pupil_offset
            .clamp_length_max(geometry.max_pupil_offset().max(0.0));
    }

    /// Stop following the target. Offsets ease back through [`decay`](Self::decay).
    pub fn stop_tracking(&mut self) {
        self.tracking = false;
    }

    /// One ease-back step toward center.
    ///
    /// Returns true once both offsets are exactly zero.
    pub fn decay(&mut self) -> bool {
        if self.is_settled() {
            return true;
        }

        self.iris_offset *= GAZE_DECAY;
        self.pupil_offset *= GAZE_DECAY;

        if self.iris_offset.length() < SETTLE_EPSILON && self.pupil_offset.length() < SETTLE_EPSILON
        {
            self.iris_offset = DVec2::ZERO;
            self.pupil_offset = DVec2::ZERO;
            log::debug!("Gaze settled at center");
            return true;
        }
        false
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.iris_offset == DVec2::ZERO && self.pupil_offset == DVec2::ZERO
    }

    /// Iris displacement from the eye center
    #[inline]
    pub fn iris_offset(&self) -> DVec2 {
        self.iris_offset
    }

    /// Pupil displacement from the iris center
    #[inline]
    pub fn pupil_offset(&self) -> DVec2 {
        self.pupil_offset
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Last tracked target (kept after tracking stops)
    #[inline]
    pub fn target(&self) -> DVec2 {
        self.target
    }

    pub fn iris_center(&self, geometry: &GeometryModel) -> DVec2 {
        geometry.center + self.iris_offset
    }

    pub fn pupil_center(&self, geometry: &GeometryModel) -> DVec2 {
        self.iris_center(geometry) + self.pupil_offset
    }
}
