//! Frame assembly: eye state to an ordered draw-command list
//!
//! Layer order (back to front):
//! glow rings, eye white, eyelid, iris, outline, pupil, eyelashes, glints,
//! then the tracking line and target ring while tracking.

use std::f64::consts::TAU;

use glam::DVec2;

use super::commands::{DrawCommand, Part, Rect};
use super::palette::Palette;
use crate::consts::*;
use crate::sim::EyeState;
use crate::sim::geometry::GeometryModel;

/// Optional layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOptions {
    pub eyelashes: bool,
    pub tracking_overlay: bool,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            eyelashes: true,
            tracking_overlay: true,
        }
    }
}

/// Concentric glow rings, outermost first
pub fn glow_rings(geometry: &GeometryModel, palette: &Palette, out: &mut Vec<DrawCommand>) {
    for i in (1..=GLOW_RINGS).rev() {
        let radius = geometry.eye_radius + f64::from(i) * GLOW_SPACING;
        out.push(DrawCommand::circle(
            Part::Glow(i),
            geometry.center,
            radius,
            palette.glow[usize::from(i - 1)],
        ));
    }
}

/// Bounds of the eyelid oval for a given openness (1 = open)
pub fn eyelid_bounds(geometry: &GeometryModel, openness: f64) -> Rect {
    let r = geometry.eye_radius;
    let c = geometry.center;
    let height = r * (1.0 - openness * 0.5) * 2.0;
    Rect {
        left: c.x - r,
        top: c.y - r,
        right: c.x + r,
        bottom: c.y - r + height,
    }
}

/// Lashes radiating outward from the rim at even angles
pub fn eyelashes(geometry: &GeometryModel, palette: &Palette, out: &mut Vec<DrawCommand>) {
    for i in 0..EYELASH_COUNT {
        let angle = f64::from(i) / f64::from(EYELASH_COUNT) * TAU;
        let dir = DVec2::new(angle.cos(), angle.sin());
        let start = geometry.center + dir * geometry.eye_radius;
        let end = start + dir * EYELASH_LENGTH;
        out.push(DrawCommand::line(Part::Eyelash, start, end, palette.eyelash));
    }
}

/// Specular highlights on the pupil, large then small
pub fn glints(pupil: DVec2, pupil_radius: f64, palette: &Palette, out: &mut Vec<DrawCommand>) {
    out.push(DrawCommand::circle(
        Part::Glint,
        pupil + DVec2::new(-0.3, -0.3) * pupil_radius,
        pupil_radius * 0.4,
        palette.glint,
    ));
    out.push(DrawCommand::circle(
        Part::Glint,
        pupil + DVec2::new(0.2, -0.2) * pupil_radius,
        pupil_radius * 0.2,
        palette.glint,
    ));
}

/// Build the full command list for the current state
pub fn build_frame(state: &EyeState, palette: &Palette, options: FrameOptions) -> Vec<DrawCommand> {
    let geometry = &state.geometry;
    let gaze = &state.gaze;
    let mut out = Vec::with_capacity(
        usize::from(GLOW_RINGS) + 8 + if options.eyelashes { EYELASH_COUNT as usize } else { 0 },
    );

    glow_rings(geometry, palette, &mut out);

    out.push(DrawCommand::circle(
        Part::EyeWhite,
        geometry.center,
        geometry.eye_radius,
        palette.eye_white,
    ));

    out.push(DrawCommand::oval(
        Part::Eyelid,
        eyelid_bounds(geometry, state.blink.eyelid_openness()),
        palette.eyelid,
    ));

    let iris = gaze.iris_center(geometry);
    out.push(DrawCommand::circle(Part::Iris, iris, geometry.iris_radius, palette.iris));

    out.push(DrawCommand::circle(
        Part::Outline,
        geometry.center,
        geometry.eye_radius,
        palette.outline,
    ));

    let pupil = gaze.pupil_center(geometry);
    out.push(DrawCommand::circle(Part::Pupil, pupil, geometry.pupil_radius, palette.pupil));

    if options.eyelashes {
        eyelashes(geometry, palette, &mut out);
    }

    glints(pupil, geometry.pupil_radius, palette, &mut out);

    if gaze.is_tracking() && options.tracking_overlay {
        let target = gaze.target();
        out.push(DrawCommand::line(Part::TrackingLine, pupil, target, palette.tracking_line));
        out.push(DrawCommand::circle(
            Part::TargetRing,
            target,
            TARGET_RING_RADIUS,
            palette.target_ring,
        ));
    }

    out
}
