//! Style descriptors for every part of the eye

use super::commands::{StrokeCap, Style};
use crate::consts::GLOW_RINGS;

/// Colors for eye parts (ARGB)
pub mod colors {
    pub const EYE_WHITE: u32 = 0xFFFF_FFFF;
    pub const IRIS: u32 = 0xFF4A_148C; // Deep purple
    pub const PUPIL: u32 = 0xFF00_0000;
    pub const OUTLINE: u32 = 0xFF1A_237E; // Dark indigo
    pub const EYELID: u32 = 0xC831_1B92; // Very dark purple, alpha 200
    pub const EYELASH: u32 = 0xFF00_0000;
    pub const GLOW: u32 = 0xFF7C_4DFF;
    pub const GLINT: u32 = 0xFFFF_FFFF;
    pub const TRACKING: u32 = 0xFFFF_0000;
}

/// Alpha of glow ring `i` (1 = innermost)
pub fn glow_alpha(i: u8) -> u8 {
    (100 - i32::from(i) * 15).max(10) as u8
}

/// Styles built once and shared by every frame
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub eye_white: Style,
    pub iris: Style,
    pub pupil: Style,
    pub outline: Style,
    pub eyelid: Style,
    pub eyelash: Style,
    /// Indexed by ring number - 1
    pub glow: [Style; GLOW_RINGS as usize],
    pub glint: Style,
    pub tracking_line: Style,
    pub target_ring: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self::with_iris_color(colors::IRIS)
    }
}

impl Palette {
    pub fn with_iris_color(iris: u32) -> Self {
        let glow = Style::stroke(colors::GLOW, 2.0);
        Self {
            eye_white: Style::fill(colors::EYE_WHITE),
            iris: Style::fill(iris),
            pupil: Style::fill(colors::PUPIL),
            outline: Style::stroke(colors::OUTLINE, 5.0),
            eyelid: Style::fill(colors::EYELID),
            eyelash: Style::stroke(colors::EYELASH, 3.0).with_cap(StrokeCap::Round),
            glow: std::array::from_fn(|i| glow.with_alpha(glow_alpha(i as u8 + 1))),
            glint: Style::fill(colors::GLINT),
            tracking_line: Style::stroke(colors::TRACKING, 3.0)
                .with_dash(10.0, 10.0)
                .with_alpha(150),
            target_ring: Style::stroke(colors::TRACKING, 2.0),
        }
    }

    /// Copy of this palette with a new iris color
    pub fn recolor_iris(&self, iris: u32) -> Self {
        Self {
            iris: Style::fill(iris),
            ..self.clone()
        }
    }
}
