//! Draw command types consumed by a host surface

use glam::DVec2;
use serde::Serialize;

/// Packed 0xAARRGGBB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Argb(pub u32);

impl Argb {
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Same color with a different alpha
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrokeCap {
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Paint {
    Fill,
    Stroke {
        width: f64,
        cap: StrokeCap,
        /// On/off dash lengths, solid when unset
        dash: Option<[f64; 2]>,
    },
}

/// Immutable style descriptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Style {
    pub color: Argb,
    pub paint: Paint,
}

impl Style {
    pub const fn fill(color: u32) -> Self {
        Self {
            color: Argb(color),
            paint: Paint::Fill,
        }
    }

    pub const fn stroke(color: u32, width: f64) -> Self {
        Self {
            color: Argb(color),
            paint: Paint::Stroke {
                width,
                cap: StrokeCap::Butt,
                dash: None,
            },
        }
    }

    pub const fn with_cap(self, cap: StrokeCap) -> Self {
        match self.paint {
            Paint::Stroke { width, dash, .. } => Self {
                paint: Paint::Stroke { width, cap, dash },
                ..self
            },
            Paint::Fill => self,
        }
    }

    pub const fn with_dash(self, on: f64, off: f64) -> Self {
        match self.paint {
            Paint::Stroke { width, cap, .. } => Self {
                paint: Paint::Stroke {
                    width,
                    cap,
                    dash: Some([on, off]),
                },
                ..self
            },
            Paint::Fill => self,
        }
    }

    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
            ..self
        }
    }
}

/// Axis-aligned rectangle (widget space, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Shape {
    Circle { center: DVec2, radius: f64 },
    Oval { bounds: Rect },
    Line { from: DVec2, to: DVec2 },
}

/// Which part of the eye a command draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Part {
    /// Glow ring, 1 = innermost
    Glow(u8),
    EyeWhite,
    Eyelid,
    Iris,
    Outline,
    Pupil,
    Eyelash,
    Glint,
    TrackingLine,
    TargetRing,
}

/// One paint instruction; later commands layer over earlier ones
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawCommand {
    pub part: Part,
    pub shape: Shape,
    pub style: Style,
}

impl DrawCommand {
    pub fn circle(part: Part, center: DVec2, radius: f64, style: Style) -> Self {
        Self {
            part,
            shape: Shape::Circle { center, radius },
            style,
        }
    }

    pub fn oval(part: Part, bounds: Rect, style: Style) -> Self {
        Self {
            part,
            shape: Shape::Oval { bounds },
            style,
        }
    }

    pub fn line(part: Part, from: DVec2, to: DVec2, style: Style) -> Self {
        Self {
            part,
            shape: Shape::Line { from, to },
            style,
        }
    }
}
