//! Draw-command generation
//!
//! The engine never touches pixels: each frame is a list of shapes with
//! immutable styles that the host paints in order.

pub mod commands;
pub mod frame;
pub mod palette;

pub use commands::{Argb, DrawCommand, Paint, Part, Rect, Shape, StrokeCap, Style};
pub use frame::{FrameOptions, build_frame};
pub use palette::Palette;
