//! Named directions, colors and output presets.
//!
//! World space has its origin at the canvas center with `y` pointing up; one world unit maps to
//! [`SceneConfig::pixels_per_unit`](crate::SceneConfig::pixels_per_unit) pixels.

use crate::foundation::core::{Canvas, Fps, Rgb, Vec2};

/// Unit vector pointing up.
pub const UP: Vec2 = Vec2::new(0.0, 1.0);
/// Unit vector pointing down.
pub const DOWN: Vec2 = Vec2::new(0.0, -1.0);
/// Unit vector pointing left.
pub const LEFT: Vec2 = Vec2::new(-1.0, 0.0);
/// Unit vector pointing right.
pub const RIGHT: Vec2 = Vec2::new(1.0, 0.0);
/// World origin.
pub const ORIGIN: Vec2 = Vec2::new(0.0, 0.0);

/// White.
pub const WHITE: Rgb = Rgb::from_unit(1.0, 1.0, 1.0);
/// Black.
pub const BLACK: Rgb = Rgb::from_unit(0.0, 0.0, 0.0);
/// Red.
pub const RED: Rgb = Rgb::from_unit(1.0, 0.0, 0.0);
/// Green.
pub const GREEN: Rgb = Rgb::from_unit(0.0, 1.0, 0.0);
/// Blue.
pub const BLUE: Rgb = Rgb::from_unit(0.0, 0.0, 1.0);
/// Yellow.
pub const YELLOW: Rgb = Rgb::from_unit(1.0, 1.0, 0.0);
/// Orange.
pub const ORANGE: Rgb = Rgb::from_unit(1.0, 0.5, 0.0);
/// Purple.
pub const PURPLE: Rgb = Rgb::from_unit(0.5, 0.0, 1.0);
/// Pink.
pub const PINK: Rgb = Rgb::from_unit(1.0, 0.0, 1.0);
/// Cyan.
pub const CYAN: Rgb = Rgb::from_unit(0.0, 1.0, 1.0);

/// 1280x720.
pub const RESOLUTION_720P: Canvas = Canvas {
    width: 1280,
    height: 720,
};
/// 1920x1080.
pub const RESOLUTION_1080P: Canvas = Canvas {
    width: 1920,
    height: 1080,
};
/// 3840x2160.
pub const RESOLUTION_4K: Canvas = Canvas {
    width: 3840,
    height: 2160,
};

/// Default frame rate (60 fps).
pub const DEFAULT_FPS: Fps = Fps { num: 60, den: 1 };

/// Visible world width at the default zoom.
pub const DEFAULT_FRAME_WIDTH: f64 = 8.0;
/// Visible world height at the default zoom.
pub const DEFAULT_FRAME_HEIGHT: f64 = 8.0;
