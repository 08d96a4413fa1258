use crate::{
    animation::ease::Ease,
    foundation::constants::{BLACK, DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH},
    foundation::core::{Affine, Canvas, Fps, Rgb},
    foundation::error::{AnimaticError, AnimaticResult},
};

/// Scene-wide settings threaded into the scheduler at construction.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Output frame rate.
    pub fps: Fps,
    /// Output resolution in pixels.
    pub canvas: Canvas,
    /// Visible world width.
    pub frame_width: f64,
    /// Visible world height.
    pub frame_height: f64,
    /// Easing used by batches that do not name one.
    pub default_ease: Ease,
    /// Background color.
    pub background: Rgb,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            canvas: Canvas::default(),
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
            default_ease: Ease::Linear,
            background: BLACK,
        }
    }
}

impl SceneConfig {
    /// Set the frame rate.
    pub fn with_fps(mut self, fps: Fps) -> Self {
        self.fps = fps;
        self
    }

    /// Set the output resolution.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Set the default easing.
    pub fn with_default_ease(mut self, ease: Ease) -> Self {
        self.default_ease = ease;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Validate static invariants.
    pub fn validate(&self) -> AnimaticResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(AnimaticError::invalid_parameter(
                "canvas width and height must be > 0",
            ));
        }
        for (what, v) in [
            ("frame_width", self.frame_width),
            ("frame_height", self.frame_height),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(AnimaticError::invalid_parameter(format!(
                    "{what} must be > 0, got {v}"
                )));
            }
        }
        let Rgb { r, g, b } = self.background;
        if ![r, g, b].iter().all(|c| (0.0..=1.0).contains(c)) {
            return Err(AnimaticError::invalid_parameter(format!(
                "background channels must lie in [0, 1], got ({r}, {g}, {b})"
            )));
        }
        Ok(())
    }

    /// Pixels per world unit, fitting the visible frame inside the canvas.
    pub fn pixels_per_unit(&self) -> f64 {
        let sx = f64::from(self.canvas.width) / self.frame_width;
        let sy = f64::from(self.canvas.height) / self.frame_height;
        sx.min(sy)
    }

    /// World-to-pixel transform: world origin at the canvas center, world `y` up.
    pub fn world_to_pixel(&self) -> Affine {
        let ppu = self.pixels_per_unit();
        Affine::translate((
            f64::from(self.canvas.width) / 2.0,
            f64::from(self.canvas.height) / 2.0,
        )) * Affine::scale_non_uniform(ppu, -ppu)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/config.rs"]
mod tests;
