use crate::foundation::error::{AnimaticError, AnimaticResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Absolute 0-based frame index across every batch a scene has played.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> AnimaticResult<Self> {
        if den == 0 {
            return Err(AnimaticError::invalid_parameter("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(AnimaticError::invalid_parameter("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Number of frame steps a batch of `secs` spans: `max(1, round(secs * fps))`.
    ///
    /// A batch emits one more frame than this (both endpoints are rendered).
    pub fn steps_for_secs(self, secs: f64) -> u64 {
        ((secs * self.as_f64()).round().max(0.0) as u64).max(1)
    }
}

impl Default for Fps {
    fn default() -> Self {
        crate::foundation::constants::DEFAULT_FPS
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        crate::foundation::constants::RESOLUTION_1080P
    }
}

/// Straight-alpha RGB color with `f64` channels clamped to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// Build a color, clamping every channel into `[0, 1]`.
    ///
    /// Non-finite channels are rejected.
    pub fn new(r: f64, g: f64, b: f64) -> AnimaticResult<Self> {
        for (name, v) in [("r", r), ("g", g), ("b", b)] {
            if !v.is_finite() {
                return Err(AnimaticError::invalid_parameter(format!(
                    "color channel {name} must be finite, got {v}"
                )));
            }
        }
        Ok(Self::clamped(r, g, b))
    }

    pub(crate) const fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub(crate) fn clamped(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Quantize to 8-bit channels for backends that want integer colors.
    pub fn to_rgb8(self) -> [u8; 3] {
        fn q(c: f64) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [q(self.r), q(self.g), q(self.b)]
    }
}

pub(crate) fn ensure_finite(what: &str, v: f64) -> AnimaticResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AnimaticError::invalid_parameter(format!(
            "{what} must be finite, got {v}"
        )))
    }
}

pub(crate) fn ensure_finite_vec(what: &str, v: Vec2) -> AnimaticResult<Vec2> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AnimaticError::invalid_parameter(format!(
            "{what} must be finite, got ({}, {})",
            v.x, v.y
        )))
    }
}

pub(crate) fn ensure_positive(what: &str, v: f64) -> AnimaticResult<f64> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(AnimaticError::invalid_parameter(format!(
            "{what} must be > 0, got {v}"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
