//! Concrete single-object animations.
//!
//! Every kind except [`AnimationKind::Transform`] derives its final state the same way: clone the
//! object as it is at arming time, apply the kind's instantaneous mutators to the clone, and
//! snapshot the result.

use crate::{
    animation::anim::Tween,
    animation::builder::Command,
    foundation::core::{Rgb, Vec2, ensure_finite, ensure_finite_vec, ensure_positive},
    foundation::error::AnimaticResult,
    scene::object::{DrawableObject, ObjectId},
    scene::props::{PropertyKey, PropertyValue, StateSnapshot},
};

/// What a [`Tween`] does to its target.
#[derive(Clone, Debug)]
pub enum AnimationKind {
    /// Move the center to an absolute point.
    Move(Vec2),
    /// Translate by a delta.
    Shift(Vec2),
    /// Multiply the scale by a factor (`> 0`).
    Scale(f64),
    /// Rotate by an angle in radians.
    Rotate(f64),
    /// Opacity from 0 to 1.
    FadeIn,
    /// Opacity from its current value to 0.
    FadeOut,
    /// Color from its current value to the given one.
    ColorChange(Rgb),
    /// Opacity from its current value to the given one.
    OpacityChange(f64),
    /// Morph every animatable property into those of another object of the same shape kind.
    Transform(Box<DrawableObject>),
    /// Replay a recorded call-log (the materialized animate builder).
    Replay(Vec<Command>),
}

impl AnimationKind {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Move(_) => "move",
            Self::Shift(_) => "shift",
            Self::Scale(_) => "scale",
            Self::Rotate(_) => "rotate",
            Self::FadeIn => "fade_in",
            Self::FadeOut => "fade_out",
            Self::ColorChange(_) => "color_change",
            Self::OpacityChange(_) => "opacity_change",
            Self::Transform(_) => "transform",
            Self::Replay(_) => "animate",
        }
    }

    /// Opacity and color kinds have no meaning outside `[0, 1]`.
    pub fn requires_unit_alpha(&self) -> bool {
        matches!(
            self,
            Self::FadeIn | Self::FadeOut | Self::ColorChange(_) | Self::OpacityChange(_)
        )
    }

    /// Snapshot the state playback starts from.
    pub fn capture_initial_state(&self, obj: &DrawableObject) -> StateSnapshot {
        let mut state = obj.snapshot();
        if let Self::FadeIn = self {
            state.insert(PropertyKey::Opacity, PropertyValue::Scalar(0.0));
        }
        state
    }

    /// Snapshot the state playback ends at.
    pub fn capture_final_state(&self, obj: &DrawableObject) -> AnimaticResult<StateSnapshot> {
        if let Self::Transform(into) = self {
            return Ok(into.snapshot());
        }
        let mut copy = obj.clone();
        self.apply(&mut copy)?;
        Ok(copy.snapshot())
    }

    fn apply(&self, obj: &mut DrawableObject) -> AnimaticResult<()> {
        match self {
            Self::Move(p) => Command::MoveTo(*p).apply(obj),
            Self::Shift(d) => Command::Shift(*d).apply(obj),
            Self::Scale(f) => Command::Scale(*f).apply(obj),
            Self::Rotate(a) => Command::Rotate(*a).apply(obj),
            Self::FadeIn => Command::FadeIn.apply(obj),
            Self::FadeOut => Command::FadeOut.apply(obj),
            Self::ColorChange(c) => Command::SetColor(*c).apply(obj),
            Self::OpacityChange(o) => Command::SetOpacity(*o).apply(obj),
            Self::Transform(into) => obj.apply_snapshot(&into.snapshot()),
            Self::Replay(log) => log.iter().try_for_each(|cmd| cmd.apply(obj)),
        }
    }
}

impl Tween {
    /// Move `target` to `point`.
    pub fn move_to(target: ObjectId, point: Vec2) -> AnimaticResult<Self> {
        let point = ensure_finite_vec("move_to target", point)?;
        Ok(Self::new(target, AnimationKind::Move(point)))
    }

    /// Translate `target` by `delta`.
    pub fn shift(target: ObjectId, delta: Vec2) -> AnimaticResult<Self> {
        let delta = ensure_finite_vec("shift delta", delta)?;
        Ok(Self::new(target, AnimationKind::Shift(delta)))
    }

    /// Multiply the scale of `target` by `factor`.
    pub fn scale(target: ObjectId, factor: f64) -> AnimaticResult<Self> {
        let factor = ensure_positive("scale factor", factor)?;
        Ok(Self::new(target, AnimationKind::Scale(factor)))
    }

    /// Rotate `target` by `angle` radians.
    pub fn rotate(target: ObjectId, angle: f64) -> AnimaticResult<Self> {
        let angle = ensure_finite("rotation angle", angle)?;
        Ok(Self::new(target, AnimationKind::Rotate(angle)))
    }

    /// Fade `target` in from fully transparent.
    pub fn fade_in(target: ObjectId) -> Self {
        Self::new(target, AnimationKind::FadeIn)
    }

    /// Fade `target` out to fully transparent.
    pub fn fade_out(target: ObjectId) -> Self {
        Self::new(target, AnimationKind::FadeOut)
    }

    /// Change the color of `target`.
    pub fn color_change(target: ObjectId, color: Rgb) -> AnimaticResult<Self> {
        let color = Rgb::new(color.r, color.g, color.b)?;
        Ok(Self::new(target, AnimationKind::ColorChange(color)))
    }

    /// Change the opacity of `target` (clamped into `[0, 1]`).
    pub fn opacity_change(target: ObjectId, opacity: f64) -> AnimaticResult<Self> {
        let opacity = ensure_finite("opacity", opacity)?.clamp(0.0, 1.0);
        Ok(Self::new(target, AnimationKind::OpacityChange(opacity)))
    }

    /// Morph `target` into the properties of `into`.
    ///
    /// `into` is only used as a reference state and need not be registered. Differing shape kinds
    /// surface as a property mismatch when the tween is armed.
    pub fn transform(target: ObjectId, into: DrawableObject) -> Self {
        Self::new(target, AnimationKind::Transform(Box::new(into)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/kinds.rs"]
mod tests;
