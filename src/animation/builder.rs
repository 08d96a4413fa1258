use crate::{
    animation::anim::{Animation, Tween},
    animation::kinds::AnimationKind,
    foundation::core::{Rgb, Vec2, ensure_finite, ensure_finite_vec, ensure_positive},
    foundation::error::AnimaticResult,
    scene::object::{DrawableObject, ObjectId},
    scene::props::StateSnapshot,
};

/// One recorded mutator call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", content = "arg", rename_all = "snake_case")]
pub enum Command {
    /// [`DrawableObject::move_to`].
    MoveTo(Vec2),
    /// [`DrawableObject::shift`].
    Shift(Vec2),
    /// [`DrawableObject::scale_by`].
    Scale(f64),
    /// [`DrawableObject::rotate_by`].
    Rotate(f64),
    /// [`DrawableObject::set_color`].
    SetColor(Rgb),
    /// [`DrawableObject::set_opacity`].
    SetOpacity(f64),
    /// [`DrawableObject::set_fill_opacity`].
    SetFillOpacity(f64),
    /// [`DrawableObject::set_stroke_opacity`].
    SetStrokeOpacity(f64),
    /// Opacity to 1.
    FadeIn,
    /// Opacity to 0.
    FadeOut,
}

impl Command {
    /// Apply the call instantaneously through the ordinary mutators.
    pub fn apply(&self, obj: &mut DrawableObject) -> AnimaticResult<()> {
        match *self {
            Self::MoveTo(p) => obj.move_to(p),
            Self::Shift(d) => obj.shift(d),
            Self::Scale(f) => obj.scale_by(f),
            Self::Rotate(a) => obj.rotate_by(a),
            Self::SetColor(c) => obj.set_color(c),
            Self::SetOpacity(o) => obj.set_opacity(o),
            Self::SetFillOpacity(o) => obj.set_fill_opacity(o),
            Self::SetStrokeOpacity(o) => obj.set_stroke_opacity(o),
            Self::FadeIn => obj.set_opacity(1.0),
            Self::FadeOut => obj.set_opacity(0.0),
        }?;
        Ok(())
    }
}

/// Deferred-call recorder returned by [`DrawableObject::animate`].
///
/// Chained calls are validated immediately but only appended to a call-log; the live object is
/// never touched. Handing the builder to a batch materializes it into a single [`Tween`] whose
/// final state is the log folded over a copy of the object taken when the tween is armed. An
/// empty log materializes to a hold.
#[derive(Clone, Debug, PartialEq)]
#[must_use = "an animate builder does nothing until it is played"]
pub struct AnimateBuilder {
    target: ObjectId,
    log: Vec<Command>,
}

impl AnimateBuilder {
    /// Empty recorder for `target`.
    pub fn new(target: ObjectId) -> Self {
        Self {
            target,
            log: Vec::new(),
        }
    }

    fn push(mut self, cmd: Command) -> Self {
        self.log.push(cmd);
        self
    }

    /// Record a move to `point`.
    pub fn move_to(self, point: Vec2) -> AnimaticResult<Self> {
        let point = ensure_finite_vec("move_to target", point)?;
        Ok(self.push(Command::MoveTo(point)))
    }

    /// Record a translation by `delta`.
    pub fn shift(self, delta: Vec2) -> AnimaticResult<Self> {
        let delta = ensure_finite_vec("shift delta", delta)?;
        Ok(self.push(Command::Shift(delta)))
    }

    /// Record a scale by `factor` (`> 0`).
    pub fn scale(self, factor: f64) -> AnimaticResult<Self> {
        let factor = ensure_positive("scale factor", factor)?;
        Ok(self.push(Command::Scale(factor)))
    }

    /// Record a rotation by `angle` radians.
    pub fn rotate(self, angle: f64) -> AnimaticResult<Self> {
        let angle = ensure_finite("rotation angle", angle)?;
        Ok(self.push(Command::Rotate(angle)))
    }

    /// Record a color change.
    pub fn set_color(self, color: Rgb) -> AnimaticResult<Self> {
        let color = Rgb::new(color.r, color.g, color.b)?;
        Ok(self.push(Command::SetColor(color)))
    }

    /// Record an opacity change.
    pub fn set_opacity(self, opacity: f64) -> AnimaticResult<Self> {
        let opacity = ensure_finite("opacity", opacity)?;
        Ok(self.push(Command::SetOpacity(opacity)))
    }

    /// Record a fill-opacity change.
    pub fn set_fill_opacity(self, opacity: f64) -> AnimaticResult<Self> {
        let opacity = ensure_finite("fill opacity", opacity)?;
        Ok(self.push(Command::SetFillOpacity(opacity)))
    }

    /// Record a stroke-opacity change.
    pub fn set_stroke_opacity(self, opacity: f64) -> AnimaticResult<Self> {
        let opacity = ensure_finite("stroke opacity", opacity)?;
        Ok(self.push(Command::SetStrokeOpacity(opacity)))
    }

    /// Record a fade to full opacity.
    pub fn fade_in(self) -> Self {
        self.push(Command::FadeIn)
    }

    /// Record a fade to zero opacity.
    pub fn fade_out(self) -> Self {
        self.push(Command::FadeOut)
    }

    /// Object this builder animates.
    pub fn target(&self) -> ObjectId {
        self.target
    }

    /// Recorded calls in order.
    pub fn commands(&self) -> &[Command] {
        &self.log
    }

    /// Return `true` when no call was recorded.
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Final state the log produces from `obj`, without touching `obj`.
    pub fn preview_final_state(&self, obj: &DrawableObject) -> AnimaticResult<StateSnapshot> {
        let mut copy = obj.clone();
        for cmd in &self.log {
            cmd.apply(&mut copy)?;
        }
        Ok(copy.snapshot())
    }

    /// Turn the log into a single tween bound to the target.
    pub fn materialize(self) -> Tween {
        Tween::new(self.target, AnimationKind::Replay(self.log))
    }
}

impl From<AnimateBuilder> for Tween {
    fn from(builder: AnimateBuilder) -> Self {
        builder.materialize()
    }
}

impl From<AnimateBuilder> for Box<dyn Animation> {
    fn from(builder: AnimateBuilder) -> Self {
        Box::new(builder.materialize())
    }
}

impl From<Tween> for Box<dyn Animation> {
    fn from(tween: Tween) -> Self {
        Box::new(tween)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/builder.rs"]
mod tests;
