use std::fmt;

use smallvec::{SmallVec, smallvec};

use crate::{
    animation::kinds::AnimationKind,
    foundation::core::{Rgb, Vec2},
    foundation::error::AnimaticResult,
    scene::object::ObjectId,
    scene::props::StateSnapshot,
    scene::registry::SceneRegistry,
};

/// Interpolation contract for animatable value types.
///
/// Implementations use the `a * (1 - t) + b * t` form so both endpoints are reproduced exactly,
/// with no drift from accumulated steps.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` (usually in `[0, 1]`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a * (1.0 - t) + b * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(
            <f64 as Lerp>::lerp(&a.x, &b.x, t),
            <f64 as Lerp>::lerp(&a.y, &b.y, t),
        )
    }
}

// Raw per-channel lerp; the object model clamps channels on write.
impl Lerp for Rgb {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: <f64 as Lerp>::lerp(&a.r, &b.r, t),
            g: <f64 as Lerp>::lerp(&a.g, &b.g, t),
            b: <f64 as Lerp>::lerp(&a.b, &b.b, t),
        }
    }
}

/// Lifecycle of one animation instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AnimationPhase {
    /// Constructed; nothing captured yet.
    Unstarted,
    /// Initial and final states captured; not yet advanced past `alpha = 0`.
    Armed,
    /// Evaluated at some alpha other than the endpoints.
    Running,
    /// Evaluated at `alpha = 1`; the final state is applied exactly.
    Done,
}

/// Targets written by one animation. Most animations touch a single object.
pub type Targets = SmallVec<[ObjectId; 4]>;

/// Protocol every schedulable animation implements.
///
/// The scheduler arms an animation the first time it advances it, then calls
/// [`Animation::interpolate`] once per frame with the eased alpha. `interpolate` is the only
/// operation allowed to mutate target objects during playback, and it must derive every value
/// from the captured snapshots alone so that repeated calls with the same alpha are idempotent.
pub trait Animation: fmt::Debug {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Objects this animation writes.
    fn targets(&self) -> Targets;

    /// Capture initial and final states from the registry as it is right now.
    ///
    /// Calling this on an already-armed animation is a no-op: the initial state is captured at
    /// most once.
    fn arm(&mut self, scene: &SceneRegistry) -> AnimaticResult<()>;

    /// Write the state at `alpha` into the targets, arming first when needed.
    fn interpolate(&mut self, alpha: f64, scene: &mut SceneRegistry) -> AnimaticResult<()>;

    /// Current lifecycle phase.
    fn phase(&self) -> AnimationPhase;

    /// Highest alpha (clamped into `[0, 1]`) this animation has been evaluated at.
    fn progress(&self) -> f64;

    /// Return `true` when alpha must be clamped into `[0, 1]` before `interpolate`.
    ///
    /// Overshooting easings may otherwise drive interpolation past either endpoint.
    fn requires_unit_alpha(&self) -> bool {
        false
    }
}

/// Alpha as `anim` should see it, honoring [`Animation::requires_unit_alpha`].
pub fn alpha_for(anim: &dyn Animation, alpha: f64) -> f64 {
    if anim.requires_unit_alpha() {
        alpha.clamp(0.0, 1.0)
    } else {
        alpha
    }
}

/// Single-object animation: one [`AnimationKind`] bound to one target.
#[derive(Clone, Debug)]
pub struct Tween {
    target: ObjectId,
    kind: AnimationKind,
    phase: AnimationPhase,
    initial: Option<StateSnapshot>,
    final_state: Option<StateSnapshot>,
    progress: f64,
}

impl Tween {
    /// Bind `kind` to `target`. Nothing is captured until the animation is armed.
    pub fn new(target: ObjectId, kind: AnimationKind) -> Self {
        Self {
            target,
            kind,
            phase: AnimationPhase::Unstarted,
            initial: None,
            final_state: None,
            progress: 0.0,
        }
    }

    /// Target object.
    pub fn target(&self) -> ObjectId {
        self.target
    }

    /// What this tween does.
    pub fn kind(&self) -> &AnimationKind {
        &self.kind
    }

    /// Initial state, once armed.
    pub fn initial_state(&self) -> Option<&StateSnapshot> {
        self.initial.as_ref()
    }

    /// Final state, once armed.
    pub fn final_state(&self) -> Option<&StateSnapshot> {
        self.final_state.as_ref()
    }
}

impl Animation for Tween {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn targets(&self) -> Targets {
        smallvec![self.target]
    }

    fn arm(&mut self, scene: &SceneRegistry) -> AnimaticResult<()> {
        if self.phase != AnimationPhase::Unstarted {
            return Ok(());
        }
        let obj = scene.get(self.target)?;
        let initial = self.kind.capture_initial_state(obj);
        let final_state = self.kind.capture_final_state(obj)?;
        initial.ensure_same_keys(&final_state)?;
        tracing::debug!(target_id = %self.target, kind = self.kind.name(), "armed");
        self.initial = Some(initial);
        self.final_state = Some(final_state);
        self.phase = AnimationPhase::Armed;
        Ok(())
    }

    fn interpolate(&mut self, alpha: f64, scene: &mut SceneRegistry) -> AnimaticResult<()> {
        self.arm(scene)?;
        let (Some(initial), Some(final_state)) = (&self.initial, &self.final_state) else {
            return Ok(());
        };
        let state = if alpha == 1.0 {
            final_state.clone()
        } else {
            StateSnapshot::lerp(initial, final_state, alpha)?
        };
        scene.get_mut(self.target)?.apply_snapshot(&state)?;

        self.progress = self.progress.max(alpha.clamp(0.0, 1.0));
        self.phase = if alpha == 1.0 {
            AnimationPhase::Done
        } else if alpha == 0.0 && self.phase == AnimationPhase::Armed {
            AnimationPhase::Armed
        } else {
            AnimationPhase::Running
        };
        Ok(())
    }

    fn phase(&self) -> AnimationPhase {
        self.phase
    }

    fn progress(&self) -> f64 {
        self.progress
    }

    fn requires_unit_alpha(&self) -> bool {
        self.kind.requires_unit_alpha()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
