use crate::{
    animation::anim::{Animation, AnimationPhase, Targets, alpha_for},
    foundation::error::{AnimaticError, AnimaticResult},
    scene::registry::SceneRegistry,
};

/// Several animations on distinct objects, scheduled as one unit.
///
/// Every member is evaluated at the same alpha (clamped per member where the member requires
/// it). Members may not share a target.
#[derive(Debug, Default)]
pub struct AnimationGroup {
    members: Vec<Box<dyn Animation>>,
}

impl AnimationGroup {
    /// Empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member, rejecting it when it writes an object another member already writes.
    pub fn with(mut self, anim: impl Into<Box<dyn Animation>>) -> AnimaticResult<Self> {
        let anim = anim.into();
        let taken = self.targets();
        if let Some(id) = anim.targets().into_iter().find(|id| taken.contains(id)) {
            return Err(AnimaticError::TargetConflict(id));
        }
        self.members.push(anim);
        Ok(self)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Return `true` when the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Animation for AnimationGroup {
    fn name(&self) -> &str {
        "group"
    }

    fn targets(&self) -> Targets {
        self.members.iter().flat_map(|m| m.targets()).collect()
    }

    fn arm(&mut self, scene: &SceneRegistry) -> AnimaticResult<()> {
        self.members.iter_mut().try_for_each(|m| m.arm(scene))
    }

    fn interpolate(&mut self, alpha: f64, scene: &mut SceneRegistry) -> AnimaticResult<()> {
        // Arm everything before writing anything so a mismatch leaves the scene untouched.
        self.arm(scene)?;
        for m in &mut self.members {
            let a = alpha_for(m.as_ref(), alpha);
            m.interpolate(a, scene)?;
        }
        Ok(())
    }

    fn phase(&self) -> AnimationPhase {
        let mut phases = self.members.iter().map(|m| m.phase());
        let Some(first) = phases.next() else {
            return AnimationPhase::Done;
        };
        phases.fold(first, |acc, p| if acc == p { acc } else { AnimationPhase::Running })
    }

    fn progress(&self) -> f64 {
        self.members
            .iter()
            .map(|m| m.progress())
            .fold(None, |acc: Option<f64>, p| Some(acc.map_or(p, |a| a.min(p))))
            .unwrap_or(1.0)
    }
}

impl From<AnimationGroup> for Box<dyn Animation> {
    fn from(group: AnimationGroup) -> Self {
        Box::new(group)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/group.rs"]
mod tests;
