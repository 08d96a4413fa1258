use crate::{
    animation::anim::{Animation, Targets},
    animation::ease::Ease,
    foundation::error::{AnimaticError, AnimaticResult},
    scene::object::ObjectId,
};

/// One scheduled animation plus its optional easing override.
#[derive(Debug)]
pub(crate) struct BatchItem {
    pub(crate) animation: Box<dyn Animation>,
    pub(crate) ease: Option<Ease>,
}

/// Animations that start together and share one duration.
///
/// An object may be the target of at most one animation per batch; adding a second one fails
/// with [`AnimaticError::TargetConflict`] before any frame is produced.
#[derive(Debug)]
pub struct PlaybackBatch {
    pub(crate) items: Vec<BatchItem>,
    duration_secs: f64,
    ease: Option<Ease>,
}

impl PlaybackBatch {
    /// Empty batch lasting `duration_secs` (`>= 0`).
    pub fn new(duration_secs: f64) -> AnimaticResult<Self> {
        if !(duration_secs.is_finite() && duration_secs >= 0.0) {
            return Err(AnimaticError::invalid_parameter(format!(
                "batch duration must be a finite number of seconds >= 0, got {duration_secs}"
            )));
        }
        Ok(Self {
            items: Vec::new(),
            duration_secs,
            ease: None,
        })
    }

    /// Easing shared by every animation without its own override.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    /// Add an animation using the batch easing.
    pub fn with(self, anim: impl Into<Box<dyn Animation>>) -> AnimaticResult<Self> {
        self.push(anim.into(), None)
    }

    /// Add an animation with its own easing.
    pub fn with_eased(
        self,
        anim: impl Into<Box<dyn Animation>>,
        ease: Ease,
    ) -> AnimaticResult<Self> {
        self.push(anim.into(), Some(ease))
    }

    fn push(mut self, animation: Box<dyn Animation>, ease: Option<Ease>) -> AnimaticResult<Self> {
        let taken = self.targets();
        let incoming = animation.targets();
        for (i, id) in incoming.iter().enumerate() {
            if taken.contains(id) || incoming[..i].contains(id) {
                return Err(AnimaticError::TargetConflict(*id));
            }
        }
        self.items.push(BatchItem { animation, ease });
        Ok(self)
    }

    /// Shared duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Batch-level easing, if set.
    pub fn batch_ease(&self) -> Option<Ease> {
        self.ease
    }

    /// Every object written by the batch.
    pub fn targets(&self) -> Targets {
        self.items
            .iter()
            .flat_map(|item| item.animation.targets())
            .collect()
    }

    /// Return `true` when `id` is written by the batch.
    pub fn targets_object(&self, id: ObjectId) -> bool {
        self.targets().contains(&id)
    }

    /// Number of animations.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Return `true` for a bare wait.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/batch.rs"]
mod tests;
