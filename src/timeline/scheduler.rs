use crate::{
    animation::anim::alpha_for,
    animation::ease::Ease,
    encode::sink::{FrameSink, FrameSnapshot, InMemorySink, SinkConfig},
    foundation::core::{Fps, FrameIndex},
    foundation::error::{AnimaticError, AnimaticResult},
    scene::object::{DrawableObject, ObjectId},
    scene::registry::{ObjectSnapshot, SceneRegistry},
    timeline::batch::PlaybackBatch,
    timeline::config::SceneConfig,
};

/// Frame-stepping engine for one batch at a time.
///
/// Stateless apart from its settings: everything a run mutates lives in the registry passed in.
#[derive(Clone, Copy, Debug)]
pub struct Timeline {
    fps: Fps,
    default_ease: Ease,
}

impl Timeline {
    /// Timeline stepping at `fps`, easing with `default_ease` when a batch names none.
    pub fn new(fps: Fps, default_ease: Ease) -> Self {
        Self { fps, default_ease }
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Number of frames a batch of `duration_secs` emits (both endpoints included).
    pub fn frames_for(&self, duration_secs: f64) -> u64 {
        self.fps.steps_for_secs(duration_secs) + 1
    }

    /// Run `batch` to completion against `registry` and return one snapshot per frame.
    ///
    /// With `n = max(1, round(duration * fps))` steps, frame `i` in `0..=n` evaluates every
    /// animation at `ease(i / n)`, so the last frame lands exactly on `alpha = 1`. Every target is
    /// checked and every animation armed before anything is written. On failure the registry is
    /// restored to its state before the call and no snapshot is returned.
    pub fn run(
        &self,
        mut batch: PlaybackBatch,
        registry: &mut SceneRegistry,
    ) -> AnimaticResult<Vec<Vec<ObjectSnapshot>>> {
        if let Some(id) = batch
            .targets()
            .into_iter()
            .find(|id| !registry.contains(*id))
        {
            return Err(AnimaticError::UnregisteredObject(id));
        }

        for item in &mut batch.items {
            item.animation.arm(registry)?;
        }

        let checkpoint = registry.clone();
        match self.step_all(&mut batch, registry) {
            Ok(frames) => Ok(frames),
            Err(e) => {
                *registry = checkpoint;
                Err(e)
            }
        }
    }

    fn step_all(
        &self,
        batch: &mut PlaybackBatch,
        registry: &mut SceneRegistry,
    ) -> AnimaticResult<Vec<Vec<ObjectSnapshot>>> {
        let steps = self.fps.steps_for_secs(batch.duration_secs());
        let batch_ease = batch.batch_ease().unwrap_or(self.default_ease);
        let mut frames = Vec::with_capacity(steps as usize + 1);

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            for item in &mut batch.items {
                let alpha = item.ease.unwrap_or(batch_ease).apply(t);
                let alpha = alpha_for(item.animation.as_ref(), alpha);
                item.animation.interpolate(alpha, registry)?;
            }
            tracing::trace!(step = i, t, "frame evaluated");
            frames.push(registry.snapshot());
        }
        Ok(frames)
    }
}

/// Per-call playback statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayStats {
    /// First frame index the call emitted.
    pub first_frame: FrameIndex,
    /// Frames emitted (steps + 1).
    pub frames: u64,
}

/// Scene façade: a registry, a timeline, and the sink frames are flushed to.
///
/// `play` and `wait` are synchronous and strictly serialized: each runs its batch to completion
/// before returning, so the next batch arms against the state the previous one left behind.
/// Because playback borrows the scene mutably, objects cannot be added or removed mid-batch.
pub struct Scene<S: FrameSink = InMemorySink> {
    config: SceneConfig,
    timeline: Timeline,
    registry: SceneRegistry,
    sink: S,
    began: bool,
    next_frame: FrameIndex,
    elapsed_steps: u64,
}

impl Scene<InMemorySink> {
    /// Scene collecting frames in memory.
    pub fn in_memory(config: SceneConfig) -> AnimaticResult<Self> {
        Self::new(config, InMemorySink::new())
    }
}

impl<S: FrameSink> Scene<S> {
    /// Validate `config` and create an empty scene writing to `sink`.
    pub fn new(config: SceneConfig, sink: S) -> AnimaticResult<Self> {
        config.validate()?;
        Ok(Self {
            timeline: Timeline::new(config.fps, config.default_ease),
            config,
            registry: SceneRegistry::new(),
            sink,
            began: false,
            next_frame: FrameIndex(0),
            elapsed_steps: 0,
        })
    }

    /// Scene settings.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Underlying timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Registered objects.
    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    /// Register `obj` on top of the paint order.
    pub fn add(&mut self, obj: DrawableObject) -> ObjectId {
        self.registry.add(obj)
    }

    /// Unregister `id`.
    pub fn remove(&mut self, id: ObjectId) -> AnimaticResult<DrawableObject> {
        self.registry.remove(id)
    }

    /// Drop every object. Emitted frames and the frame counter are kept.
    pub fn clear(&mut self) {
        self.registry.clear();
    }

    /// Borrow a registered object.
    pub fn get(&self, id: ObjectId) -> AnimaticResult<&DrawableObject> {
        self.registry.get(id)
    }

    /// Mutably borrow a registered object for an instantaneous change.
    pub fn get_mut(&mut self, id: ObjectId) -> AnimaticResult<&mut DrawableObject> {
        self.registry.get_mut(id)
    }

    /// Objects in paint order.
    pub fn objects(&self) -> Vec<&DrawableObject> {
        self.registry.iter().collect()
    }

    /// Play `batch` to completion and flush its frames to the sink.
    ///
    /// An evaluation error leaves the registry and the sink untouched. A sink error during the
    /// flush does not: the registry already holds the batch's final state, the sink keeps the
    /// frames it accepted, and [`Scene::frames_emitted`] counts exactly those frames.
    #[tracing::instrument(skip(self, batch), fields(animations = batch.len(), duration_secs = batch.duration_secs()))]
    pub fn play(&mut self, batch: PlaybackBatch) -> AnimaticResult<PlayStats> {
        let frames = self.timeline.run(batch, &mut self.registry)?;
        self.flush(frames)
    }

    /// Hold the current state for `duration_secs`.
    #[tracing::instrument(skip(self))]
    pub fn wait(&mut self, duration_secs: f64) -> AnimaticResult<PlayStats> {
        let frames = self
            .timeline
            .run(PlaybackBatch::new(duration_secs)?, &mut self.registry)?;
        self.flush(frames)
    }

    fn flush(&mut self, frames: Vec<Vec<ObjectSnapshot>>) -> AnimaticResult<PlayStats> {
        if !self.began {
            self.sink.begin(self.sink_config())?;
            self.began = true;
        }
        let first_frame = self.next_frame;
        let count = frames.len() as u64;
        for objects in frames {
            let frame = FrameSnapshot {
                frame: self.next_frame,
                objects,
            };
            self.sink.push_frame(&frame)?;
            self.next_frame = FrameIndex(self.next_frame.0 + 1);
        }
        self.elapsed_steps += count.saturating_sub(1);
        tracing::debug!(first = first_frame.0, frames = count, "batch flushed");
        Ok(PlayStats {
            first_frame,
            frames: count,
        })
    }

    fn sink_config(&self) -> SinkConfig {
        SinkConfig {
            canvas: self.config.canvas,
            fps: self.config.fps,
            background: self.config.background,
            pixels_per_unit: self.config.pixels_per_unit(),
            world_to_pixel: self.config.world_to_pixel(),
        }
    }

    /// Frames the sink has accepted so far.
    pub fn frames_emitted(&self) -> u64 {
        self.next_frame.0
    }

    /// Timeline seconds covered by every batch played so far.
    pub fn elapsed_secs(&self) -> f64 {
        self.config.fps.frames_to_secs(self.elapsed_steps)
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Close the sink and hand it back.
    pub fn finish(mut self) -> AnimaticResult<S> {
        if !self.began {
            self.sink.begin(self.sink_config())?;
        }
        self.sink.end()?;
        Ok(self.sink)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scheduler.rs"]
mod tests;
