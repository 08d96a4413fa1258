//! animatic is a declarative 2D animation authoring and timeline-evaluation engine.
//!
//! User code builds drawable objects, registers them in a scene, and declares how their
//! properties change over time. The engine turns those declarations into a deterministic
//! sequence of fully resolved per-frame snapshots and hands them to a [`FrameSink`]; rasterizing
//! and encoding those snapshots is the sink's business.
//!
//! # Pipeline overview
//!
//! 1. **Author**: construct [`DrawableObject`]s and [`Scene::add`] them (insertion order is paint
//!    order).
//! 2. **Declare**: record intent with [`DrawableObject::animate`] (a deferred call-log) or build
//!    concrete [`Tween`]s and [`AnimationGroup`]s, then collect them into a [`PlaybackBatch`].
//! 3. **Schedule**: [`Scene::play`] arms each animation against the scene as it is right now,
//!    steps time at the configured fps, eases the linear time fraction, and interpolates every
//!    animation at the same alpha per frame.
//! 4. **Emit**: each frame's ordered object states go to the sink as a [`FrameSnapshot`].
//!
//! Everything is single-threaded and synchronous. A batch either renders completely or emits no
//! frame at all.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod encode;
mod foundation;
mod scene;
mod timeline;

pub use animation::anim::{Animation, AnimationPhase, Lerp, Targets, Tween, alpha_for};
pub use animation::builder::{AnimateBuilder, Command};
pub use animation::ease::Ease;
pub use animation::group::AnimationGroup;
pub use animation::kinds::AnimationKind;
pub use encode::sink::{
    CountingSink, FrameSink, FrameSnapshot, InMemorySink, JsonLinesSink, SinkConfig,
};
pub use foundation::constants::{
    BLACK, BLUE, CYAN, DEFAULT_FPS, DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, DOWN, GREEN, LEFT,
    ORANGE, ORIGIN, PINK, PURPLE, RED, RESOLUTION_4K, RESOLUTION_720P, RESOLUTION_1080P, RIGHT,
    UP, WHITE, YELLOW,
};
pub use foundation::core::{Affine, Canvas, Fps, FrameIndex, Point, Rect, Rgb, Vec2};
pub use foundation::error::{AnimaticError, AnimaticResult};
pub use scene::object::{DrawableObject, ObjectId, Shape, ShapeKind, Style, arrow_tip};
pub use scene::props::{Domain, MIN_POSITIVE, PropertyKey, PropertyValue, StateSnapshot};
pub use scene::registry::{ObjectSnapshot, SceneRegistry};
pub use timeline::batch::PlaybackBatch;
pub use timeline::config::SceneConfig;
pub use timeline::scheduler::{PlayStats, Scene, Timeline};
