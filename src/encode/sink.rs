use std::io::Write;

use crate::foundation::core::{Affine, Canvas, Fps, FrameIndex, Rgb};
use crate::foundation::error::{AnimaticError, AnimaticResult};
use crate::scene::registry::ObjectSnapshot;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SinkConfig {
    /// Output canvas in pixels.
    pub canvas: Canvas,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Background color behind every object.
    pub background: Rgb,
    /// Pixels per world unit.
    pub pixels_per_unit: f64,
    /// World-to-pixel mapping (origin at the canvas center, `y` up in world space).
    pub world_to_pixel: Affine,
}

/// Fully resolved scene state for one output frame.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSnapshot {
    /// Absolute frame index.
    pub frame: FrameIndex,
    /// Objects in paint order (back to front).
    pub objects: Vec<ObjectSnapshot>,
}

/// Sink contract for consuming frame snapshots in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order, and a
/// batch's frames are only pushed once the whole batch evaluated successfully.
///
/// Batch atomicity ends at the sink boundary. If `push_frame` fails partway through a batch,
/// the frames it already accepted stay accepted and the rest of the batch is dropped. A sink
/// that must never expose a partial batch has to buffer internally and commit on its own.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> AnimaticResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, frame: &FrameSnapshot) -> AnimaticResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> AnimaticResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameSnapshot>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[FrameSnapshot] {
        &self.frames
    }

    /// Last captured frame.
    pub fn last(&self) -> Option<&FrameSnapshot> {
        self.frames.last()
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> AnimaticResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameSnapshot) -> AnimaticResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> AnimaticResult<()> {
        Ok(())
    }
}

/// Sink that only counts frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingSink {
    frames: u64,
}

impl CountingSink {
    /// Create a new counting sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames pushed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameSink for CountingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> AnimaticResult<()> {
        self.frames = 0;
        Ok(())
    }

    fn push_frame(&mut self, _frame: &FrameSnapshot) -> AnimaticResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn end(&mut self) -> AnimaticResult<()> {
        Ok(())
    }
}

/// Writes the config and then one JSON document per frame, newline-delimited.
pub struct JsonLinesSink<W: Write + Send> {
    out: W,
    frames: u64,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Wrap `out`.
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Frames written so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: serde::Serialize>(&mut self, value: &T) -> AnimaticResult<()> {
        serde_json::to_writer(&mut self.out, value)
            .map_err(|e| AnimaticError::serde(e.to_string()))?;
        self.out
            .write_all(b"\n")
            .map_err(|e| AnimaticError::Other(e.into()))
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> AnimaticResult<()> {
        self.frames = 0;
        self.write_line(&cfg)
    }

    fn push_frame(&mut self, frame: &FrameSnapshot) -> AnimaticResult<()> {
        self.write_line(frame)?;
        self.frames += 1;
        Ok(())
    }

    fn end(&mut self) -> AnimaticResult<()> {
        self.out.flush().map_err(|e| AnimaticError::Other(e.into()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
