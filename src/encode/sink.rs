use std::sync::Arc;

use crate::foundation::core::{Canvas, PhaseIndex};
use crate::foundation::error::LoopResult;
use crate::render::frame::Frame;
use crate::render::palette::Palette;

/// Configuration provided to a [`FrameSink`] before any frame is pushed.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Frame dimensions.
    pub canvas: Canvas,
    /// Palette every frame indexes into.
    pub palette: Arc<Palette>,
    /// Number of frames that will follow.
    pub frame_count: u32,
}

/// Consumer of finished frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing [`PhaseIndex`] order, and only
/// for animations whose frames have all been rendered.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> LoopResult<()>;
    /// Push one frame with its delay in centiseconds.
    fn push_frame(&mut self, idx: PhaseIndex, frame: &Frame, delay: u16) -> LoopResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> LoopResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(PhaseIndex, Frame, u16)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Captured frames with their delays.
    pub fn frames(&self) -> &[(PhaseIndex, Frame, u16)] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> LoopResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: PhaseIndex, frame: &Frame, delay: u16) -> LoopResult<()> {
        self.frames.push((idx, frame.clone(), delay));
        Ok(())
    }

    fn end(&mut self) -> LoopResult<()> {
        self.finished = true;
        Ok(())
    }
}
