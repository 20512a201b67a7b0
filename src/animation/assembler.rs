use std::sync::Arc;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, PhaseIndex};
use crate::foundation::error::{LoopError, LoopResult};
use crate::render::frame::Frame;
use crate::render::palette::Palette;
use crate::render::renderer::FrameRenderer;

/// A complete loop: frames in phase order plus one delay per frame.
///
/// Only [`AnimationAssembler::assemble`] creates one, after every frame has finished rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    canvas: Canvas,
    palette: Arc<Palette>,
    frames: Vec<Frame>,
    delays: Vec<u16>,
}

impl Animation {
    /// Frame dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Palette shared by all frames.
    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    /// Frames in phase order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Per-frame delays in centiseconds, parallel to [`Animation::frames`].
    pub fn delays(&self) -> &[u16] {
        &self.delays
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Hand every frame to `sink` in phase order.
    #[tracing::instrument(skip_all, fields(frames = self.frames.len()))]
    pub fn write_to(&self, sink: &mut dyn FrameSink) -> LoopResult<()> {
        let frame_count = u32::try_from(self.frames.len())
            .map_err(|_| LoopError::encode("too many frames for one animation"))?;
        sink.begin(SinkConfig {
            canvas: self.canvas,
            palette: Arc::clone(&self.palette),
            frame_count,
        })?;
        for (i, (frame, delay)) in self.frames.iter().zip(&self.delays).enumerate() {
            sink.push_frame(PhaseIndex(i as u32), frame, *delay)?;
        }
        sink.end()
    }
}

/// Drives a [`FrameRenderer`] across one full period of phase samples.
pub struct AnimationAssembler<'a> {
    renderer: FrameRenderer<'a>,
    delay: u16,
}

impl<'a> AnimationAssembler<'a> {
    /// Every frame gets the same `delay` (centiseconds).
    pub fn new(renderer: FrameRenderer<'a>, delay: u16) -> Self {
        Self { renderer, delay }
    }

    /// Renderer used for each sample.
    pub fn renderer(&self) -> &FrameRenderer<'a> {
        &self.renderer
    }

    /// Render every sample in order, each frame completing before the next begins.
    #[tracing::instrument(skip_all, fields(frames = self.renderer.schedule().frames()))]
    pub fn assemble(&self) -> LoopResult<Animation> {
        let schedule = self.renderer.schedule();
        let mut frames = Vec::with_capacity(schedule.frames() as usize);
        let mut delays = Vec::with_capacity(schedule.frames() as usize);

        for theta in schedule.indices() {
            let frame = self.renderer.render_frame(theta)?;
            tracing::debug!(
                theta = theta.0,
                fingerprint = frame.fingerprint(),
                "frame rendered"
            );
            frames.push(frame);
            delays.push(self.delay);
        }

        tracing::info!(
            frames = frames.len(),
            width = self.renderer.canvas().width,
            height = self.renderer.canvas().height,
            "animation assembled"
        );
        Ok(Animation {
            canvas: self.renderer.canvas(),
            palette: Arc::clone(self.renderer.palette()),
            frames,
            delays,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/assembler.rs"]
mod tests;
