use std::sync::Arc;

use rayon::prelude::*;

use crate::config::{RenderConfig, RenderMode};
use crate::foundation::core::{Canvas, PhaseIndex};
use crate::foundation::error::{LoopError, LoopResult};
use crate::network::cppn::Cppn;
use crate::render::features::{FeatureMapper, NUM_FEATURES};
use crate::render::frame::Frame;
use crate::render::palette::Palette;
use crate::render::partition::{Partition, PartitionGrid, Tile};
use crate::render::phase::PhaseSchedule;

/// Evaluates a shared [`Cppn`] at every pixel of a frame.
///
/// Each frame is split into disjoint partitions; every partition is rendered by its own rayon task
/// into its own [`Tile`], and the frame is stitched together only after all tasks have joined.
/// The network is read-only and rendering draws no randomness, so output does not depend on the
/// partition count or the order in which tasks finish.
pub struct FrameRenderer<'a> {
    cppn: &'a Cppn,
    canvas: Canvas,
    mapper: FeatureMapper,
    mode: RenderMode,
    palette: Arc<Palette>,
    schedule: PhaseSchedule,
    grid: PartitionGrid,
    pool: rayon::ThreadPool,
}

impl<'a> FrameRenderer<'a> {
    /// Validate `config` against `cppn` and prepare the worker pool.
    pub fn new(cppn: &'a Cppn, config: &RenderConfig) -> LoopResult<Self> {
        config.validate()?;
        let mode = config.render_mode();
        let net = cppn.config();
        if net.num_inputs != NUM_FEATURES {
            return Err(LoopError::invalid_configuration(format!(
                "network takes {} inputs, renderer supplies {NUM_FEATURES}",
                net.num_inputs
            )));
        }
        if net.num_outputs != mode.color.num_outputs() {
            return Err(LoopError::invalid_configuration(format!(
                "network emits {} outputs, {:?} mode needs {}",
                net.num_outputs,
                mode.color,
                mode.color.num_outputs()
            )));
        }

        let canvas = config.canvas()?;
        Ok(Self {
            cppn,
            canvas,
            mapper: FeatureMapper::new(
                canvas,
                config.sharpness,
                config.focus,
                config.density,
                mode.features,
            ),
            mode,
            palette: mode.color.palette(),
            schedule: config.schedule()?,
            grid: config.partition_grid()?,
            pool: build_thread_pool(config.threads)?,
        })
    }

    /// Frame dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Feature and color mapping in use.
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Palette every rendered frame indexes into.
    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    /// Phase samples this renderer maps `theta` through.
    pub fn schedule(&self) -> PhaseSchedule {
        self.schedule
    }

    /// Partition layout used per frame.
    pub fn grid(&self) -> PartitionGrid {
        self.grid
    }

    /// Render phase sample `theta` into a complete frame.
    #[tracing::instrument(skip(self), fields(partitions = self.grid.count()))]
    pub fn render_frame(&self, theta: PhaseIndex) -> LoopResult<Frame> {
        let phase = self.schedule.phase(theta);
        let partitions = self.grid.partitions(self.canvas);
        let tiles = self.pool.install(|| {
            partitions
                .par_iter()
                .map(|p| self.render_partition(*p, phase))
                .collect::<LoopResult<Vec<_>>>()
        })?;
        Frame::from_tiles(self.canvas, tiles)
    }

    /// Render one partition at phase `(cos, sin)` on the calling thread.
    pub fn render_partition(&self, partition: Partition, phase: (f64, f64)) -> LoopResult<Tile> {
        let mut indices = Vec::with_capacity(partition.area());
        for y in partition.y0..partition.y1 {
            for x in partition.x0..partition.x1 {
                let features = self.mapper.features(x, y, phase);
                let output = self.cppn.feed_forward(&features.to_array())?;
                indices.push(self.mode.color.pixel_index(&self.palette, &output)?);
            }
        }
        Ok(Tile { partition, indices })
    }
}

/// `threads` has already been checked by [`RenderConfig::validate`].
fn build_thread_pool(threads: Option<usize>) -> LoopResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        LoopError::invalid_configuration(format!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
