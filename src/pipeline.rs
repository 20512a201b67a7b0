use std::path::Path;

use crate::animation::assembler::{Animation, AnimationAssembler};
use crate::config::RenderConfig;
use crate::encode::gif::{GifSink, GifSinkOpts};
use crate::foundation::error::LoopResult;
use crate::foundation::rng::seeded_rng;
use crate::network::cppn::Cppn;
use crate::render::renderer::FrameRenderer;

/// Counters reported after a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames in the loop.
    pub frames: u64,
    /// Pixels evaluated per frame.
    pub pixels_per_frame: u64,
    /// Partitions rendered concurrently per frame.
    pub partitions: u64,
}

/// Build the network from `config.seed` and render one full loop.
///
/// The seeded random source is consumed entirely by network construction before any rendering
/// starts, so the result is a pure function of `config`.
#[tracing::instrument(skip_all, fields(seed = config.seed))]
pub fn render_animation(config: &RenderConfig) -> LoopResult<(Animation, RenderStats)> {
    config.validate()?;

    let mut rng = seeded_rng(config.seed);
    let cppn = Cppn::build(config.network_config(), &mut rng)?;
    let activations: Vec<&str> = cppn.layers().iter().map(|l| l.activation().name()).collect();
    tracing::debug!(
        layers = cppn.layers().len(),
        activations = ?activations,
        hidden = config.size,
        outputs = cppn.config().num_outputs,
        "network built"
    );

    let renderer = FrameRenderer::new(&cppn, config)?;
    let partitions = renderer.grid().count() as u64;
    let pixels_per_frame = renderer.canvas().pixel_count() as u64;
    let animation = AnimationAssembler::new(renderer, config.delay).assemble()?;

    let stats = RenderStats {
        frames: animation.len() as u64,
        pixels_per_frame,
        partitions,
    };
    Ok((animation, stats))
}

/// Render one loop and write it to `out_path` as a looping GIF.
pub fn render_to_gif(config: &RenderConfig, out_path: impl AsRef<Path>) -> LoopResult<RenderStats> {
    let (animation, stats) = render_animation(config)?;
    let mut sink = GifSink::new(GifSinkOpts::new(out_path.as_ref()));
    animation.write_to(&mut sink)?;
    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
