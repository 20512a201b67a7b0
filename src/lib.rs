//! Looping animated images from a randomly initialized CPPN.
//!
//! A Compositional Pattern Producing Network maps `(x, y, r, cos θ, sin θ)` to one gray or three
//! RGB channels. Evaluating it at every pixel for a set of phase samples spanning exactly one
//! period yields frames whose last one wraps seamlessly back onto the first.
//!
//! - Describe a run with a [`RenderConfig`]
//! - Build a [`Cppn`] from a seeded random source
//! - Render frames with a [`FrameRenderer`], in parallel over disjoint partitions
//! - Collect one loop with an [`AnimationAssembler`] and hand it to a [`FrameSink`]
//!
//! [`render_animation`] and [`render_to_gif`] wire all of this together.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Phase-ordered assembly of frames into an animation.
pub mod animation;
/// Run configuration.
pub mod config;
/// Output sinks.
pub mod encode;
/// The CPPN.
pub mod network;
mod pipeline;
/// Per-pixel rendering.
pub mod render;

pub use crate::foundation::core::{Canvas, PhaseIndex};
pub use crate::foundation::error::{LoopError, LoopResult};
pub use crate::foundation::rng::seeded_rng;

pub use crate::animation::assembler::{Animation, AnimationAssembler};
pub use crate::config::{RenderConfig, RenderMode};
pub use crate::encode::gif::{GifSink, GifSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::network::activation::Activation;
pub use crate::network::cppn::Cppn;
pub use crate::network::layer::Layer;
pub use crate::network::topology::{LayerSpec, NetworkConfig};
pub use crate::pipeline::{RenderStats, render_animation, render_to_gif};
pub use crate::render::features::{FeatureMapper, FeatureMode, FeatureVector};
pub use crate::render::frame::Frame;
pub use crate::render::palette::{ColorMode, Palette};
pub use crate::render::partition::{Partition, PartitionGrid, Tile};
pub use crate::render::phase::PhaseSchedule;
pub use crate::render::renderer::FrameRenderer;
