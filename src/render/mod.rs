//! Per-pixel CPPN evaluation into indexed-color frames.

/// Feature-vector construction for each pixel.
pub mod features;
/// Indexed-color frame buffers.
pub mod frame;
/// Shared gray and Plan 9 palettes.
pub mod palette;
/// Disjoint rectangular partitions of the pixel grid.
pub mod partition;
/// Cyclic phase samples spanning one loop.
pub mod phase;
/// Parallel frame renderer.
pub mod renderer;
