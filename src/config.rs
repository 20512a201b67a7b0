use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::core::Canvas;
use crate::foundation::error::{LoopError, LoopResult};
use crate::network::topology::NetworkConfig;
use crate::render::features::{FeatureMode, NUM_FEATURES};
use crate::render::palette::ColorMode;
use crate::render::partition::{MAX_PARTITIONS, PartitionGrid};
use crate::render::phase::PhaseSchedule;

/// Everything a run needs, as supplied by the caller (CLI flags or a JSON file).
///
/// Missing JSON fields take the [`Default`] values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output base name; the GIF is written as `<name>.gif`.
    pub name: String,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Scale applied to every spatial feature.
    pub sharpness: f64,
    /// Extra scale on the radial feature.
    pub focus: f64,
    /// Seed for weight initialization.
    pub seed: u64,
    /// Number of hidden layers.
    pub depth: usize,
    /// Neurons per hidden layer.
    pub size: usize,
    /// Fold coordinates through `sin`/`cos` instead of using them directly.
    pub pattern: bool,
    /// Coordinate frequency in pattern mode.
    pub density: f64,
    /// Single gray channel instead of RGB.
    pub gray: bool,
    /// Phase samples (frames) per loop.
    pub frames: u32,
    /// Full phase revolutions per loop.
    pub cycles: u32,
    /// Per-frame delay in centiseconds.
    pub delay: u16,
    /// Spatial partitions rendered concurrently per frame.
    pub partitions: u32,
    /// Rayon worker threads; `None` uses the rayon default.
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            name: "loop".to_string(),
            width: 200,
            height: 200,
            sharpness: 0.07,
            focus: 1.0,
            seed: 0,
            depth: 12,
            size: 24,
            pattern: false,
            density: 1.0,
            gray: false,
            frames: 60,
            cycles: 1,
            delay: 0,
            partitions: 4,
            threads: None,
        }
    }
}

/// Feature mapping crossed with color mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderMode {
    /// Coordinate mapping.
    pub features: FeatureMode,
    /// Output channel mapping.
    pub color: ColorMode,
}

impl RenderConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> LoopResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| LoopError::serde(format!("parse render config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LoopResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LoopError::invalid_configuration(format!(
                "open render config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject anything that would prevent a complete render.
    pub fn validate(&self) -> LoopResult<()> {
        let canvas = self.canvas()?;
        self.network_config().validate()?;
        positive_finite("sharpness", self.sharpness)?;
        positive_finite("focus", self.focus)?;
        if self.pattern {
            positive_finite("density", self.density)?;
        }
        self.schedule()?;
        if self.partitions > MAX_PARTITIONS {
            return Err(LoopError::invalid_configuration(format!(
                "partitions must be <= {MAX_PARTITIONS}, got {}",
                self.partitions
            )));
        }
        if self.partitions as usize > canvas.pixel_count() {
            return Err(LoopError::invalid_configuration(format!(
                "partitions ({}) exceed the pixel count of a {}x{} frame",
                self.partitions, canvas.width, canvas.height
            )));
        }
        self.partition_grid()?;
        if self.threads == Some(0) {
            return Err(LoopError::invalid_configuration(
                "threads must be >= 1 when set",
            ));
        }
        Ok(())
    }

    /// Validated output dimensions.
    pub fn canvas(&self) -> LoopResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Network shape: five features in, one or three channels out.
    pub fn network_config(&self) -> NetworkConfig {
        NetworkConfig {
            num_inputs: NUM_FEATURES,
            num_hidden_layers: self.depth,
            num_hidden_neurons: self.size,
            num_outputs: self.render_mode().color.num_outputs(),
        }
    }

    /// Rendering mode selected by `pattern` and `gray`.
    pub fn render_mode(&self) -> RenderMode {
        RenderMode {
            features: if self.pattern {
                FeatureMode::Pattern
            } else {
                FeatureMode::Plain
            },
            color: if self.gray {
                ColorMode::Gray
            } else {
                ColorMode::Color
            },
        }
    }

    /// Phase samples for one loop.
    pub fn schedule(&self) -> LoopResult<PhaseSchedule> {
        PhaseSchedule::new(self.frames, self.cycles)
    }

    /// Partition layout for each frame.
    pub fn partition_grid(&self) -> LoopResult<PartitionGrid> {
        PartitionGrid::for_count(self.partitions)
    }

    /// `<name>.gif` inside `dir`.
    pub fn output_path(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(format!("{}.gif", self.name))
    }
}

fn positive_finite(name: &str, v: f64) -> LoopResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(LoopError::invalid_configuration(format!(
            "{name} must be a positive finite number, got {v}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
