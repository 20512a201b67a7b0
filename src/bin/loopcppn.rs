use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

/// Render a seamlessly looping GIF from a randomly initialized CPPN.
#[derive(Parser, Debug)]
#[command(name = "loopcppn", version)]
struct Cli {
    /// Base configuration JSON; explicit flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the GIF is written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Name of the exported file (without `.gif`). Defaults to the current UNIX time in ns.
    #[arg(long)]
    name: Option<String>,

    /// Width of the exported image.
    #[arg(long)]
    width: Option<u32>,

    /// Height of the exported image.
    #[arg(long)]
    height: Option<u32>,

    /// Sharpness of the image.
    #[arg(long)]
    sharpness: Option<f64>,

    /// Focus towards the center of the image.
    #[arg(long)]
    focus: Option<f64>,

    /// Seed for weight initialization.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of hidden layers.
    #[arg(long)]
    depth: Option<usize>,

    /// Number of neurons in a hidden layer.
    #[arg(long)]
    size: Option<usize>,

    /// Export a patterned image (`--pattern false` turns it off).
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    pattern: Option<bool>,

    /// Density of patterns (only meaningful with --pattern).
    #[arg(long)]
    density: Option<f64>,

    /// Export a black and white image (`--gray false` turns it off).
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    gray: Option<bool>,

    /// Frames per loop.
    #[arg(long)]
    frames: Option<u32>,

    /// Full phase revolutions per loop.
    #[arg(long)]
    cycles: Option<u32>,

    /// Per-frame delay in centiseconds.
    #[arg(long)]
    delay: Option<u16>,

    /// Spatial partitions rendered concurrently per frame.
    #[arg(long)]
    partitions: Option<u32>,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<(loopcppn::RenderConfig, PathBuf)> {
        let mut cfg = match &self.config {
            Some(path) => loopcppn::RenderConfig::from_path(path)
                .with_context(|| format!("load config '{}'", path.display()))?,
            None => loopcppn::RenderConfig {
                name: timestamp_name(),
                ..loopcppn::RenderConfig::default()
            },
        };

        if let Some(v) = self.name {
            cfg.name = v;
        }
        if let Some(v) = self.width {
            cfg.width = v;
        }
        if let Some(v) = self.height {
            cfg.height = v;
        }
        if let Some(v) = self.sharpness {
            cfg.sharpness = v;
        }
        if let Some(v) = self.focus {
            cfg.focus = v;
        }
        if let Some(v) = self.seed {
            cfg.seed = v;
        }
        if let Some(v) = self.depth {
            cfg.depth = v;
        }
        if let Some(v) = self.size {
            cfg.size = v;
        }
        if let Some(v) = self.density {
            cfg.density = v;
        }
        if let Some(v) = self.frames {
            cfg.frames = v;
        }
        if let Some(v) = self.cycles {
            cfg.cycles = v;
        }
        if let Some(v) = self.delay {
            cfg.delay = v;
        }
        if let Some(v) = self.partitions {
            cfg.partitions = v;
        }
        if self.threads.is_some() {
            cfg.threads = self.threads;
        }
        if let Some(v) = self.pattern {
            cfg.pattern = v;
        }
        if let Some(v) = self.gray {
            cfg.gray = v;
        }

        Ok((cfg, self.out_dir))
    }
}

fn timestamp_name() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0)
        .to_string()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (cfg, out_dir) = Cli::parse().into_config()?;
    cfg.validate()?;
    let out_path = cfg.output_path(&out_dir);

    tracing::info!(
        file = %out_path.display(),
        width = cfg.width,
        height = cfg.height,
        sharpness = cfg.sharpness,
        focus = cfg.focus,
        seed = cfg.seed,
        depth = cfg.depth,
        size = cfg.size,
        pattern = cfg.pattern,
        density = cfg.pattern.then_some(cfg.density),
        gray = cfg.gray,
        frames = cfg.frames,
        "rendering"
    );

    let stats = loopcppn::render_to_gif(&cfg, &out_path)
        .with_context(|| format!("render '{}'", out_path.display()))?;

    tracing::info!(frames = stats.frames, partitions = stats.partitions, "done");
    eprintln!("wrote {}", out_path.display());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/bin/loopcppn.rs"]
mod tests;
