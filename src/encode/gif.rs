use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, RgbaImage};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::PhaseIndex;
use crate::foundation::error::{LoopError, LoopResult};
use crate::render::frame::Frame;

/// Options for [`GifSink`].
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF path.
    pub out_path: PathBuf,
    /// Overwrite the output file if it already exists.
    pub overwrite: bool,
}

impl GifSinkOpts {
    /// Write to `out_path`, replacing any existing file.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
        }
    }
}

/// Writes an infinitely looping GIF.
///
/// Frames use at most 256 palette colors, so the encoder keeps every pixel exact.
pub struct GifSink {
    opts: GifSinkOpts,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    cfg: Option<SinkConfig>,
    last_idx: Option<PhaseIndex>,
    written: u32,
}

impl GifSink {
    /// Create a sink; the file is opened in `begin`.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            cfg: None,
            last_idx: None,
            written: 0,
        }
    }

    /// Destination path.
    pub fn out_path(&self) -> &Path {
        &self.opts.out_path
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> LoopResult<()> {
        if cfg.canvas.width > u32::from(u16::MAX) || cfg.canvas.height > u32::from(u16::MAX) {
            return Err(LoopError::encode(format!(
                "gif frames are limited to 65535x65535, got {}x{}",
                cfg.canvas.width, cfg.canvas.height
            )));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(LoopError::encode(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        let file = File::create(&self.opts.out_path).map_err(|e| {
            LoopError::encode(format!(
                "create gif '{}': {e}",
                self.opts.out_path.display()
            ))
        })?;
        let mut encoder = GifEncoder::new(BufWriter::new(file));
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| LoopError::encode(format!("set gif repeat: {e}")))?;

        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: PhaseIndex, frame: &Frame, delay: u16) -> LoopResult<()> {
        let (Some(encoder), Some(cfg)) = (self.encoder.as_mut(), self.cfg.as_ref()) else {
            return Err(LoopError::encode("gif sink: push_frame called before begin"));
        };
        if let Some(last) = self.last_idx
            && idx <= last
        {
            return Err(LoopError::encode(format!(
                "gif sink: frames must be pushed in increasing order ({} after {})",
                idx.0, last.0
            )));
        }
        if frame.width() != cfg.canvas.width || frame.height() != cfg.canvas.height {
            return Err(LoopError::encode(format!(
                "gif sink: frame is {}x{}, expected {}x{}",
                frame.width(),
                frame.height(),
                cfg.canvas.width,
                cfg.canvas.height
            )));
        }

        let rgba = frame.to_rgba8(&cfg.palette)?;
        let img = RgbaImage::from_raw(frame.width(), frame.height(), rgba)
            .ok_or_else(|| LoopError::encode("gif sink: rgba buffer has the wrong length"))?;
        let delay = Delay::from_numer_denom_ms(u32::from(delay) * 10, 1);
        encoder
            .encode_frame(image::Frame::from_parts(img, 0, 0, delay))
            .map_err(|e| LoopError::encode(format!("encode gif frame {}: {e}", idx.0)))?;

        self.last_idx = Some(idx);
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> LoopResult<()> {
        let cfg = self
            .cfg
            .take()
            .ok_or_else(|| LoopError::encode("gif sink: end called before begin"))?;
        // Dropping the encoder writes the GIF trailer and flushes the buffer.
        drop(self.encoder.take());
        if self.written != cfg.frame_count {
            return Err(LoopError::encode(format!(
                "gif sink: wrote {} of {} frames",
                self.written, cfg.frame_count
            )));
        }
        tracing::info!(
            path = %self.opts.out_path.display(),
            frames = self.written,
            "gif written"
        );
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> LoopResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            LoopError::encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
