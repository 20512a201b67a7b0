use crate::foundation::core::Canvas;
use crate::foundation::error::{LoopError, LoopResult};
use crate::foundation::math::Fnv1a64;
use crate::render::palette::Palette;
use crate::render::partition::Tile;

/// One finished animation frame: row-major palette indices.
///
/// Only built from a complete set of tiles, so a partially rendered frame never exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    indices: Vec<u8>,
}

impl Frame {
    /// Stitch tiles into a frame, requiring every pixel to be covered exactly once.
    pub fn from_tiles(canvas: Canvas, tiles: Vec<Tile>) -> LoopResult<Self> {
        let total = canvas.pixel_count();
        let mut indices = vec![0u8; total];
        let mut written = vec![false; total];
        let mut covered = 0usize;

        for tile in tiles {
            let p = tile.partition;
            if p.x1 > canvas.width || p.y1 > canvas.height || p.x0 > p.x1 || p.y0 > p.y1 {
                return Err(LoopError::invalid_configuration(format!(
                    "partition {p:?} lies outside the {}x{} canvas",
                    canvas.width, canvas.height
                )));
            }
            if tile.indices.len() != p.area() {
                return Err(LoopError::dimension_mismatch(p.area(), tile.indices.len()));
            }
            let w = p.width() as usize;
            if w == 0 {
                continue;
            }
            for (row, src) in tile.indices.chunks_exact(w).enumerate() {
                let start = (p.y0 as usize + row) * canvas.width as usize + p.x0 as usize;
                if written[start..start + w].iter().any(|&seen| seen) {
                    return Err(LoopError::invalid_configuration(format!(
                        "partition {p:?} overlaps another partition"
                    )));
                }
                written[start..start + w].fill(true);
                indices[start..start + w].copy_from_slice(src);
            }
            covered += p.area();
        }

        if covered != total {
            return Err(LoopError::invalid_configuration(format!(
                "partitions cover {covered} of {total} pixels"
            )));
        }

        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            indices,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major palette indices.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Palette index at `(x, y)`.
    pub fn index_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.indices
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Color at `(x, y)` resolved through `palette`.
    pub fn color_at(&self, x: u32, y: u32, palette: &Palette) -> Option<[u8; 3]> {
        self.index_at(x, y).and_then(|i| palette.color(i))
    }

    /// Expand to opaque straight-alpha RGBA8, tightly packed.
    pub fn to_rgba8(&self, palette: &Palette) -> LoopResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.indices.len() * 4);
        for &i in &self.indices {
            let [r, g, b] = palette.color(i).ok_or_else(|| {
                LoopError::encode(format!(
                    "palette index {i} out of range for {} colors",
                    palette.len()
                ))
            })?;
            out.extend_from_slice(&[r, g, b, 255]);
        }
        Ok(out)
    }

    /// Stable 64-bit digest of dimensions and indices.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width);
        h.write_u32(self.height);
        h.write_bytes(&self.indices);
        h.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
