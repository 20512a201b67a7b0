use std::sync::Arc;

use crate::foundation::error::{LoopError, LoopResult};
use crate::foundation::math::unit_to_u8;

/// Whether the network drives one gray channel or three RGB channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// One output, mapped to a gray level.
    Gray,
    /// Three outputs, mapped to RGB and stored as the nearest palette entry.
    Color,
}

impl ColorMode {
    /// Network output count this mode consumes.
    pub fn num_outputs(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Color => 3,
        }
    }

    /// Palette shared by every frame rendered in this mode.
    pub fn palette(self) -> Arc<Palette> {
        Arc::new(match self {
            Self::Gray => Palette::grayscale(),
            Self::Color => Palette::plan9(),
        })
    }

    /// Turn network outputs into a palette index.
    ///
    /// Each channel is scaled to 8 bits and clamped to `[0, 255]` independently.
    pub fn pixel_index(self, palette: &Palette, output: &[f64]) -> LoopResult<u8> {
        let needed = self.num_outputs();
        if output.len() < needed {
            return Err(LoopError::dimension_mismatch(needed, output.len()));
        }
        Ok(match self {
            Self::Gray => palette.index_of([unit_to_u8(output[0]); 3]),
            Self::Color => palette.index_of([
                unit_to_u8(output[0]),
                unit_to_u8(output[1]),
                unit_to_u8(output[2]),
            ]),
        })
    }
}

/// Ordered set of at most 256 opaque RGB colors referenced by frame indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
    gray_ramp: bool,
}

impl Palette {
    /// 256 gray levels; index `i` is gray `i`.
    pub fn grayscale() -> Self {
        Self {
            colors: (0..=255u8).map(|v| [v, v, v]).collect(),
            gray_ramp: true,
        }
    }

    /// The 256-entry Plan 9 color map.
    pub fn plan9() -> Self {
        let mut colors = vec![[0u8; 3]; 256];
        for r in 0..4i32 {
            for v in 0..4i32 {
                let base = (r * 64 + v * 16) as usize;
                let mut j = v - r;
                for g in 0..4i32 {
                    for b in 0..4i32 {
                        let den = r.max(g).max(b);
                        let c = if den == 0 {
                            let c = (0x11 * v) as u8;
                            [c, c, c]
                        } else {
                            let num = 17 * (4 * den + v);
                            [
                                (r * num / den) as u8,
                                (g * num / den) as u8,
                                (b * num / den) as u8,
                            ]
                        };
                        colors[base + (j & 0x0f) as usize] = c;
                        j += 1;
                    }
                }
            }
        }
        Self {
            colors,
            gray_ramp: false,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false` for the built-in palettes.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, if present.
    pub fn color(&self, index: u8) -> Option<[u8; 3]> {
        self.colors.get(usize::from(index)).copied()
    }

    /// Entries in index order.
    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    /// Index of the entry closest to `rgb` by squared distance; ties go to the lower index.
    pub fn index_of(&self, rgb: [u8; 3]) -> u8 {
        if self.gray_ramp && rgb[0] == rgb[1] && rgb[1] == rgb[2] {
            return rgb[0];
        }
        let mut best = 0usize;
        let mut best_dist = u32::MAX;
        for (i, c) in self.colors.iter().enumerate() {
            let dist = c
                .iter()
                .zip(rgb.iter())
                .map(|(&a, &b)| {
                    let d = i32::from(a) - i32::from(b);
                    (d * d) as u32
                })
                .sum::<u32>();
            if dist < best_dist {
                best = i;
                best_dist = dist;
                if dist == 0 {
                    break;
                }
            }
        }
        best as u8
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/palette.rs"]
mod tests;
