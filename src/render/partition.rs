use crate::foundation::core::Canvas;
use crate::foundation::error::{LoopError, LoopResult};

/// Half-open pixel rectangle `[x0, x1) x [y0, y1)` owned by one rendering task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Partition {
    /// Inclusive left edge.
    pub x0: u32,
    /// Exclusive right edge.
    pub x1: u32,
    /// Inclusive top edge.
    pub y0: u32,
    /// Exclusive bottom edge.
    pub y1: u32,
}

impl Partition {
    /// Width in pixels.
    pub fn width(self) -> u32 {
        self.x1 - self.x0
    }

    /// Height in pixels.
    pub fn height(self) -> u32 {
        self.y1 - self.y0
    }

    /// Pixel count.
    pub fn area(self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// `true` when `(x, y)` lies inside.
    pub fn contains(self, x: u32, y: u32) -> bool {
        self.x0 <= x && x < self.x1 && self.y0 <= y && y < self.y1
    }
}

/// Upper bound on partitions per frame accepted from configuration.
pub const MAX_PARTITIONS: u32 = 4096;

/// `cols x rows` grid of partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionGrid {
    cols: u32,
    rows: u32,
}

impl PartitionGrid {
    /// Explicit grid shape.
    pub fn new(cols: u32, rows: u32) -> LoopResult<Self> {
        if cols == 0 || rows == 0 {
            return Err(LoopError::invalid_configuration(format!(
                "partition grid must be non-empty, got {cols}x{rows}"
            )));
        }
        Ok(Self { cols, rows })
    }

    /// Grid with exactly `count` cells, as square as `count` allows.
    ///
    /// Rows are the largest divisor of `count` not above its square root: 4 gives quadrants,
    /// 8 gives 4x2, a prime gives vertical strips.
    pub fn for_count(count: u32) -> LoopResult<Self> {
        if count == 0 {
            return Err(LoopError::invalid_configuration(
                "partition count must be > 0",
            ));
        }
        let mut rows = 1u32;
        let mut d = 1u32;
        while u64::from(d) * u64::from(d) <= u64::from(count) {
            if count % d == 0 {
                rows = d;
            }
            d += 1;
        }
        Self::new(count / rows, rows)
    }

    /// Columns.
    pub fn cols(self) -> u32 {
        self.cols
    }

    /// Rows.
    pub fn rows(self) -> u32 {
        self.rows
    }

    /// Number of partitions.
    pub fn count(self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Row-major partitions that tile `canvas` exactly once.
    ///
    /// Cells may be empty when the canvas is narrower or shorter than the grid.
    pub fn partitions(self, canvas: Canvas) -> Vec<Partition> {
        let xs = split(canvas.width, self.cols);
        let ys = split(canvas.height, self.rows);
        let mut out = Vec::with_capacity(self.count());
        for y in ys.windows(2) {
            for x in xs.windows(2) {
                out.push(Partition {
                    x0: x[0],
                    x1: x[1],
                    y0: y[0],
                    y1: y[1],
                });
            }
        }
        out
    }
}

fn split(len: u32, parts: u32) -> Vec<u32> {
    (0..=parts)
        .map(|i| (u64::from(len) * u64::from(i) / u64::from(parts)) as u32)
        .collect()
}

/// Palette indices rendered for one partition, row-major within it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Region these indices belong to.
    pub partition: Partition,
    /// `partition.area()` palette indices.
    pub indices: Vec<u8>,
}

#[cfg(test)]
#[path = "../../tests/unit/render/partition.rs"]
mod tests;
