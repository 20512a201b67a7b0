use crate::foundation::core::Canvas;

/// Number of scalars in a [`FeatureVector`].
pub const NUM_FEATURES: usize = 5;

/// How pixel coordinates are turned into the first two features.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureMode {
    /// Scaled coordinates.
    Plain,
    /// Coordinates folded through `sin`/`cos` before scaling, which tiles the pattern.
    Pattern,
}

/// Per-pixel network input. Computed on the fly and never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureVector {
    /// Mapped x coordinate.
    pub x: f64,
    /// Mapped y coordinate.
    pub y: f64,
    /// Scaled distance from the canvas center.
    pub r: f64,
    /// `cos` of the phase angle.
    pub phase1: f64,
    /// `sin` of the phase angle.
    pub phase2: f64,
}

impl FeatureVector {
    /// Network input order: `[x, y, r, phase1, phase2]`.
    pub fn to_array(self) -> [f64; NUM_FEATURES] {
        [self.x, self.y, self.r, self.phase1, self.phase2]
    }
}

/// Maps `(x, y, phase)` to a [`FeatureVector`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureMapper {
    canvas: Canvas,
    sharpness: f64,
    focus: f64,
    density: f64,
    mode: FeatureMode,
}

impl FeatureMapper {
    /// `density` only affects [`FeatureMode::Pattern`].
    pub fn new(
        canvas: Canvas,
        sharpness: f64,
        focus: f64,
        density: f64,
        mode: FeatureMode,
    ) -> Self {
        Self {
            canvas,
            sharpness,
            focus,
            density,
            mode,
        }
    }

    /// Selected coordinate mapping.
    pub fn mode(&self) -> FeatureMode {
        self.mode
    }

    /// Features of pixel `(x, y)` at phase `(cos, sin)`.
    pub fn features(&self, x: u32, y: u32, phase: (f64, f64)) -> FeatureVector {
        let xf = f64::from(x);
        let yf = f64::from(y);
        let (mx, my) = match self.mode {
            FeatureMode::Plain => (xf * self.sharpness, yf * self.sharpness),
            FeatureMode::Pattern => (
                (xf * self.density).sin() * self.sharpness,
                (yf * self.density).cos() * self.sharpness,
            ),
        };

        let (cx, cy) = self.canvas.center();
        let dx = (i64::from(x) - cx) as f64;
        let dy = (i64::from(y) - cy) as f64;
        let r = (dx * dx + dy * dy).sqrt() * self.sharpness * self.focus;

        FeatureVector {
            x: mx,
            y: my,
            r,
            phase1: phase.0,
            phase2: phase.1,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/features.rs"]
mod tests;
