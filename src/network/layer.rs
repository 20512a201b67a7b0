use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::foundation::error::{LoopError, LoopResult};
use crate::network::activation::Activation;
use crate::network::topology::LayerSpec;

/// Constant appended to every layer input before the affine transform.
pub const BIAS_INPUT: f64 = -1.0;

/// Standard deviation of the normal distribution used for weight initialization.
pub const WEIGHT_SCALE: f64 = 0.5;

/// One affine transform plus activation.
///
/// `weights` has shape `(inputs + 1) x outputs`; the last row holds the bias weights. Immutable
/// after construction, so a layer can be evaluated concurrently from any number of threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    weights: Array2<f64>,
    activation: Activation,
}

impl Layer {
    /// Build a layer from explicit weights.
    pub fn from_weights(weights: Array2<f64>, activation: Activation) -> LoopResult<Self> {
        let (rows, cols) = weights.dim();
        if rows < 2 || cols == 0 {
            return Err(LoopError::invalid_configuration(format!(
                "layer weights must be at least 2x1 (one input plus bias), got {rows}x{cols}"
            )));
        }
        Ok(Self {
            weights,
            activation,
        })
    }

    /// Draw every weight independently from `N(0, WEIGHT_SCALE)` in row-major order.
    pub fn random<R: Rng + ?Sized>(spec: LayerSpec, rng: &mut R) -> LoopResult<Self> {
        let normal = Normal::new(0.0, WEIGHT_SCALE)
            .map_err(|e| LoopError::invalid_configuration(format!("weight distribution: {e}")))?;
        let weights = Array2::from_shape_fn((spec.inputs + 1, spec.outputs), |_| {
            normal.sample(&mut *rng)
        });
        Self::from_weights(weights, spec.activation)
    }

    /// Pre-bias input size.
    pub fn input_size(&self) -> usize {
        self.weights.nrows() - 1
    }

    /// Output size.
    pub fn output_size(&self) -> usize {
        self.weights.ncols()
    }

    /// Nonlinearity applied to the raw outputs.
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Raw weight matrix, bias row last.
    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    /// Shape and activation of this layer.
    pub fn spec(&self) -> LayerSpec {
        LayerSpec {
            inputs: self.input_size(),
            outputs: self.output_size(),
            activation: self.activation,
        }
    }

    /// Append the bias input, multiply by the transposed weights, then activate elementwise.
    pub fn activate(&self, input: ArrayView1<'_, f64>) -> LoopResult<Array1<f64>> {
        let n = self.input_size();
        if input.len() != n {
            return Err(LoopError::dimension_mismatch(n, input.len()));
        }

        let with_bias =
            Array1::from_iter(input.iter().copied().chain(std::iter::once(BIAS_INPUT)));

        let mut out = self.weights.t().dot(&with_bias);
        let activation = self.activation;
        out.mapv_inplace(|v| activation.apply(v));
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/network/layer.rs"]
mod tests;
