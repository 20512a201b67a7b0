use ndarray::{Array1, ArrayView1};
use rand::Rng;

use crate::foundation::error::{LoopError, LoopResult};
use crate::network::layer::Layer;
use crate::network::topology::NetworkConfig;

/// Compositional Pattern Producing Network with a fixed layer chain.
///
/// Built once per run from a seeded random source and never mutated afterwards; evaluation is a
/// pure function of the input, so a `&Cppn` can be shared across rendering threads freely.
#[derive(Clone, Debug, PartialEq)]
pub struct Cppn {
    config: NetworkConfig,
    layers: Vec<Layer>,
}

impl Cppn {
    /// Materialize one randomly initialized layer per entry of [`NetworkConfig::layer_specs`].
    ///
    /// Weights are drawn layer by layer in row-major order, so the same seed always produces the
    /// same network.
    pub fn build<R: Rng + ?Sized>(config: NetworkConfig, rng: &mut R) -> LoopResult<Self> {
        let layers = config
            .layer_specs()?
            .into_iter()
            .map(|spec| Layer::random(spec, &mut *rng))
            .collect::<LoopResult<Vec<_>>>()?;
        Self::from_layers(config, layers)
    }

    /// Assemble a network from prepared layers, checking them against `config`.
    pub fn from_layers(config: NetworkConfig, layers: Vec<Layer>) -> LoopResult<Self> {
        let expected = config.layer_specs()?;
        if expected.len() != layers.len() {
            return Err(LoopError::invalid_configuration(format!(
                "network expects {} layers, got {}",
                expected.len(),
                layers.len()
            )));
        }
        for (i, (spec, layer)) in expected.iter().zip(&layers).enumerate() {
            if layer.spec() != *spec {
                return Err(LoopError::invalid_configuration(format!(
                    "layer {i} is {:?}, expected {spec:?}",
                    layer.spec()
                )));
            }
        }
        Ok(Self { config, layers })
    }

    /// Shape parameters this network was built from.
    pub fn config(&self) -> NetworkConfig {
        self.config
    }

    /// Layers in evaluation order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Pipe `inputs` through every layer and return the sigmoid-bounded outputs.
    pub fn feed_forward(&self, inputs: &[f64]) -> LoopResult<Vec<f64>> {
        self.check_inputs(inputs)?;
        let mut signal = ArrayView1::from(inputs).to_owned();
        for layer in &self.layers {
            signal = layer.activate(signal.view())?;
        }
        Ok(signal.to_vec())
    }

    /// Like [`Cppn::feed_forward`], but keep every layer's output.
    pub fn layer_outputs(&self, inputs: &[f64]) -> LoopResult<Vec<Vec<f64>>> {
        self.check_inputs(inputs)?;
        let mut out = Vec::with_capacity(self.layers.len());
        let mut signal: Array1<f64> = ArrayView1::from(inputs).to_owned();
        for layer in &self.layers {
            signal = layer.activate(signal.view())?;
            out.push(signal.to_vec());
        }
        Ok(out)
    }

    fn check_inputs(&self, inputs: &[f64]) -> LoopResult<()> {
        if inputs.len() != self.config.num_inputs {
            return Err(LoopError::dimension_mismatch(
                self.config.num_inputs,
                inputs.len(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/network/cppn.rs"]
mod tests;
