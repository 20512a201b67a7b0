use crate::foundation::error::{LoopError, LoopResult};
use crate::network::activation::Activation;

/// Shape parameters of a CPPN, fixed for the lifetime of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NetworkConfig {
    /// Length of the feature vector fed to the network.
    pub num_inputs: usize,
    /// Number of tanh layers, including the one fed by the inputs.
    pub num_hidden_layers: usize,
    /// Width of every hidden layer.
    pub num_hidden_neurons: usize,
    /// Number of sigmoid outputs (1 for grayscale, 3 for RGB).
    pub num_outputs: usize,
}

/// Shape and nonlinearity of one layer. Sizes are pre-bias.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerSpec {
    /// Input size, not counting the bias term.
    pub inputs: usize,
    /// Output size.
    pub outputs: usize,
    /// Applied after the affine transform.
    pub activation: Activation,
}

impl NetworkConfig {
    /// Reject configurations whose layer chain cannot be built.
    pub fn validate(&self) -> LoopResult<()> {
        let fields = [
            ("num_inputs", self.num_inputs),
            ("num_hidden_layers", self.num_hidden_layers),
            ("num_hidden_neurons", self.num_hidden_neurons),
            ("num_outputs", self.num_outputs),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(LoopError::invalid_configuration(format!(
                    "network {name} must be > 0"
                )));
            }
        }
        Ok(())
    }

    /// Derive the ordered layer list.
    ///
    /// The first layer maps the inputs to the hidden width, `num_hidden_layers - 1` further tanh
    /// layers keep that width, and a final sigmoid layer produces the outputs.
    pub fn layer_specs(&self) -> LoopResult<Vec<LayerSpec>> {
        self.validate()?;

        let mut specs = Vec::with_capacity(self.num_hidden_layers + 1);
        specs.push(LayerSpec {
            inputs: self.num_inputs,
            outputs: self.num_hidden_neurons,
            activation: Activation::Tanh,
        });
        for _ in 1..self.num_hidden_layers {
            specs.push(LayerSpec {
                inputs: self.num_hidden_neurons,
                outputs: self.num_hidden_neurons,
                activation: Activation::Tanh,
            });
        }
        specs.push(LayerSpec {
            inputs: self.num_hidden_neurons,
            outputs: self.num_outputs,
            activation: Activation::Sigmoid,
        });
        Ok(specs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/network/topology.rs"]
mod tests;
