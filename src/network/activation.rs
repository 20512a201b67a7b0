/// Nonlinearity applied elementwise after a layer's affine transform.
///
/// Pure and stateless; a single value is shared by every layer that uses it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Activation {
    /// `1 / (1 + e^-x)`, range `(0, 1)`.
    Sigmoid,
    /// Hyperbolic tangent, range `(-1, 1)`.
    Tanh,
}

impl Activation {
    /// Evaluate the function at `x`.
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sigmoid => sigmoid(x),
            Self::Tanh => x.tanh(),
        }
    }

    /// Stable lowercase name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sigmoid => "sigmoid",
            Self::Tanh => "tanh",
        }
    }
}

/// Logistic sigmoid.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
#[path = "../../tests/unit/network/activation.rs"]
mod tests;
