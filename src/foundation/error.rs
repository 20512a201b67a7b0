/// Result alias used throughout the crate.
pub type LoopResult<T> = Result<T, LoopError>;

/// Errors produced while building a network, rendering frames, or handing them to a sink.
#[derive(thiserror::Error, Debug)]
pub enum LoopError {
    /// A feature vector's length disagrees with the layer or network input size.
    #[error("dimension mismatch: expected {expected} inputs, got {actual}")]
    DimensionMismatch {
        /// Configured (pre-bias) input size.
        expected: usize,
        /// Length of the vector that was supplied.
        actual: usize,
    },

    /// Rejected before any rendering work begins.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Reported by an output sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// Configuration JSON could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoopError {
    /// Build a [`LoopError::DimensionMismatch`].
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Build a [`LoopError::InvalidConfiguration`].
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`LoopError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`LoopError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
