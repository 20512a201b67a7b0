//! Fixed-topology CPPN: activations, layers, and the network that chains them.

/// Scalar nonlinearities shared by layers.
pub mod activation;
/// The network itself.
pub mod cppn;
/// One bias-augmented affine transform plus activation.
pub mod layer;
/// Declarative layer shapes derived from a [`topology::NetworkConfig`].
pub mod topology;
