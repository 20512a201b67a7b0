use super::*;
use ndarray::{arr1, arr2};

use crate::foundation::rng::seeded_rng;
use crate::network::activation::sigmoid;

#[test]
fn activate_appends_negative_bias() {
    // 2 inputs + bias row, 1 output.
    let layer = Layer::from_weights(arr2(&[[1.0], [2.0], [3.0]]), Activation::Tanh).unwrap();
    let out = layer.activate(arr1(&[0.5, 0.25]).view()).unwrap();
    let expected = (0.5 * 1.0 + 0.25 * 2.0 - 3.0f64).tanh();
    assert_eq!(out.len(), 1);
    assert!((out[0] - expected).abs() < 1e-12);
}

#[test]
fn activate_accepts_strided_views() {
    let layer = Layer::from_weights(arr2(&[[1.0], [2.0], [3.0]]), Activation::Tanh).unwrap();
    let inputs = arr2(&[[0.5, 9.0], [0.25, 9.0]]);
    let out = layer.activate(inputs.column(0)).unwrap();
    let expected = (0.5 * 1.0 + 0.25 * 2.0 - 3.0f64).tanh();
    assert!((out[0] - expected).abs() < 1e-12);
}

#[test]
fn activate_uses_transposed_weights() {
    let weights = arr2(&[[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]);
    let layer = Layer::from_weights(weights, Activation::Sigmoid).unwrap();
    let out = layer.activate(arr1(&[2.0, -2.0]).view()).unwrap();
    assert!((out[0] - sigmoid(2.0)).abs() < 1e-12);
    assert!((out[1] - sigmoid(-2.0)).abs() < 1e-12);
}

#[test]
fn activate_rejects_wrong_length() {
    let layer = Layer::from_weights(arr2(&[[1.0], [2.0], [3.0]]), Activation::Tanh).unwrap();
    let err = layer.activate(arr1(&[1.0]).view()).unwrap_err();
    assert!(matches!(
        err,
        LoopError::DimensionMismatch {
            expected: 2,
            actual: 1
        }
    ));
}

#[test]
fn from_weights_rejects_degenerate_shapes() {
    assert!(Layer::from_weights(Array2::zeros((1, 3)), Activation::Tanh).is_err());
    assert!(Layer::from_weights(Array2::zeros((3, 0)), Activation::Tanh).is_err());
}

#[test]
fn random_layer_has_bias_row_and_is_seeded() {
    let spec = LayerSpec {
        inputs: 5,
        outputs: 24,
        activation: Activation::Tanh,
    };
    let a = Layer::random(spec, &mut seeded_rng(9)).unwrap();
    let b = Layer::random(spec, &mut seeded_rng(9)).unwrap();
    let c = Layer::random(spec, &mut seeded_rng(10)).unwrap();
    assert_eq!(a.weights().dim(), (6, 24));
    assert_eq!(a.spec(), spec);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn random_weights_follow_requested_scale() {
    let spec = LayerSpec {
        inputs: 99,
        outputs: 100,
        activation: Activation::Tanh,
    };
    let layer = Layer::random(spec, &mut seeded_rng(1)).unwrap();
    let n = layer.weights().len() as f64;
    let mean = layer.weights().sum() / n;
    let var = layer.weights().mapv(|w| (w - mean) * (w - mean)).sum() / n;
    assert!(mean.abs() < 0.02, "mean {mean}");
    assert!((var.sqrt() - WEIGHT_SCALE).abs() < 0.02, "std {}", var.sqrt());
}
