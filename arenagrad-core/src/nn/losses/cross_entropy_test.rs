use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::nn::losses::softmax;
use crate::value::NodeArena;
use approx::assert_relative_eq;

#[test]
fn test_cross_entropy_matches_softmax() {
    let mut params = NodeArena::params();
    let mut tape = NodeArena::tape();
    let mut g = Graph::new(&mut params, &mut tape);
    let logits = g.inputs(&[0.5, -1.25, 2.0, 0.0]);
    let probs = softmax(&mut g, &logits);
    for target in 0..logits.len() {
        let loss = cross_entropy(&mut g, &logits, target);
        let expected = -g.data(probs[target]).ln();
        assert_relative_eq!(g.data(loss), expected, epsilon = 1e-9);
    }
}

#[test]
fn test_cross_entropy_gradient_is_softmax_minus_onehot() {
    let mut params = NodeArena::params();
    let mut tape = NodeArena::tape();
    let mut g = Graph::new(&mut params, &mut tape);
    let raw = [0.2, 1.5, -0.7];
    let logits = g.inputs(&raw);
    let loss = cross_entropy(&mut g, &logits, 1);
    g.backward(loss);

    let total: f64 = raw.iter().map(|x| x.exp()).sum();
    for (i, &x) in raw.iter().enumerate() {
        let p = x.exp() / total;
        let onehot = if i == 1 { 1.0 } else { 0.0 };
        assert_relative_eq!(g.grad(logits[i]), p - onehot, epsilon = 1e-12);
    }
}

#[test]
fn test_cross_entropy_grad_check() -> Result<(), GradCheckError> {
    check_grad(
        |g, x| cross_entropy(g, x, 2),
        &[0.4, -0.3, 0.9, 0.05],
        1e-6,
        1e-9,
        1e-6,
    )
}

#[test]
#[should_panic(expected = "Target index 3 out of range for 3 classes")]
fn test_target_out_of_range_is_fatal() {
    let mut params = NodeArena::params();
    let mut tape = NodeArena::tape();
    let mut g = Graph::new(&mut params, &mut tape);
    let logits = g.inputs(&[0.0, 1.0, 2.0]);
    let _ = cross_entropy(&mut g, &logits, 3);
}
