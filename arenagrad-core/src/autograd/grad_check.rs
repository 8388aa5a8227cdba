use super::graph::Graph;
use crate::value::{NodeArena, Value};
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check needs at least one input")]
    NoInputs,
}

/// Evaluates `func` on fresh arenas and returns the root's data together with
/// the gradient of every input leaf.
fn evaluate<F>(func: &F, inputs: &[f64], with_backward: bool) -> (f64, Vec<f64>)
where
    F: Fn(&mut Graph<'_>, &[Value]) -> Value,
{
    let mut params = NodeArena::params();
    let mut tape = NodeArena::tape();
    let mut graph = Graph::new(&mut params, &mut tape);
    let leaves = graph.inputs(inputs);
    let root = func(&mut graph, &leaves);
    let out = graph.data(root);
    if !with_backward {
        return (out, Vec::new());
    }
    graph.backward(root);
    let grads = leaves.iter().map(|&v| graph.grad(v)).collect();
    (out, grads)
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` receives one tape leaf per entry of `inputs` and returns the scalar
/// root. A gradient passes when it is within `abs_tol` of the numerical one or
/// relatively equal within `rel_tol`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph<'_>, &[Value]) -> Value,
{
    if inputs.is_empty() {
        return Err(GradCheckError::NoInputs);
    }

    // --- 1. Analytical pass ---
    let (_, analytical) = evaluate(&func, inputs, true);

    // --- 2. Numerical pass, one input at a time ---
    let mut perturbed = inputs.to_vec();
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let original = perturbed[i];
        perturbed[i] = original + epsilon;
        let (loss_plus, _) = evaluate(&func, &perturbed, false);
        perturbed[i] = original - epsilon;
        let (loss_minus, _) = evaluate(&func, &perturbed, false);
        perturbed[i] = original;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > abs_tol
            && !relative_eq!(analytical_grad, numerical_grad, epsilon = abs_tol, max_relative = rel_tol)
        {
            log::debug!(
                "grad check mismatch on input {}: analytical {} numerical {}",
                i,
                analytical_grad,
                numerical_grad
            );
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}
