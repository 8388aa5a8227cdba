use crate::autograd::Graph;
use crate::value::{Node, Op, Value};

/// Records `max(0, a)`.
pub fn relu_op(graph: &mut Graph<'_>, a: Value) -> Value {
    let data = graph.data(a).max(0.0);
    graph.record(Node::unary(data, Op::Relu, a))
}

/// Passes the gradient through only where `a > 0`; blocked at and below zero.
pub(crate) fn relu_backward(graph: &mut Graph<'_>, grad: f64, a: Value) {
    if graph.data(a) > 0.0 {
        graph.accumulate(a, grad);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::grad_check::{check_grad, GradCheckError};
    use crate::value::NodeArena;

    #[test]
    fn test_relu_forward() {
        let mut params = NodeArena::params();
        let mut tape = NodeArena::tape();
        let mut g = Graph::new(&mut params, &mut tape);
        let xs = g.inputs(&[-1.0, 0.0, 2.5]);
        let ys: Vec<_> = xs.iter().map(|&x| relu_op(&mut g, x)).collect();
        assert_eq!(g.data_of(&ys), vec![0.0, 0.0, 2.5]);
    }

    #[test]
    fn test_relu_backward_blocks_at_and_below_zero() {
        let mut params = NodeArena::params();
        let mut tape = NodeArena::tape();
        let mut g = Graph::new(&mut params, &mut tape);
        let xs = g.inputs(&[-1.0, 0.0, 2.5]);
        let ys: Vec<_> = xs.iter().map(|&x| g.relu(x)).collect();
        let total = g.sum(&ys);
        g.backward(total);
        let grads: Vec<f64> = xs.iter().map(|&x| g.grad(x)).collect();
        assert_eq!(grads, vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_relu_grad_check_away_from_kink() -> Result<(), GradCheckError> {
        check_grad(|g, x| g.relu(x[0]), &[0.75], 1e-6, 1e-9, 1e-6)?;
        check_grad(|g, x| g.relu(x[0]), &[-0.75], 1e-6, 1e-9, 1e-6)
    }
}
