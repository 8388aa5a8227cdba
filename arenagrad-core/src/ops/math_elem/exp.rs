use crate::autograd::Graph;
use crate::value::{Node, Op, Value};

/// Records `e^a`.
pub fn exp_op(graph: &mut Graph<'_>, a: Value) -> Value {
    let data = graph.data(a).exp();
    graph.record(Node::unary(data, Op::Exp, a))
}

/// d(e^a)/da = e^a, which is the node's own output.
pub(crate) fn exp_backward(graph: &mut Graph<'_>, out: f64, grad: f64, a: Value) {
    graph.accumulate(a, out * grad);
}
