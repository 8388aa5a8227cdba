use crate::autograd::Graph;
use crate::value::{Node, Op, Value};

/// Records `-a`.
pub fn neg_op(graph: &mut Graph<'_>, a: Value) -> Value {
    let data = -graph.data(a);
    graph.record(Node::unary(data, Op::Neg, a))
}

pub(crate) fn neg_backward(graph: &mut Graph<'_>, grad: f64, a: Value) {
    graph.accumulate(a, -grad);
}
