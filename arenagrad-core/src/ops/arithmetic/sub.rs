use crate::autograd::Graph;
use crate::value::{Node, Op, Value};

/// Records `a - b`.
pub fn sub_op(graph: &mut Graph<'_>, a: Value, b: Value) -> Value {
    let data = graph.data(a) - graph.data(b);
    graph.record(Node::binary(data, Op::Sub, a, b))
}

pub(crate) fn sub_backward(graph: &mut Graph<'_>, grad: f64, a: Value, b: Value) {
    graph.accumulate(a, grad);
    graph.accumulate(b, -grad);
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
