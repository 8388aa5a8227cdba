use crate::autograd::Graph;
use crate::value::{Node, Op, Value};

/// Records `a ^ b`.
pub fn pow_op(graph: &mut Graph<'_>, a: Value, b: Value) -> Value {
    let data = graph.data(a).powf(graph.data(b));
    graph.record(Node::binary(data, Op::Pow, a, b))
}

/// y = a^b
/// dy/da = b * a^(b-1)
/// dy/db = y * ln(a), only defined for a > 0.
///
/// For a <= 0 the exponent's gradient is *set* to NaN rather than accumulated,
/// and the NaN flows on through whatever consumes it. Callers raising a
/// possibly negative base to a constant exponent (e.g. squared error) are not
/// affected because nothing reads the constant's gradient.
pub(crate) fn pow_backward(graph: &mut Graph<'_>, out: f64, grad: f64, a: Value, b: Value) {
    let a_data = graph.data(a);
    let b_data = graph.data(b);
    graph.accumulate(a, b_data * a_data.powf(b_data - 1.0) * grad);

    if a_data > 0.0 {
        graph.accumulate(b, out * a_data.ln() * grad);
    } else {
        // TODO: decide whether a non-positive base should be a hard error once
        // a caller actually needs the exponent gradient in that region.
        graph.set_grad(b, f64::NAN);
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
