use arenagrad_core::nn::losses;
use arenagrad_core::{Network, NodeArena, Optimizer, Sgd};

pub const XOR: [([f64; 2], usize); 4] = [
    ([0.0, 0.0], 0),
    ([0.0, 1.0], 1),
    ([1.0, 0.0], 1),
    ([1.0, 1.0], 0),
];

/// Sets up `env_logger` once; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One pass over `samples` with per-example cross-entropy updates.
/// Returns the average loss.
#[allow(dead_code)]
pub fn train_epoch_ce(
    net: &mut Network,
    tape: &mut NodeArena,
    optimizer: &mut Sgd,
    samples: &[([f64; 2], usize)],
) -> f64 {
    let mut total = 0.0;
    for (x, target) in samples {
        tape.reset();
        let inputs = tape.inputs(x);
        let out = net.forward(tape, &inputs);
        let mut graph = net.graph(tape);
        let loss = losses::cross_entropy(&mut graph, &out, *target);
        total += graph.data(loss);
        graph.backward(loss);
        optimizer.step(net);
        optimizer.zero_grad(net);
    }
    total / samples.len() as f64
}
