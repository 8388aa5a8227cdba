//! # XOR as two-class classification
//!
//! A 2 -> 16 (tanh) -> 2 (linear) network trained with softmax cross-entropy
//! and plain SGD. Prints the class probabilities for each point at the end.
//!
//! `cargo run --example xor_ce -- [epochs] [learning_rate]`

use arenagrad_core::nn::losses::{argmax, cross_entropy, softmax};
use arenagrad_core::{Activation, LayerConfig, Network, NodeArena, Optimizer, Sgd};

const X: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
const Y: [usize; 4] = [0, 1, 1, 0];

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let epochs: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(5000);
    let learning_rate: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0.1);

    let configs = [
        LayerConfig::new(2, 16, Activation::Tanh),
        LayerConfig::new(16, 2, Activation::Linear),
    ];
    let mut net = Network::new(&configs, &mut rand::thread_rng());
    let mut tape = NodeArena::tape();
    let mut optimizer = Sgd::new(learning_rate);
    log::info!(
        "training {} parameters for {} epochs at lr {}",
        net.parameter_count(),
        epochs,
        optimizer.learning_rate()
    );

    for epoch in 0..epochs {
        let mut total_loss = 0.0;
        for (x, &target) in X.iter().zip(&Y) {
            tape.reset();
            let inputs = tape.inputs(x);
            let out = net.forward(&mut tape, &inputs);
            let mut graph = net.graph(&mut tape);
            let loss = cross_entropy(&mut graph, &out, target);
            total_loss += graph.data(loss);
            graph.backward(loss);
            optimizer.step(&mut net);
            optimizer.zero_grad(&mut net);
        }
        if epoch % 500 == 0 {
            println!("Epoch {:4} | Avg Loss: {:.6}", epoch, total_loss / X.len() as f64);
        }
    }

    println!("\n--- Final Results ---");
    for (x, &target) in X.iter().zip(&Y) {
        tape.reset();
        let inputs = tape.inputs(x);
        let out = net.forward(&mut tape, &inputs);
        let mut graph = net.graph(&mut tape);
        let probs = softmax(&mut graph, &out);
        let p = graph.data_of(&probs);
        println!(
            "Input: [{:.0}, {:.0}] | Target: {} | Pred: {} | P = [{:.4}, {:.4}]",
            x[0],
            x[1],
            target,
            argmax(&graph, &out),
            p[0],
            p[1]
        );
    }
}
