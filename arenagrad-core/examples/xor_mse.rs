//! # XOR with mean squared error
//!
//! Trains a 2 -> 4 (tanh) -> 1 (linear) network on the four XOR points, one
//! example per update, then saves the weights to `xor.bin` for the
//! `xor_mse_load` example.
//!
//! `cargo run --example xor_mse -- [epochs] [learning_rate] [model_path]`

use arenagrad_core::nn::losses::mse;
use arenagrad_core::{Activation, ArenagradError, LayerConfig, Network, NodeArena, Optimizer, Sgd};

const X: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
const Y: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

fn main() -> Result<(), ArenagradError> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let epochs: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1000);
    let learning_rate: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0.1);
    let model_path = args.get(3).cloned().unwrap_or_else(|| "xor.bin".to_string());

    let configs = [
        LayerConfig::new(2, 4, Activation::Tanh),
        LayerConfig::new(4, 1, Activation::Linear),
    ];
    let mut net = Network::new(&configs, &mut rand::thread_rng());
    println!("{}", net);

    let mut tape = NodeArena::tape();
    let mut optimizer = Sgd::new(learning_rate);

    for epoch in 0..epochs {
        let mut total_loss = 0.0;
        for (x, &y) in X.iter().zip(&Y) {
            tape.reset();
            let inputs = tape.inputs(x);
            let out = net.forward(&mut tape, &inputs);
            let mut graph = net.graph(&mut tape);
            let loss = mse(&mut graph, &out, &[y]);
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
    for (x, &y) in X.iter().zip(&Y) {
        tape.reset();
        let inputs = tape.inputs(x);
        let out = net.forward(&mut tape, &inputs);
        let pred = net.graph(&mut tape).data(out[0]);
        println!(
            "Input: [{:.0}, {:.0}] | Target: {:.0} | Pred: {:.4}",
            x[0], x[1], y, pred
        );
    }

    net.save(&model_path)?;
    println!("Saved model to {}", model_path);
    Ok(())
}
