//! # Loading a saved XOR model
//!
//! Reads the file written by the `xor_mse` example and evaluates it.
//!
//! `cargo run --example xor_mse_load -- [model_path]`

use arenagrad_core::{ArenagradError, Network, NodeArena};

const X: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
const Y: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

fn main() -> Result<(), ArenagradError> {
    env_logger::init();
    let model_path = std::env::args().nth(1).unwrap_or_else(|| "xor.bin".to_string());

    let mut net = match Network::load(&model_path) {
        Ok(net) => net,
        Err(e) => {
            log::error!("failed to load {}: {}", model_path, e);
            return Err(e);
        }
    };

    let mut tape = NodeArena::tape();
    for (x, &y) in X.iter().zip(&Y) {
        let inputs = tape.inputs(x);
        let out = net.forward(&mut tape, &inputs);
        let pred = net.graph(&mut tape).data(out[0]);
        println!(
            "Input: [{:.0}, {:.0}] | Target: {:.0} | Pred: {:.4}",
            x[0], x[1], y, pred
        );
        tape.reset();
    }

    println!("{}", net);
    Ok(())
}
