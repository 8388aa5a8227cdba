//! # MNIST training
//!
//! Trains a 784 -> 8 (relu) -> 10 (linear) network with cross-entropy, one
//! randomly drawn image per update, and saves the weights to `mnist.bin`.
//!
//! Expects `train-images.idx3-ubyte` and `train-labels.idx1-ubyte` under the
//! data directory (default `mnist`).
//!
//! `cargo run --release --example mnist_train -- [data_dir] [epochs] [learning_rate]`

use arenagrad_core::nn::losses::cross_entropy;
use arenagrad_core::{Activation, ArenagradError, LayerConfig, Network, NodeArena, Optimizer, Sgd};
use arenagrad_data::{Dataset, MnistDataset, RandomSampler, Sampler};
use std::path::PathBuf;

const SAMPLES_PER_EPOCH: usize = 100;

fn main() -> Result<(), ArenagradError> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let data_dir = PathBuf::from(args.get(1).map(String::as_str).unwrap_or("mnist"));
    let epochs: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(50);
    let learning_rate: f64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0.04);

    let dataset = MnistDataset::load(
        data_dir.join("train-images.idx3-ubyte"),
        data_dir.join("train-labels.idx1-ubyte"),
    )?;
    println!(
        "Loaded {} images of size {}x{}",
        dataset.len(),
        dataset.rows(),
        dataset.cols()
    );
    println!("{}", dataset.render_ascii(0)?);

    let configs = [
        LayerConfig::new(dataset.image_size(), 8, Activation::Relu),
        LayerConfig::new(8, 10, Activation::Linear),
    ];
    let mut net = Network::new(&configs, &mut rand::thread_rng());
    let mut tape = NodeArena::tape();
    let mut optimizer = Sgd::new(learning_rate);
    let sampler = RandomSampler::new(true, Some(SAMPLES_PER_EPOCH));

    for epoch in 0..epochs {
        let mut total_loss = 0.0;
        for index in sampler.iter(dataset.len()) {
            let (pixels, label) = dataset.get(index)?;
            tape.reset();
            let inputs = tape.inputs(&pixels);
            let out = net.forward(&mut tape, &inputs);
            let mut graph = net.graph(&mut tape);
            let loss = cross_entropy(&mut graph, &out, label);
            total_loss += graph.data(loss);
            graph.backward(loss);
            optimizer.step(&mut net);
            optimizer.zero_grad(&mut net);
        }
        println!(
            "Epoch: {} | Avg Loss: {:.4}",
            epoch,
            total_loss / sampler.len(dataset.len()) as f64
        );
    }

    net.save("mnist.bin")?;
    log::info!("saved model to mnist.bin");
    Ok(())
}
