//! # MNIST evaluation
//!
//! Compares the accuracy of the model saved by `mnist_train` with an
//! untrained network of the same shape on randomly drawn test images.
//!
//! `cargo run --release --example mnist_eval -- [data_dir] [model_path] [samples]`

use arenagrad_core::{ArenagradError, Network, NodeArena};
use arenagrad_data::{Dataset, MnistDataset, RandomSampler, Sampler};
use std::path::PathBuf;

fn evaluate(net: &mut Network, dataset: &MnistDataset, sampler: &RandomSampler) -> Result<usize, ArenagradError> {
    let mut tape = NodeArena::tape();
    let mut correct = 0;
    for index in sampler.iter(dataset.len()) {
        let (pixels, label) = dataset.get(index)?;
        tape.reset();
        if net.predict(&mut tape, &pixels) == label {
            correct += 1;
        }
    }
    Ok(correct)
}

fn main() -> Result<(), ArenagradError> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let data_dir = PathBuf::from(args.get(1).map(String::as_str).unwrap_or("mnist"));
    let model_path = args.get(2).cloned().unwrap_or_else(|| "mnist.bin".to_string());
    let samples: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(10_000);

    let dataset = MnistDataset::load(
        data_dir.join("t10k-images.idx3-ubyte"),
        data_dir.join("t10k-labels.idx1-ubyte"),
    )?;

    let mut trained = Network::load(&model_path)?;
    if trained.n_in() != dataset.image_size() {
        return Err(ArenagradError::InvalidDataset(format!(
            "model takes {} inputs but images have {} pixels",
            trained.n_in(),
            dataset.image_size()
        )));
    }
    let mut untrained = Network::new(&trained.configs(), &mut rand::thread_rng());

    let sampler = RandomSampler::new(true, Some(samples));
    let correct_trained = evaluate(&mut trained, &dataset, &sampler)?;
    let correct_random = evaluate(&mut untrained, &dataset, &sampler)?;

    println!("Evaluation on {} random test images:", samples);
    println!(
        "Pre-trained network accuracy: {:.2}% ({}/{})",
        100.0 * correct_trained as f64 / samples as f64,
        correct_trained,
        samples
    );
    println!(
        "Random network accuracy:      {:.2}% ({}/{})",
        100.0 * correct_random as f64 / samples as f64,
        correct_random,
        samples
    );
    Ok(())
}
