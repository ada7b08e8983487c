use neural::activator::Activator;
use neural::feed_forward::{LayerSpec, Network, Sample};
use neural::trainer::{Logging, Trainer};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let samples = vec![
        Sample::new(vec![0.0, 0.0], vec![0.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![1.0, 1.0], vec![0.0]),
    ];

    let mut rng = StdRng::from_entropy();
    let network = Network::new(
        2,
        &[LayerSpec::new(3, Activator::ReLU)],
        LayerSpec::new(1, Activator::Sigmoid),
        0.1,
        &mut rng,
    )?;
    let mut network = Trainer::new(network)
        .logging(Logging::Epochs(1_000))
        .train(10_000, &samples)?;

    network.disable_backpropagation();
    for sample in &samples {
        let (output, loss) = network.feed_forward(sample)?;
        println!(
            "{:?} -> {:.4} (target {}, loss {:.4})",
            sample.inputs, output[0], sample.target[0], loss[0]
        );
    }
    println!("{}", network);

    Ok(())
}
