//! Utilities for training neural networks.

use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::feed_forward::{Network, Sample};

/// A builder that drives epochs of per-sample gradient descent over a
/// network.
#[derive(Debug)]
pub struct Trainer<R: Rng = StdRng> {
    network: Network,
    rng: R,
    logging: Logging,
}

impl Trainer<StdRng> {
    /// Creates a new Trainer instance for `network`.
    ///
    /// The trainer is initialized with some default values. These defaults
    /// are:
    ///
    /// * An entropy-seeded random generator for the per-epoch shuffle.
    /// * Logs on training completion.
    pub fn new(network: Network) -> Self {
        Trainer {
            network,
            rng: StdRng::from_entropy(),
            logging: Logging::Completion,
        }
    }
}

impl<R: Rng> Trainer<R> {
    /// Replaces the random generator used for the per-epoch shuffle. Pass
    /// a seeded generator to make the sample order reproducible.
    pub fn rng<S: Rng>(self, rng: S) -> Trainer<S> {
        Trainer {
            network: self.network,
            rng,
            logging: self.logging,
        }
    }

    /// Sets the type of logging to be emitted during training.
    pub fn logging(mut self, logging: Logging) -> Self {
        self.logging = logging;
        self
    }

    /// Runs `epochs` full passes over `samples` and returns the trained
    /// network.
    ///
    /// Each epoch visits an independently shuffled copy of `samples` (the
    /// caller's slice is never reordered) and feeds the samples through
    /// the network strictly one at a time; when backpropagation is enabled
    /// every `feed_forward` call updates the weights before the next
    /// sample is seen. Training runs to the configured epoch count; there
    /// is no other stop condition.
    pub fn train(mut self, epochs: usize, samples: &[Sample]) -> Result<Network> {
        let mut epoch_loss = 0.0;
        for epoch in 0..epochs {
            epoch_loss = 0.0;
            for sample in shuffled(samples, &mut self.rng) {
                let (_, loss) = self.network.feed_forward(&sample)?;
                epoch_loss += mean_abs(&loss);
            }
            epoch_loss /= samples.len() as f64;
            self.logging.epoch(epoch, epoch_loss);
        }
        self.logging.completion(epochs, epoch_loss);
        Ok(self.network)
    }
}

/// Returns an independently shuffled copy of `samples`, leaving the
/// original order untouched.
fn shuffled<R: Rng + ?Sized>(samples: &[Sample], rng: &mut R) -> Vec<Sample> {
    let mut copy = samples.to_vec();
    copy.shuffle(rng);
    copy
}

/// Computes the mean absolute value of a loss vector.
fn mean_abs(loss: &[f64]) -> f64 {
    loss.iter().map(|v| v.abs()).sum::<f64>() / loss.len() as f64
}

/// Logging frequency to use during training.
///
/// Messages are emitted through the `log` facade at info level.
#[derive(Copy, Clone, Debug)]
pub enum Logging {
    /// No logs will be emitted
    Silent,
    /// A summary will be emitted at completion
    Completion,
    /// A summary will be emitted after every `n` epochs
    Epochs(usize),
}

impl Logging {
    /// Performs logging for the finished `epoch`.
    fn epoch(&self, epoch: usize, mean_loss: f64) {
        if let Logging::Epochs(freq) = self {
            if *freq > 0 && (epoch + 1) % freq == 0 {
                info!("epoch {}: mean absolute loss = {}", epoch + 1, mean_loss);
            }
        }
    }

    /// Performs logging at the end of training.
    fn completion(&self, epochs: usize, mean_loss: f64) {
        if let Logging::Silent = self {
            return;
        }
        info!("training completed after {} epochs", epochs);
        info!("final mean absolute loss: {}", mean_loss);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activator::Activator;
    use crate::error::NetworkError;
    use crate::feed_forward::LayerSpec;

    fn number_samples(n: usize) -> Vec<Sample> {
        (0..n)
            .map(|i| Sample::new(vec![i as f64], vec![i as f64]))
            .collect()
    }

    #[test]
    fn shuffle_is_reproducible_for_a_fixed_seed() {
        let samples = number_samples(16);
        let a = shuffled(&samples, &mut StdRng::seed_from_u64(11));
        let b = shuffled(&samples, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_differs_across_seeds() {
        let samples = number_samples(16);
        let a = shuffled(&samples, &mut StdRng::seed_from_u64(11));
        let b = shuffled(&samples, &mut StdRng::seed_from_u64(12));
        assert_ne!(a, b);
    }

    #[test]
    fn shuffle_leaves_the_original_order_alone() {
        let samples = number_samples(16);
        let _ = shuffled(&samples, &mut StdRng::seed_from_u64(11));
        assert_eq!(samples, number_samples(16));
    }

    #[test]
    fn train_propagates_sample_validation_errors() {
        let mut rng = StdRng::seed_from_u64(13);
        let network = Network::new(
            2,
            &[LayerSpec::new(2, Activator::Sigmoid)],
            LayerSpec::new(1, Activator::Sigmoid),
            0.1,
            &mut rng,
        )
        .unwrap();
        let samples = vec![Sample::new(vec![0.0], vec![0.0])];
        let err = Trainer::new(network)
            .rng(StdRng::seed_from_u64(13))
            .logging(Logging::Silent)
            .train(1, &samples)
            .unwrap_err();
        assert_eq!(
            err,
            NetworkError::InputSizeMismatch {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn trains_xor_below_loss_threshold() {
        let samples = vec![
            Sample::new(vec![0.0, 0.0], vec![0.0]),
            Sample::new(vec![0.0, 1.0], vec![1.0]),
            Sample::new(vec![1.0, 0.0], vec![1.0]),
            Sample::new(vec![1.0, 1.0], vec![0.0]),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        let network = Network::new(
            2,
            &[LayerSpec::new(8, Activator::ReLU)],
            LayerSpec::new(1, Activator::Sigmoid),
            0.1,
            &mut rng,
        )
        .unwrap();
        let mut network = Trainer::new(network)
            .rng(StdRng::seed_from_u64(43))
            .logging(Logging::Silent)
            .train(10_000, &samples)
            .unwrap();

        network.disable_backpropagation();
        let mut total = 0.0;
        for sample in &samples {
            let (_, loss) = network.feed_forward(sample).unwrap();
            total += loss[0].abs();
        }
        let mean_loss = total / samples.len() as f64;
        assert!(mean_loss < 0.1, "mean absolute loss was {}", mean_loss);
    }
}
