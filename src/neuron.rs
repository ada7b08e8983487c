use std::fmt;

use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activator::Activator;

/// A single neuron: one weight per input, a bias, and the activation that
/// shapes its output.
///
/// The neuron owns its gradient-descent step: `backward` mutates the
/// weights and bias in place, and nothing else ever rebuilds them.
#[derive(Debug, Serialize, Deserialize)]
pub struct Neuron {
    weights: Vec<f64>,
    bias: f64,
    activator: Activator,
    learning_rate: f64,
}

impl Neuron {
    /// Creates a neuron with `size` weights. The weights and the bias are
    /// drawn independently and uniformly from `[-0.5, 0.5)`.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        learning_rate: f64,
        activator: Activator,
        rng: &mut R,
    ) -> Self {
        Neuron {
            weights: (0..size).map(|_| rng.gen_range(-0.5..0.5)).collect(),
            bias: rng.gen_range(-0.5..0.5),
            activator,
            learning_rate,
        }
    }

    #[cfg(test)]
    pub fn with_parameters(
        weights: Vec<f64>,
        bias: f64,
        learning_rate: f64,
        activator: Activator,
    ) -> Self {
        Neuron {
            weights,
            bias,
            activator,
            learning_rate,
        }
    }

    /// The number of inputs this neuron expects.
    pub fn input_len(&self) -> usize {
        self.weights.len()
    }

    /// Computes the weighted sum of `inputs` plus the bias, passed through
    /// the activation function. No side effects.
    pub fn forward(&self, inputs: &[f64]) -> f64 {
        assert_eq!(inputs.len(), self.weights.len());
        let sum: f64 = self.weights.iter().zip(inputs).map(|(w, x)| w * x).sum();
        self.activator.f(sum + self.bias)
    }

    /// Applies one gradient-descent step for the `error` assigned to this
    /// neuron's output, given the `inputs` and `output` of the matching
    /// forward call. Returns the error contributions to hand to the
    /// previous layer.
    ///
    /// The returned contributions are computed from the weights *after*
    /// the update, not the weights the forward call saw.
    pub fn backward(&mut self, error: f64, inputs: &[f64], output: f64) -> Vec<f64> {
        assert_eq!(inputs.len(), self.weights.len());
        let slope = self.activator.fprime(output);
        for (weight, input) in self.weights.iter_mut().zip(inputs) {
            *weight += error * input * slope * self.learning_rate;
        }
        self.bias += error * slope * self.learning_rate;
        self.weights
            .iter()
            .map(|weight| error * weight * slope)
            .collect()
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Neuron{{weights=[{}], bias={:.4}, activation={}, lr={:.4}}}",
            self.weights.iter().map(|w| format!("{:.4}", w)).join(", "),
            self.bias,
            self.activator,
            self.learning_rate
        )
    }
}
