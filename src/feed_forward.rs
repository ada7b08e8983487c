//! A [Feedforward neural network]
//! (https://en.wikipedia.org/wiki/Feedforward_neural_network) built from
//! individual neurons, evaluated and trained one sample at a time.
//!
//! # Example
//!
//! Let's train a simple neural network to compute the XOR function:
//!
//! ```
//! use neural::activator::Activator;
//! use neural::feed_forward::{LayerSpec, Network, Sample};
//! use neural::trainer::{Logging, Trainer};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! // Create examples of the XOR function
//! let samples = vec![
//!     Sample::new(vec![0.0, 0.0], vec![0.0]),
//!     Sample::new(vec![0.0, 1.0], vec![1.0]),
//!     Sample::new(vec![1.0, 0.0], vec![1.0]),
//!     Sample::new(vec![1.0, 1.0], vec![0.0]),
//! ];
//!
//! // Build a 2-4-1 network and train it using those examples
//! let mut rng = StdRng::seed_from_u64(17);
//! let network = Network::new(
//!     2,
//!     &[LayerSpec::new(4, Activator::Sigmoid)],
//!     LayerSpec::new(1, Activator::Sigmoid),
//!     0.3,
//!     &mut rng,
//! )
//! .unwrap();
//! let mut network = Trainer::new(network)
//!     .rng(StdRng::seed_from_u64(18))
//!     .logging(Logging::Silent)
//!     .train(10_000, &samples)
//!     .unwrap();
//!
//! // And verify the network correctly computes XOR!
//! network.disable_backpropagation();
//! for sample in &samples {
//!     let (output, _) = network.feed_forward(sample).unwrap();
//!     assert_eq!(output[0] > 0.5, sample.target[0] > 0.5);
//! }
//! ```

use std::fmt;

use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activator::Activator;
use crate::error::{NetworkError, Result};
use crate::layer::Layer;
use crate::vector;

/// One labelled training example: an input vector and the target vector
/// the network should learn to produce for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub inputs: Vec<f64>,
    pub target: Vec<f64>,
}

impl Sample {
    pub fn new(inputs: Vec<f64>, target: Vec<f64>) -> Self {
        Sample { inputs, target }
    }
}

/// The shape of one layer: how many neurons it holds and the activation
/// they share. The input dimensionality is derived from the preceding
/// layer when the network is built.
#[derive(Copy, Clone, Debug)]
pub struct LayerSpec {
    neurons: usize,
    activator: Activator,
}

impl LayerSpec {
    pub fn new(neurons: usize, activator: Activator) -> Self {
        LayerSpec { neurons, activator }
    }
}

/// A feedforward neural network: a chain of hidden layers feeding one
/// output layer.
#[derive(Debug, Serialize, Deserialize)]
pub struct Network {
    hidden_layers: Vec<Layer>,
    output_layer: Layer,
    backpropagation: bool,
}

impl Network {
    /// Creates a new network with randomly initialized weights, drawn from
    /// the provided `rng`.
    ///
    /// Layers are built left to right: the first hidden layer reads
    /// `input_size` values, every later layer reads the previous layer's
    /// outputs, and the output layer reads the last hidden layer's
    /// outputs. All neurons share the same `learning_rate`. The network
    /// starts with backpropagation enabled.
    ///
    /// Returns an error when `input_size` is zero, when `hidden` is empty,
    /// or when any layer is declared with zero neurons.
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        hidden: &[LayerSpec],
        output: LayerSpec,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if input_size == 0 {
            return Err(NetworkError::ZeroInputSize);
        }
        if hidden.is_empty() {
            return Err(NetworkError::MissingHiddenLayer);
        }
        for (index, spec) in hidden.iter().chain(Some(&output)).enumerate() {
            if spec.neurons == 0 {
                return Err(NetworkError::EmptyLayer { index });
            }
        }

        let mut hidden_layers = Vec::with_capacity(hidden.len());
        let mut fan_in = input_size;
        for spec in hidden {
            hidden_layers.push(Layer::new(
                fan_in,
                spec.neurons,
                learning_rate,
                spec.activator,
                rng,
            ));
            fan_in = spec.neurons;
        }
        let output_layer = Layer::new(fan_in, output.neurons, learning_rate, output.activator, rng);

        Ok(Network {
            hidden_layers,
            output_layer,
            backpropagation: true,
        })
    }

    /// Returns the input vector length this network expects.
    pub fn input_len(&self) -> usize {
        self.hidden_layers[0].input_len()
    }

    /// Returns the number of values in the network's output vector.
    pub fn output_len(&self) -> usize {
        self.output_layer.size()
    }

    /// Runs one full forward pass for `sample`, returning the output
    /// vector together with the loss vector `target - output`.
    ///
    /// When backpropagation is enabled the same call also propagates the
    /// loss back through the layers in reverse order, updating every
    /// neuron's weights and bias. With backpropagation disabled this is
    /// pure inference and no network state changes.
    pub fn feed_forward(&mut self, sample: &Sample) -> Result<(Vec<f64>, Vec<f64>)> {
        if sample.inputs.len() != self.input_len() {
            return Err(NetworkError::InputSizeMismatch {
                expected: self.input_len(),
                got: sample.inputs.len(),
            });
        }
        if sample.target.len() != self.output_layer.size() {
            return Err(NetworkError::TargetSizeMismatch {
                expected: self.output_layer.size(),
                got: sample.target.len(),
            });
        }

        // Every hidden layer's input and output are kept around for the
        // backward pass.
        let mut inputs = Vec::with_capacity(self.hidden_layers.len() + 1);
        let mut outputs = Vec::with_capacity(self.hidden_layers.len());
        inputs.push(sample.inputs.clone());
        for (i, layer) in self.hidden_layers.iter().enumerate() {
            let output = layer.forward(&inputs[i]);
            outputs.push(output.clone());
            inputs.push(output);
        }

        let final_output = self.output_layer.forward(&inputs[self.hidden_layers.len()]);
        let loss = vector::subtract(&sample.target, &final_output);

        if self.backpropagation {
            let mut errors = self.output_layer.backward(
                &loss,
                &inputs[self.hidden_layers.len()],
                &final_output,
            );
            for (i, layer) in self.hidden_layers.iter_mut().enumerate().rev() {
                errors = layer.backward(&errors, &inputs[i], &outputs[i]);
            }
        }

        Ok((final_output, loss))
    }

    /// Turns the backward pass back on: `feed_forward` resumes updating
    /// weights.
    pub fn enable_backpropagation(&mut self) {
        self.backpropagation = true;
    }

    /// Turns the backward pass off: `feed_forward` becomes inference-only.
    pub fn disable_backpropagation(&mut self) {
        self.backpropagation = false;
    }

    /// Returns a full per-neuron dump of the network: every layer's
    /// neurons with their weights, bias, activation and learning rate, one
    /// layer per line.
    pub fn describe(&self) -> String {
        let mut lines = Vec::with_capacity(self.hidden_layers.len() + 1);
        for (i, layer) in self.hidden_layers.iter().enumerate() {
            lines.push(format!("Hidden{}: {}", i, layer));
        }
        lines.push(format!("Output: {}", self.output_layer));
        lines.join("\n")
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Network{{layers={}, architecture=[{}, Output({} neurons)]}}",
            self.hidden_layers.len() + 1,
            self.hidden_layers
                .iter()
                .enumerate()
                .map(|(i, layer)| format!("Hidden{}({} neurons)", i, layer.size()))
                .join(", "),
            self.output_layer.size()
        )
    }
}
