use std::fmt;

use itertools::{multizip, Itertools};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activator::Activator;
use crate::neuron::Neuron;
use crate::vector;

/// An ordered collection of neurons sharing one input dimensionality.
///
/// The layer fans inputs out to every neuron on the way forward and sums
/// the neurons' backward contributions into a single error vector for the
/// previous layer.
#[derive(Debug, Serialize, Deserialize)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `neurons` freshly initialized neurons, each with
    /// `input_size` weights and the shared `learning_rate` and `activator`.
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        neurons: usize,
        learning_rate: f64,
        activator: Activator,
        rng: &mut R,
    ) -> Self {
        Layer {
            neurons: (0..neurons)
                .map(|_| Neuron::new(input_size, learning_rate, activator, rng))
                .collect(),
        }
    }

    #[cfg(test)]
    pub fn from_neurons(neurons: Vec<Neuron>) -> Self {
        Layer { neurons }
    }

    /// The number of neurons in this layer.
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// The input dimensionality shared by every neuron in this layer.
    pub fn input_len(&self) -> usize {
        self.neurons[0].input_len()
    }

    /// Feeds `inputs` to every neuron in order, collecting their outputs.
    pub fn forward(&self, inputs: &[f64]) -> Vec<f64> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }

    /// Runs every neuron's gradient-descent step and folds the per-neuron
    /// backward contributions into one error vector sized for the previous
    /// layer.
    ///
    /// `errors[i]` and `outputs[i]` must correspond to neuron `i`'s forward
    /// result for these `inputs`.
    pub fn backward(&mut self, errors: &[f64], inputs: &[f64], outputs: &[f64]) -> Vec<f64> {
        let mut accumulated = vec![0.0; inputs.len()];
        for (neuron, &error, &output) in
            multizip((self.neurons.iter_mut(), errors.iter(), outputs.iter()))
        {
            let contributions = neuron.backward(error, inputs, output);
            vector::sum_assign(&mut accumulated, &contributions);
        }
        accumulated
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Layer{{neurons={}, [{}]}}",
            self.neurons.len(),
            self.neurons.iter().join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_layer() -> Layer {
        Layer::from_neurons(vec![
            Neuron::with_parameters(vec![0.5, -0.25], 0.1, 0.1, Activator::ReLU),
            Neuron::with_parameters(vec![0.2, 0.3], -0.1, 0.1, Activator::ReLU),
        ])
    }

    #[test]
    fn size_and_input_len_report_dimensions() {
        let mut rng = StdRng::seed_from_u64(3);
        let layer = Layer::new(5, 3, 0.1, Activator::Sigmoid, &mut rng);
        assert_eq!(layer.size(), 3);
        assert_eq!(layer.input_len(), 5);
    }

    #[test]
    fn forward_preserves_neuron_order() {
        let layer = fixed_layer();
        let outputs = layer.forward(&[1.0, 2.0]);
        assert_eq!(outputs.len(), 2);
        assert_relative_eq!(outputs[0], 0.1, epsilon = 1e-12);
        assert_relative_eq!(outputs[1], 0.7, epsilon = 1e-12);
    }

    #[test]
    fn backward_sums_neuron_contributions() {
        let mut layer = fixed_layer();
        let back = layer.backward(&[0.2, -0.1], &[1.0, 2.0], &[0.1, 0.7]);
        // Neuron 0 contributes [0.104, -0.042], neuron 1 [-0.019, -0.028].
        assert_eq!(back.len(), 2);
        assert_relative_eq!(back[0], 0.085, epsilon = 1e-12);
        assert_relative_eq!(back[1], -0.07, epsilon = 1e-12);
    }
}
