//! Activation function types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// [Activation function](https://en.wikipedia.org/wiki/Activation_function)
/// types.
///
/// Every variant is pure and stateless, so a single value can be shared by
/// all neurons of a layer.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Activator {
    /// Rectified Linear Unit
    ReLU,
    /// Sigmoid function
    Sigmoid,
}

impl Activator {
    /// Evaluates `f(x)` for the selected activation function.
    pub fn f(&self, x: f64) -> f64 {
        match self {
            Activator::ReLU => if x > 0.0 { x } else { 0.0 },
            Activator::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }

    /// Evaluates the derivative `f'(x)`, where `x = f^{-1}(y)`.
    ///
    /// Note that this function takes in the *output* of the activation
    /// function, rather than the input. This is an optimization that means we
    /// don't have to store the intermediate results before activation.
    pub fn fprime(&self, y: f64) -> f64 {
        match self {
            Activator::ReLU => if y > 0.0 { 1.0 } else { 0.0 },
            Activator::Sigmoid => y * (1.0 - y),
        }
    }
}

impl fmt::Display for Activator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activator::ReLU => "ReLU",
            Activator::Sigmoid => "Sigmoid",
        };
        f.write_str(name)
    }
}
