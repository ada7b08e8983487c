//! Fully-connected feedforward neural networks built neuron by neuron.
//!
//! Every neuron owns its weights and performs its own gradient-descent
//! update; there is no matrix math anywhere. Networks are trained one
//! sample at a time, with a freshly shuffled sample order each epoch. See
//! the [`feed_forward`] module for a complete example.

pub mod activator;
pub mod error;
pub mod feed_forward;
pub mod trainer;
pub mod vector;

mod layer;
mod neuron;
