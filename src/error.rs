//! Error types for network construction and evaluation.

use thiserror::Error;

/// The result type for fallible network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors reported when a network is misconfigured or fed a sample whose
/// dimensions do not match the declared architecture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The declared input size was zero.
    #[error("network input size must be at least 1")]
    ZeroInputSize,

    /// No hidden layers were configured.
    #[error("network needs at least one hidden layer before the output layer")]
    MissingHiddenLayer,

    /// A layer was configured with zero neurons. Hidden layers are indexed
    /// first, the output layer last.
    #[error("layer {index} must have at least 1 neuron")]
    EmptyLayer { index: usize },

    /// A sample's input length did not match the network input size.
    #[error("sample input length {got} does not match network input size {expected}")]
    InputSizeMismatch { expected: usize, got: usize },

    /// A sample's target length did not match the output layer size.
    #[error("sample target length {got} does not match output layer size {expected}")]
    TargetSizeMismatch { expected: usize, got: usize },
}
