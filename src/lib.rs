pub mod activation;
pub mod error;
pub mod loss;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid::{sigmoid, sigmoid_derivative_from_output};
pub use error::NetworkError;
pub use loss::mse::MseLoss;
pub use math::matrix::Matrix;
pub use network::config::NetworkConfig;
pub use network::network::{FeedforwardNetwork, Forward};
pub use train::trainer::train_epochs;
