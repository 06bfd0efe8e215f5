use serde::{Deserialize, Serialize};

use crate::error::NetworkError;

/// The immutable architecture and hyperparameter description of a network.
///
/// Fields:
/// - `input_size`    — number of input neurons
/// - `hidden_size`   — number of neurons in the single hidden layer
/// - `output_size`   — number of output neurons
/// - `learning_rate` — scalar step size for weight updates, expected in (0, 1]
///
/// A `NetworkConfig` can be saved to / loaded from JSON independently of any
/// trained weights, making it possible to store architecture configurations
/// before training starts. Trained weights themselves are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    pub learning_rate: f64,
}

impl NetworkConfig {
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
    ) -> NetworkConfig {
        NetworkConfig {
            input_size,
            hidden_size,
            output_size,
            learning_rate,
        }
    }

    /// Checks the construction preconditions: all sizes positive, learning
    /// rate strictly positive.
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.input_size == 0 {
            return Err(NetworkError::InvalidConfig("input_size must be positive"));
        }
        if self.hidden_size == 0 {
            return Err(NetworkError::InvalidConfig("hidden_size must be positive"));
        }
        if self.output_size == 0 {
            return Err(NetworkError::InvalidConfig("output_size must be positive"));
        }
        if !(self.learning_rate > 0.0) {
            return Err(NetworkError::InvalidConfig(
                "learning_rate must be positive",
            ));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkConfig` from a JSON file previously written by
    /// `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
