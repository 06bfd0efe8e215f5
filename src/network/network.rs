use rand::Rng;

use crate::activation::sigmoid::{sigmoid, sigmoid_derivative_from_output};
use crate::error::NetworkError;
use crate::math::matrix::Matrix;
use crate::network::config::NetworkConfig;

/// Result of a forward pass.
///
/// The hidden activations are part of the public result because training
/// needs them for backpropagation and callers use them for visualization.
#[derive(Debug, Clone)]
pub struct Forward {
    /// Final layer activations, one per output neuron, each in (0, 1).
    pub output: Vec<f64>,
    /// Hidden layer activations, one per hidden neuron, each in (0, 1).
    pub hidden: Vec<f64>,
}

/// A two-layer fully connected network: input → hidden → output, sigmoid
/// after each layer, no bias terms.
///
/// The missing biases are preserved from the original design; they limit
/// what the network can represent (every layer maps the zero vector to
/// all-0.5 activations) but are intentional.
#[derive(Debug, Clone)]
pub struct FeedforwardNetwork {
    pub config: NetworkConfig,
    /// Shape [input_size][hidden_size]; `data[i][h]` connects input `i`
    /// to hidden neuron `h`.
    pub weights_input_hidden: Matrix,
    /// Shape [hidden_size][output_size]; `data[h][o]` connects hidden
    /// neuron `h` to output neuron `o`.
    pub weights_hidden_output: Matrix,
}

impl FeedforwardNetwork {
    /// Builds a network with every weight drawn independently and uniformly
    /// from [-1, 1).
    ///
    /// The RNG is injected so tests can pass a seeded `StdRng` and get a
    /// reproducible initial weight state.
    pub fn new<R: Rng>(config: NetworkConfig, rng: &mut R) -> Result<FeedforwardNetwork, NetworkError> {
        config.validate()?;

        let weights_input_hidden = Matrix::random(config.input_size, config.hidden_size, rng);
        let weights_hidden_output = Matrix::random(config.hidden_size, config.output_size, rng);

        Ok(FeedforwardNetwork {
            config,
            weights_input_hidden,
            weights_hidden_output,
        })
    }

    /// Forward pass: weighted sum then sigmoid for the hidden layer, then
    /// the same for the output layer. Does not mutate the weights.
    pub fn forward(&self, inputs: &[f64]) -> Result<Forward, NetworkError> {
        self.check_len("inputs", self.config.input_size, inputs.len())?;

        let mut hidden = vec![0.0; self.config.hidden_size];
        for h in 0..self.config.hidden_size {
            let mut sum = 0.0;
            for i in 0..self.config.input_size {
                sum += inputs[i] * self.weights_input_hidden.data[i][h];
            }
            hidden[h] = sigmoid(sum);
        }

        let mut output = vec![0.0; self.config.output_size];
        for o in 0..self.config.output_size {
            let mut sum = 0.0;
            for h in 0..self.config.hidden_size {
                sum += hidden[h] * self.weights_hidden_output.data[h][o];
            }
            output[o] = sigmoid(sum);
        }

        Ok(Forward { output, hidden })
    }

    /// One step of single-sample backpropagation: forward pass, output and
    /// hidden deltas, then in-place weight updates scaled by the learning
    /// rate.
    ///
    /// Invariant: hidden deltas are computed from the hidden→output weights
    /// as they were *before* this step's update. Both delta vectors are
    /// fully materialized before any weight is written.
    pub fn train(&mut self, inputs: &[f64], targets: &[f64]) -> Result<(), NetworkError> {
        self.check_len("targets", self.config.output_size, targets.len())?;
        let Forward { output, hidden } = self.forward(inputs)?;

        // delta_o = (t - o) * sigmoid'(o), the squared-error gradient w.r.t.
        // the output pre-activation, signed to step toward the target.
        let mut output_deltas = vec![0.0; self.config.output_size];
        for o in 0..self.config.output_size {
            output_deltas[o] =
                (targets[o] - output[o]) * sigmoid_derivative_from_output(output[o]);
        }

        let mut hidden_deltas = vec![0.0; self.config.hidden_size];
        for h in 0..self.config.hidden_size {
            let mut error = 0.0;
            for o in 0..self.config.output_size {
                error += output_deltas[o] * self.weights_hidden_output.data[h][o];
            }
            hidden_deltas[h] = error * sigmoid_derivative_from_output(hidden[h]);
        }

        for h in 0..self.config.hidden_size {
            for o in 0..self.config.output_size {
                self.weights_hidden_output.data[h][o] +=
                    self.config.learning_rate * output_deltas[o] * hidden[h];
            }
        }

        for i in 0..self.config.input_size {
            for h in 0..self.config.hidden_size {
                self.weights_input_hidden.data[i][h] +=
                    self.config.learning_rate * hidden_deltas[h] * inputs[i];
            }
        }

        Ok(())
    }

    fn check_len(
        &self,
        vector: &'static str,
        expected: usize,
        actual: usize,
    ) -> Result<(), NetworkError> {
        if expected != actual {
            return Err(NetworkError::DimensionMismatch {
                vector,
                expected,
                actual,
            });
        }
        Ok(())
    }
}
