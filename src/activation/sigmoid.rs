//! The logistic activation used throughout the network.
//!
//! This network is hard-wired to sigmoid on both layers; there is no
//! activation abstraction to swap in anything else.

/// Logistic function `1 / (1 + e^-x)`, mapping any finite real to (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative expressed in terms of the activation value:
/// if `a = sigmoid(x)` then `sigmoid'(x) = a * (1 - a)`.
///
/// Backpropagation only ever has the activation in hand, never the
/// pre-activation sum, so the derivative is taken in this form.
pub fn sigmoid_derivative_from_output(a: f64) -> f64 {
    a * (1.0 - a)
}
