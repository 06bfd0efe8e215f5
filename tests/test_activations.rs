// Tests for the sigmoid activation: exact values, saturation behavior,
// and the activation-space derivative.

use approx::assert_relative_eq;
use nanomlp::{sigmoid, sigmoid_derivative_from_output};

#[test]
fn test_sigmoid_at_zero_is_exactly_half() {
    assert_eq!(sigmoid(0.0), 0.5);
}

#[test]
fn test_sigmoid_saturates_toward_one_for_large_positive_input() {
    assert!(sigmoid(20.0) > 0.999_999);
    assert!(sigmoid(20.0) < 1.0);
}

#[test]
fn test_sigmoid_saturates_toward_zero_for_large_negative_input() {
    assert!(sigmoid(-20.0) < 1.0e-6);
    assert!(sigmoid(-20.0) > 0.0);
}

#[test]
fn test_sigmoid_output_stays_in_open_unit_interval() {
    for &x in &[-8.0, -1.0, -0.1, 0.0, 0.1, 1.0, 8.0] {
        let a = sigmoid(x);
        assert!(a > 0.0 && a < 1.0, "sigmoid({x}) = {a} out of (0, 1)");
    }
}

#[test]
fn test_sigmoid_is_symmetric_about_half() {
    for &x in &[0.25, 1.0, 3.0] {
        assert_relative_eq!(sigmoid(x) + sigmoid(-x), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_derivative_from_output_peaks_at_half() {
    assert_eq!(sigmoid_derivative_from_output(0.5), 0.25);
    assert!(sigmoid_derivative_from_output(0.9) < 0.25);
    assert!(sigmoid_derivative_from_output(0.1) < 0.25);
}
