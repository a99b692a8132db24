use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// The two views a `Unit` offers over the same weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Activation {
    /// Hard threshold: 1 if the sum is non-negative, else 0.
    #[default]
    Step,
    /// Logistic sigmoid, read as the probability of class 1.
    Sigmoid,
}

impl Activation {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            Activation::Step => if x >= 0.0 { 1.0 } else { 0.0 },
            Activation::Sigmoid => sigmoid(x),
        }
    }
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid expressed through its own output `y = sigmoid(x)`.
pub fn sigmoid_gradient(y: f64) -> f64 {
    y * (1.0 - y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_inclusive_at_zero() {
        assert_eq!(Activation::Step.function(0.0), 1.0);
        assert_eq!(Activation::Step.function(-1e-12), 0.0);
        assert_eq!(Activation::Step.function(3.5), 1.0);
    }

    #[test]
    fn sigmoid_midpoint_and_bounds() {
        assert!((Activation::Sigmoid.function(0.0) - 0.5).abs() < 1e-12);
        for x in [-20.0, -3.0, -0.1, 0.1, 3.0, 20.0] {
            let y = sigmoid(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y}");
        }
    }

    #[test]
    fn step_is_the_default() {
        assert_eq!(Activation::default(), Activation::Step);
        let parsed: Activation = serde_json::from_str("\"Sigmoid\"").unwrap();
        assert_eq!(parsed, Activation::Sigmoid);
    }

    #[test]
    fn sigmoid_gradient_peaks_at_half() {
        assert!((sigmoid_gradient(0.5) - 0.25).abs() < 1e-12);
        assert_eq!(sigmoid_gradient(0.0), 0.0);
        assert_eq!(sigmoid_gradient(1.0), 0.0);
    }
}
