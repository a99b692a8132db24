use rand::Rng;

use crate::activation::activation::{Activation, sigmoid, sigmoid_gradient};
use crate::unit::error::UnitError;

/// Step size used when the caller does not supply one.
pub const DEFAULT_BIAS: f64 = 0.1;

/// Extra multiplier applied only inside the sigmoid-gradient pass of `train`.
pub const LEARNING_RATE: f64 = 0.9;

/// A single neuron: one weight per input plus a bias weight at index 0.
///
/// `bias` is not an additive term. It is the step size shared by both
/// adjustments that `train` applies.
#[derive(Debug, Clone)]
pub struct Unit {
    weights: Vec<f64>,
    bias: f64,
}

impl Unit {
    /// Builds a unit with the default step size and weights drawn from the
    /// thread-local RNG.
    pub fn new(input_size: usize) -> Unit {
        Unit::with_bias(input_size, DEFAULT_BIAS)
    }

    pub fn with_bias(input_size: usize, bias: f64) -> Unit {
        Unit::with_rng(input_size, bias, &mut rand::thread_rng())
    }

    /// Draws `input_size + 1` weights independently from U[-1, 1].
    ///
    /// # Panics
    /// Panics if `input_size == 0`.
    pub fn with_rng<R: Rng + ?Sized>(input_size: usize, bias: f64, rng: &mut R) -> Unit {
        assert!(input_size > 0, "input_size must be at least 1");
        let weights = (0..=input_size)
            .map(|_| rng.gen_range(-1.0_f64..=1.0))
            .collect();
        Unit { weights, bias }
    }

    pub fn input_size(&self) -> usize {
        self.weights.len() - 1
    }

    /// Bias weight first, then one weight per input feature.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Discrete class decision: 1 if the weighted sum is non-negative, else 0.
    pub fn predict(&self, inputs: &[f64]) -> Result<u8, UnitError> {
        let sum = self.weighted_sum(inputs)?;
        Ok(Activation::Step.function(sum) as u8)
    }

    /// Probability of class 1.
    ///
    /// Strictly inside (0, 1) until the sigmoid saturates in `f64`; large
    /// sums return exactly `0.0` or `1.0`.
    pub fn output(&self, inputs: &[f64]) -> Result<f64, UnitError> {
        let sum = self.weighted_sum(inputs)?;
        Ok(sigmoid(sum))
    }

    /// Reads the weighted sum through either activation.
    pub fn classify(&self, inputs: &[f64], activation: Activation) -> Result<f64, UnitError> {
        let sum = self.weighted_sum(inputs)?;
        Ok(activation.function(sum))
    }

    /// One training step towards `target` (0 or 1).
    ///
    /// Applies a thresholded delta rule, then a sigmoid-gradient pass on the
    /// same weights. Inputs are validated before any weight is touched.
    pub fn train(&mut self, inputs: &[f64], target: u8) -> Result<(), UnitError> {
        debug_assert!(target <= 1, "target must be 0 or 1, got {target}");
        let target = f64::from(target);

        let guess = f64::from(self.predict(inputs)?);
        let error = target - guess;
        self.weights[0] += error * self.bias;
        for (w, x) in self.weights[1..].iter_mut().zip(inputs) {
            *w += error * x * self.bias;
        }

        self.backpropagate(inputs, target)
    }

    fn backpropagate(&mut self, inputs: &[f64], target: f64) -> Result<(), UnitError> {
        let output = self.output(inputs)?;
        let delta = (target - output) * sigmoid_gradient(output);
        let step = self.bias * LEARNING_RATE;

        self.weights[0] += delta * step;
        for (w, x) in self.weights[1..].iter_mut().zip(inputs) {
            *w += delta * x * step;
        }

        // Read from the weights just updated above, not a pre-update snapshot.
        let hidden_gradient: Vec<f64> = self.weights[1..].iter().map(|w| delta * w).collect();

        for ((w, x), g) in self.weights[1..].iter_mut().zip(inputs).zip(hidden_gradient) {
            *w += g * x * (1.0 - x) * self.bias;
        }

        Ok(())
    }

    fn weighted_sum(&self, inputs: &[f64]) -> Result<f64, UnitError> {
        self.validate_inputs(inputs)?;
        Ok(self.weights[1..].iter()
            .zip(inputs)
            .fold(self.weights[0], |sum, (w, x)| sum + x * w))
    }

    fn validate_inputs(&self, inputs: &[f64]) -> Result<(), UnitError> {
        if inputs.len() != self.input_size() {
            return Err(UnitError::InvalidInputLength {
                expected: self.input_size(),
                actual: inputs.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed(weights: Vec<f64>, bias: f64) -> Unit {
        Unit { weights, bias }
    }

    #[test]
    fn new_unit_has_one_weight_per_input_plus_bias() {
        let mut rng = StdRng::seed_from_u64(7);
        for input_size in 1..=16 {
            let unit = Unit::with_rng(input_size, DEFAULT_BIAS, &mut rng);
            assert_eq!(unit.weights().len(), input_size + 1);
            assert_eq!(unit.input_size(), input_size);
            assert!(unit.weights().iter().all(|w| (-1.0..=1.0).contains(w)));
        }
    }

    #[test]
    fn default_step_size() {
        let unit = Unit::new(3);
        assert_eq!(unit.bias(), DEFAULT_BIAS);
        assert_eq!(Unit::with_bias(3, 0.25).bias(), 0.25);
    }

    #[test]
    #[should_panic(expected = "input_size must be at least 1")]
    fn zero_inputs_is_rejected() {
        Unit::new(0);
    }

    #[test]
    fn wrong_length_fails_without_mutation() {
        let mut unit = fixed(vec![0.3, -0.2, 0.5], DEFAULT_BIAS);
        let before = unit.weights().to_vec();
        let expected = UnitError::InvalidInputLength { expected: 2, actual: 3 };

        assert_eq!(unit.predict(&[1.0, 0.0, 1.0]), Err(expected.clone()));
        assert_eq!(unit.output(&[1.0, 0.0, 1.0]), Err(expected.clone()));
        assert_eq!(unit.train(&[1.0, 0.0, 1.0], 1), Err(expected));
        assert_eq!(
            unit.train(&[], 0),
            Err(UnitError::InvalidInputLength { expected: 2, actual: 0 })
        );
        assert_eq!(unit.weights(), before.as_slice());
    }

    #[test]
    fn predict_thresholds_the_weighted_sum() {
        let unit = fixed(vec![-0.5, 0.25, 0.25], DEFAULT_BIAS);
        // sums: -0.5, -0.25, 0.0
        assert_eq!(unit.predict(&[0.0, 0.0]), Ok(0));
        assert_eq!(unit.predict(&[1.0, 0.0]), Ok(0));
        assert_eq!(unit.predict(&[1.0, 1.0]), Ok(1));
        assert_eq!(unit.classify(&[1.0, 1.0], Activation::Step), Ok(1.0));
    }

    #[test]
    fn output_is_sigmoid_of_the_same_sum() {
        let unit = fixed(vec![0.1, 0.4, -0.3], DEFAULT_BIAS);
        let out = unit.output(&[1.0, 2.0]).unwrap();
        assert!((out - sigmoid(0.1 + 0.4 - 0.6)).abs() < 1e-12);
        assert!(out > 0.0 && out < 1.0);
        assert_eq!(unit.classify(&[1.0, 2.0], Activation::Sigmoid), Ok(out));
    }

    #[test]
    fn output_saturates_to_closed_bounds() {
        let unit = fixed(vec![0.0, 1.0], DEFAULT_BIAS);
        assert_eq!(unit.output(&[1000.0]), Ok(1.0));
        let low = unit.output(&[-1000.0]).unwrap();
        assert!((0.0..1e-300).contains(&low));
        assert_eq!(unit.predict(&[1000.0]), Ok(1));
    }

    #[test]
    fn read_only_calls_are_repeatable() {
        let unit = Unit::with_rng(5, DEFAULT_BIAS, &mut StdRng::seed_from_u64(3));
        let inputs = [0.0, 1.0, 1.0, 0.0, 1.0];
        assert_eq!(unit.predict(&inputs), unit.predict(&inputs));
        assert_eq!(unit.output(&inputs), unit.output(&inputs));
    }

    #[test]
    fn train_step_reads_live_weights_for_hidden_gradient() {
        let mut unit = fixed(vec![0.2, -0.4], 0.1);
        unit.train(&[0.5], 1).unwrap();

        // Step 1 is a no-op: sum = 0.0 so predict == target.
        // Step 2: output 0.5, delta = 0.5 * 0.25.
        let delta = 0.125;
        let w0 = 0.2 + delta * 0.1 * LEARNING_RATE;
        let w1_mid = -0.4 + delta * 0.5 * 0.1 * LEARNING_RATE;
        let w1 = w1_mid + (delta * w1_mid) * 0.5 * 0.5 * 0.1;

        assert!((unit.weights()[0] - w0).abs() < 1e-12);
        assert!((unit.weights()[1] - w1).abs() < 1e-12);

        let snapshot_w1 = w1_mid + (delta * -0.4) * 0.5 * 0.5 * 0.1;
        assert!((unit.weights()[1] - snapshot_w1).abs() > 1e-6);
    }

    #[test]
    fn misclassified_sample_moves_towards_target() {
        let mut unit = fixed(vec![0.5, 0.5, 0.5], DEFAULT_BIAS);
        let inputs = [1.0, 1.0];
        let before = unit.output(&inputs).unwrap();
        unit.train(&inputs, 0).unwrap();
        assert!(unit.output(&inputs).unwrap() < before);
        // binary inputs zero out the hidden-gradient term
        assert!(unit.weights()[1] < 0.5);
    }
}
