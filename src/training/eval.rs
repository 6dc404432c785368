use super::Dataset;
use crate::network::Network;

/// The value splitting an output into a negative and a positive answer.
pub const THRESHOLD: f64 = 0.5;

impl Network {
    /// Makes an inference and checks it against the expected outputs.
    ///
    /// # Returns
    /// Whether every output lies on the same side of `THRESHOLD` as its expected value.
    pub fn test_inference(&mut self, inputs: &[f64], expected: &[f64]) -> bool {
        let outputs = self.inference(inputs);
        debug_assert_eq!(outputs.len(), expected.len());

        outputs
            .iter()
            .zip(expected)
            .all(|(y, t)| (*y >= THRESHOLD) == (*t >= THRESHOLD))
    }

    /// The fraction of samples in `dataset` the network answers correctly, `0.0` for an
    /// empty dataset.
    pub fn accuracy(&mut self, dataset: &Dataset) -> f64 {
        if dataset.is_empty() {
            return 0.;
        }

        let correct = dataset
            .iter()
            .filter(|sample| self.test_inference(sample.input, sample.target))
            .count();

        correct as f64 / dataset.len() as f64
    }

    /// `1 - accuracy`.
    pub fn loss(&mut self, dataset: &Dataset) -> f64 {
        1. - self.accuracy(dataset)
    }
}
