use super::{Network, Regions};
use crate::arch::{Layout, activations::ActFn};

/// The constant input every bias weight multiplies.
pub(crate) const BIAS_INPUT: f64 = -1.;

impl Network {
    /// Makes a forward pass through the network.
    ///
    /// # Arguments
    /// * `inputs` - One value per input neuron.
    ///
    /// # Returns
    /// The output layer's activations, valid until the next inference or training step.
    ///
    /// # Panics
    /// If `inputs` doesn't have exactly one value per input neuron.
    pub fn inference(&mut self, inputs: &[f64]) -> &[f64] {
        let Regions {
            weights, outputs, ..
        } = self.buffer.regions_mut();

        propagate(&self.layout, self.activation, weights, outputs, inputs);
        &self.buffer.outputs()[self.layout.output_range()]
    }
}

/// Echoes `inputs` into the head of `outputs` and fills every layer's activations in
/// forward order.
///
/// The weights are consumed front to back exactly once, in the same neuron-major order the
/// layout assigns them.
pub(crate) fn propagate(
    layout: &Layout,
    act_fn: ActFn,
    weights: &[f64],
    outputs: &mut [f64],
    inputs: &[f64],
) {
    outputs[layout.input_range()].copy_from_slice(inputs);

    let mut cursor = weights;
    for layer in layout.layers() {
        debug_assert_eq!(weights.len() - cursor.len(), layer.weights);

        let (sources, targets) = outputs.split_at_mut(layer.outputs);
        let sources = &sources[layer.input_range()];

        for target in &mut targets[..layer.width] {
            let (neuron, rest) = cursor.split_at(layer.stride());
            cursor = rest;
            *target = act_fn.f(weighted_sum(neuron, sources));
        }
    }

    debug_assert!(cursor.is_empty());
}

/// `-1 * bias + Σ weight_k * source_k` for a neuron's weights `[bias, weight_0, ...]`.
#[inline]
pub(crate) fn weighted_sum(neuron: &[f64], sources: &[f64]) -> f64 {
    neuron[1..]
        .iter()
        .zip(sources)
        .fold(BIAS_INPUT * neuron[0], |sum, (w, x)| sum + w * x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arch::{Topology, activations::Sigmoid},
        init::ConstParamGen,
    };

    #[test]
    fn weighted_sum_subtracts_bias() {
        assert_eq!(weighted_sum(&[0.5, 2., 3.], &[1., -1.]), -0.5 + 2. - 3.);
        assert_eq!(weighted_sum(&[0.25], &[]), -0.25);
    }

    #[test]
    fn single_layer_by_hand() {
        let mut network = Network::with_seed(0);
        network
            .initialize(Topology::new(2, 0, 0, 2).unwrap(), false)
            .unwrap();
        network
            .weights_mut()
            .copy_from_slice(&[0.1, 0.2, 0.3, -0.4, 0.5, -0.6]);

        let inputs = [1., 2.];
        let outputs = network.inference(&inputs).to_vec();

        let expected = [
            Sigmoid.f(-0.1 + 0.2 * 1. + 0.3 * 2.),
            Sigmoid.f(0.4 + 0.5 * 1. - 0.6 * 2.),
        ];
        assert_eq!(outputs.len(), 2);
        for (got, want) in outputs.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }

        // The inputs are echoed at the head of the outputs region.
        assert_eq!(&network.outputs()[..2], inputs);
    }

    #[test]
    fn hidden_layers_by_hand() {
        let mut network = Network::with_seed(0);
        network
            .initialize(Topology::new(1, 2, 1, 1).unwrap(), false)
            .unwrap();
        network
            .weights_mut()
            .copy_from_slice(&[0.5, 1., -0.5, 2., 0.25, -1.]);

        let output = network.inference(&[3.])[0];

        let h1 = Sigmoid.f(-0.5 + 3.);
        let h2 = Sigmoid.f(0.5 + 2. * h1);
        let y = Sigmoid.f(-0.25 - h2);
        assert!((output - y).abs() < 1e-12);
        assert_eq!(network.outputs().len(), 4);
        assert!((network.outputs()[1] - h1).abs() < 1e-12);
        assert!((network.outputs()[2] - h2).abs() < 1e-12);
    }

    #[test]
    fn inference_is_idempotent() {
        let mut network = Network::with_seed(5);
        network
            .initialize(Topology::new(3, 2, 4, 2).unwrap(), true)
            .unwrap();

        let inputs = [0.3, -1.2, 0.8];
        let first = network.inference(&inputs).to_vec();
        let second = network.inference(&inputs).to_vec();

        assert_eq!(first, second);
    }

    #[test]
    fn activation_changes_outputs() {
        let mut network = Network::with_seed(0);
        let topology = Topology::new(2, 1, 3, 1).unwrap();
        network
            .initialize_with(topology, &mut ConstParamGen::new(0.3))
            .unwrap();

        let sigmoid = network.inference(&[1., 0.5]).to_vec();
        network.set_activation(ActFn::gaussian());
        let gaussian = network.inference(&[1., 0.5]).to_vec();

        assert_ne!(sigmoid, gaussian);
        assert_eq!(network.weight_count(), 13);
        assert_eq!(network.neuron_count(), 6);
    }

    #[test]
    fn empty_network_has_no_outputs() {
        let mut network = Network::with_seed(0);
        assert!(network.inference(&[]).is_empty());
    }

    #[test]
    #[should_panic]
    fn wrong_input_length_panics() {
        let mut network = Network::with_seed(0);
        network
            .initialize(Topology::new(2, 1, 3, 1).unwrap(), true)
            .unwrap();
        network.inference(&[1.]);
    }
}
