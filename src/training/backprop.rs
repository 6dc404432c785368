use crate::{
    arch::LayerSpan,
    network::{BIAS_INPUT, Network, Regions, propagate},
};

impl Network {
    /// Trains the network on a single sample with backpropagation.
    ///
    /// Runs a forward pass, computes the output deltas, then the hidden deltas from the last
    /// hidden layer back, and finally updates the output layer's weights followed by every
    /// hidden layer's, last to first. Deltas use the logistic derivative `y * (1 - y)`
    /// whatever the activation function is.
    ///
    /// # Arguments
    /// * `learning_rate` - The step size of the update, no clipping is applied.
    /// * `inputs` - One value per input neuron.
    /// * `targets` - The expected value of each output neuron.
    ///
    /// # Panics
    /// If `inputs` doesn't have exactly one value per input neuron.
    pub fn train(&mut self, learning_rate: f64, inputs: &[f64], targets: &[f64]) {
        debug_assert_eq!(targets.len(), self.layout.output_range().len());

        let act_fn = self.activation();
        let Regions {
            weights,
            outputs,
            deltas,
        } = self.buffer.regions_mut();

        propagate(&self.layout, act_fn, weights, outputs, inputs);

        let Some((output_layer, hidden)) = self.layout.layers().split_last() else {
            return;
        };

        output_deltas(output_layer, outputs, deltas, targets);
        hidden_deltas(hidden, output_layer, weights, outputs, deltas);

        update(output_layer, learning_rate, weights, outputs, deltas);
        for layer in hidden.iter().rev() {
            update(layer, learning_rate, weights, outputs, deltas);
        }
    }
}

fn output_deltas(layer: &LayerSpan, outputs: &[f64], deltas: &mut [f64], targets: &[f64]) {
    let outputs = &outputs[layer.output_range()];
    let deltas = &mut deltas[layer.output_range()];

    for ((delta, &y), &t) in deltas.iter_mut().zip(outputs).zip(targets) {
        *delta = (t - y) * y * (1. - y);
    }
}

/// Propagates the deltas backwards through the hidden layers, reading each downstream
/// neuron's weight for neuron `j` at `k * stride + (j + 1)` to skip its bias.
fn hidden_deltas(
    hidden: &[LayerSpan],
    output_layer: &LayerSpan,
    weights: &[f64],
    outputs: &[f64],
    deltas: &mut [f64],
) {
    for (h, layer) in hidden.iter().enumerate().rev() {
        let next = hidden.get(h + 1).unwrap_or(output_layer);
        let next_weights = &weights[next.weight_range()];

        let (current, downstream) = deltas.split_at_mut(next.outputs);
        let downstream = &downstream[..next.width];
        let current = &mut current[layer.output_range()];
        let activations = &outputs[layer.output_range()];

        for (j, (delta, &y)) in current.iter_mut().zip(activations).enumerate() {
            let error: f64 = downstream
                .iter()
                .enumerate()
                .map(|(k, d)| d * next_weights[k * next.stride() + (j + 1)])
                .sum();

            *delta = y * (1. - y) * error;
        }
    }
}

/// `bias += delta * lr * -1` and `weight_k += delta * lr * source_k` for every neuron of
/// `layer`.
fn update(
    layer: &LayerSpan,
    learning_rate: f64,
    weights: &mut [f64],
    outputs: &[f64],
    deltas: &[f64],
) {
    let sources = &outputs[layer.input_range()];
    let neurons = weights[layer.weight_range()].chunks_exact_mut(layer.stride());

    for (neuron, &delta) in neurons.zip(&deltas[layer.output_range()]) {
        let step = delta * learning_rate;
        let (bias, incoming) = neuron.split_at_mut(1);

        bias[0] += step * BIAS_INPUT;
        for (w, x) in incoming.iter_mut().zip(sources) {
            *w += step * x;
        }
    }
}
