use std::{iter, ops::Range};

use super::Topology;

/// Where a layer of neurons lives inside the network's buffer.
///
/// Offsets into the outputs region are also valid offsets into the deltas region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSpan {
    /// The amount of neurons in the layer.
    pub width: usize,
    /// The amount of inputs each neuron receives, not counting the bias.
    pub fan_in: usize,
    /// Offset of the layer's first weight in the weights region.
    pub weights: usize,
    /// Offset of the layer's source activations in the outputs region.
    pub inputs: usize,
    /// Offset of the layer's own activations in the outputs region.
    pub outputs: usize,
}

impl LayerSpan {
    /// The amount of weights per neuron, bias included.
    pub fn stride(&self) -> usize {
        self.fan_in + 1
    }

    pub fn weight_range(&self) -> Range<usize> {
        self.weights..self.weights + self.stride() * self.width
    }

    pub fn input_range(&self) -> Range<usize> {
        self.inputs..self.inputs + self.fan_in
    }

    pub fn output_range(&self) -> Range<usize> {
        self.outputs..self.outputs + self.width
    }
}

/// The ordered layers of a network, from the first hidden layer to the output layer.
///
/// The input layer has no weights and no span, it only occupies the head of the outputs
/// region. Weights are laid out layer by layer, neuron by neuron, bias first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    topology: Topology,
    layers: Vec<LayerSpan>,
}

impl Layout {
    /// Computes the layer spans of a topology.
    pub fn new(topology: Topology) -> Self {
        if topology.is_empty() {
            return Self::default();
        }

        let widths = iter::repeat_n(topology.hidden_neurons(), topology.hidden_layers())
            .chain(iter::once(topology.outputs()));

        let mut layers = Vec::with_capacity(topology.hidden_layers() + 1);
        let mut fan_in = topology.inputs();
        let mut weights = 0;
        let mut inputs = 0;
        let mut outputs = topology.inputs();

        for width in widths {
            let span = LayerSpan {
                width,
                fan_in,
                weights,
                inputs,
                outputs,
            };

            weights = span.weight_range().end;
            inputs = outputs;
            outputs += width;
            fan_in = width;
            layers.push(span);
        }

        Self { topology, layers }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Every layer with weights, in forward order.
    pub fn layers(&self) -> &[LayerSpan] {
        &self.layers
    }

    pub fn weight_count(&self) -> usize {
        self.topology.weight_count()
    }

    pub fn neuron_count(&self) -> usize {
        self.topology.neuron_count()
    }

    /// The input slice of the outputs region.
    pub fn input_range(&self) -> Range<usize> {
        0..self.topology.inputs()
    }

    /// The output layer's slice of the outputs region, empty for the empty network.
    pub fn output_range(&self) -> Range<usize> {
        self.layers
            .last()
            .map_or(0..0, |layer| layer.output_range())
    }
}
