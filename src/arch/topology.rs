use crate::{DiwaErr, Result};

/// The shape of a fully-connected network: an input layer, `hidden_layers` hidden layers of
/// `hidden_neurons` neurons each and an output layer.
///
/// A `Topology` is always valid once built, the all-zero topology is the empty network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Topology {
    inputs: usize,
    hidden_layers: usize,
    hidden_neurons: usize,
    outputs: usize,
}

impl Topology {
    /// The topology of a network that owns nothing.
    pub const EMPTY: Self = Self {
        inputs: 0,
        hidden_layers: 0,
        hidden_neurons: 0,
        outputs: 0,
    };

    /// Creates a new `Topology`.
    ///
    /// # Arguments
    /// * `inputs` - The amount of input neurons.
    /// * `hidden_layers` - The amount of hidden layers.
    /// * `hidden_neurons` - The amount of neurons in each hidden layer.
    /// * `outputs` - The amount of output neurons.
    ///
    /// # Returns
    /// The topology, or `InvalidParameters` if there are no outputs, the hidden layers are
    /// empty or the derived counts don't fit the model format.
    pub fn new(
        inputs: usize,
        hidden_layers: usize,
        hidden_neurons: usize,
        outputs: usize,
    ) -> Result<Self> {
        let topology = Self {
            inputs,
            hidden_layers,
            hidden_neurons,
            outputs,
        };

        if topology.is_empty() {
            return Ok(topology);
        }

        if outputs < 1 {
            return Err(DiwaErr::InvalidParameters(
                "a network needs at least one output neuron",
            ));
        }

        if hidden_layers > 0 && hidden_neurons < 1 {
            return Err(DiwaErr::InvalidParameters(
                "hidden layers need at least one neuron each",
            ));
        }

        topology.checked_counts().ok_or(DiwaErr::InvalidParameters(
            "the network is too large to be addressed",
        ))?;

        Ok(topology)
    }

    /// Creates a new `Topology` from signed counts, as stored in a model file.
    pub fn from_signed(
        inputs: i32,
        hidden_layers: i32,
        hidden_neurons: i32,
        outputs: i32,
    ) -> Result<Self> {
        let unsigned = |n: i32| {
            usize::try_from(n)
                .map_err(|_| DiwaErr::InvalidParameters("neuron counts can't be negative"))
        };

        Self::new(
            unsigned(inputs)?,
            unsigned(hidden_layers)?,
            unsigned(hidden_neurons)?,
            unsigned(outputs)?,
        )
    }

    pub fn inputs(&self) -> usize {
        self.inputs
    }

    pub fn hidden_layers(&self) -> usize {
        self.hidden_layers
    }

    pub fn hidden_neurons(&self) -> usize {
        self.hidden_neurons
    }

    pub fn outputs(&self) -> usize {
        self.outputs
    }

    /// Whether this is the all-zero topology.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// The amount of weights, one bias and one per incoming connection for every neuron
    /// that has inputs.
    pub fn weight_count(&self) -> usize {
        let Self {
            inputs,
            hidden_layers,
            hidden_neurons,
            outputs,
        } = *self;

        if hidden_layers == 0 {
            return (inputs + 1) * outputs;
        }

        (inputs + 1) * hidden_neurons
            + (hidden_layers - 1) * (hidden_neurons + 1) * hidden_neurons
            + (hidden_neurons + 1) * outputs
    }

    /// The amount of neurons, input neurons included.
    pub fn neuron_count(&self) -> usize {
        self.inputs + self.hidden_neurons * self.hidden_layers + self.outputs
    }

    /// The amount of `f64` elements a network with this topology owns: its weights plus an
    /// output and a delta per neuron.
    pub fn buffer_len(&self) -> usize {
        self.weight_count() + 2 * self.neuron_count()
    }

    /// Suggests a hidden layer width from the input and output widths.
    ///
    /// # Returns
    /// `floor(sqrt(inputs * outputs))`, or `None` if there are no inputs or outputs.
    pub fn recommended_hidden_neurons(&self) -> Option<usize> {
        if self.inputs == 0 || self.outputs == 0 {
            return None;
        }

        Some(((self.inputs * self.outputs) as f64).sqrt() as usize)
    }

    /// Suggests an amount of hidden layers for a training set.
    ///
    /// # Arguments
    /// * `samples` - The amount of training samples.
    /// * `alpha` - A scaling factor, usually between 2 and 10.
    ///
    /// # Returns
    /// `samples / (alpha * (inputs + outputs))`, or `None` if any operand is zero or the
    /// suggestion is less than one layer.
    pub fn recommended_hidden_layers(&self, samples: usize, alpha: usize) -> Option<usize> {
        if self.inputs == 0 || self.outputs == 0 || samples == 0 || alpha == 0 {
            return None;
        }

        let count = samples / alpha.checked_mul(self.inputs + self.outputs)?;
        (count >= 1).then_some(count)
    }

    /// Computes `(weight_count, neuron_count)` making sure the whole buffer can be addressed
    /// and the counts fit the model file's signed 32 bit fields.
    fn checked_counts(&self) -> Option<(usize, usize)> {
        let Self {
            inputs,
            hidden_layers,
            hidden_neurons,
            outputs,
        } = *self;

        let weight_count = if hidden_layers == 0 {
            inputs.checked_add(1)?.checked_mul(outputs)?
        } else {
            let first = inputs.checked_add(1)?.checked_mul(hidden_neurons)?;
            let inner = (hidden_layers - 1)
                .checked_mul(hidden_neurons.checked_add(1)?)?
                .checked_mul(hidden_neurons)?;
            let last = hidden_neurons.checked_add(1)?.checked_mul(outputs)?;
            first.checked_add(inner)?.checked_add(last)?
        };

        let neuron_count = hidden_neurons
            .checked_mul(hidden_layers)?
            .checked_add(inputs)?
            .checked_add(outputs)?;

        let limit = i32::MAX as usize;
        if [inputs, hidden_layers, hidden_neurons, outputs, weight_count, neuron_count]
            .iter()
            .any(|&n| n > limit)
        {
            return None;
        }

        weight_count.checked_add(neuron_count.checked_mul(2)?)?;
        Some((weight_count, neuron_count))
    }
}

/// Maps a topology to its `(weight_count, neuron_count)`.
///
/// # Returns
/// The counts, or `InvalidParameters` if the topology is invalid. The all-zero topology
/// yields `(0, 0)`.
pub fn counts(
    inputs: usize,
    hidden_layers: usize,
    hidden_neurons: usize,
    outputs: usize,
) -> Result<(usize, usize)> {
    let topology = Topology::new(inputs, hidden_layers, hidden_neurons, outputs)?;
    Ok((topology.weight_count(), topology.neuron_count()))
}
