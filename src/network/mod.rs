//! The network: topology, layout and the buffer they describe.

mod buffer;
mod forward;

pub use buffer::{NetBuffer, Regions};
pub(crate) use forward::{BIAS_INPUT, propagate};

use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Result,
    arch::{Layout, Topology, activations::ActFn},
    init::{ParamGen, RandParamGen},
};

/// A fully-connected feedforward network stored in a single flat buffer.
///
/// Layers are not objects: they are spans over the buffer's weights, outputs and deltas
/// regions, computed once per initialization.
pub struct Network {
    pub(crate) layout: Layout,
    pub(crate) buffer: NetBuffer,
    activation: ActFn,
    rng: StdRng,
}

impl Network {
    /// Creates an empty network whose weight randomization is seeded by the OS.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates an empty network with a deterministic weight randomization.
    ///
    /// # Arguments
    /// * `seed` - The seed of the network's random number generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            layout: Layout::default(),
            buffer: NetBuffer::default(),
            activation: ActFn::default(),
            rng,
        }
    }

    /// (Re)initializes the network for a topology.
    ///
    /// The empty topology is a no-op that leaves the network as it was.
    ///
    /// # Arguments
    /// * `topology` - The new shape of the network.
    /// * `randomize` - Whether to draw the weights uniformly from `[-0.5, 0.5)`, otherwise
    ///   they are zeroed.
    ///
    /// # Returns
    /// `AllocationFailed` if the buffer can't be allocated, in which case the network
    /// keeps its previous state.
    pub fn initialize(&mut self, topology: Topology, randomize: bool) -> Result<()> {
        if topology.is_empty() {
            debug!("empty topology, network left untouched");
            return Ok(());
        }

        let layout = Layout::new(topology);
        let mut buffer = NetBuffer::allocate(layout.weight_count(), layout.neuron_count())?;

        if randomize {
            RandParamGen::weights(&mut self.rng)?.fill(buffer.weights_mut());
        }

        self.install(layout, buffer);
        Ok(())
    }

    /// (Re)initializes the network for a topology, generating its weights with `param_gen`.
    pub fn initialize_with<G: ParamGen>(
        &mut self,
        topology: Topology,
        param_gen: &mut G,
    ) -> Result<()> {
        if topology.is_empty() {
            debug!("empty topology, network left untouched");
            return Ok(());
        }

        let layout = Layout::new(topology);
        let mut buffer = NetBuffer::allocate(layout.weight_count(), layout.neuron_count())?;
        param_gen.fill(buffer.weights_mut());

        self.install(layout, buffer);
        Ok(())
    }

    /// Replaces the network's structure, dropping the previous buffer.
    pub(crate) fn install(&mut self, layout: Layout, buffer: NetBuffer) {
        debug_assert_eq!(buffer.len(), layout.topology().buffer_len());

        debug!(
            topology:? = layout.topology(),
            weights = layout.weight_count(),
            neurons = layout.neuron_count();
            "network initialized"
        );

        self.layout = layout;
        self.buffer = buffer;
    }

    pub fn topology(&self) -> &Topology {
        self.layout.topology()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn is_empty(&self) -> bool {
        self.topology().is_empty()
    }

    pub fn weight_count(&self) -> usize {
        self.layout.weight_count()
    }

    pub fn neuron_count(&self) -> usize {
        self.layout.neuron_count()
    }

    /// The weights, layer by layer, neuron by neuron, bias first.
    pub fn weights(&self) -> &[f64] {
        self.buffer.weights()
    }

    pub fn weights_mut(&mut self) -> &mut [f64] {
        self.buffer.weights_mut()
    }

    /// Every neuron's activation from the last inference, inputs included.
    pub fn outputs(&self) -> &[f64] {
        self.buffer.outputs()
    }

    /// Every neuron's delta from the last training step, indexed like `outputs`.
    pub fn deltas(&self) -> &[f64] {
        self.buffer.deltas()
    }

    pub fn activation(&self) -> ActFn {
        self.activation
    }

    /// Swaps the transfer function, weights and counts stay untouched.
    pub fn set_activation(&mut self, activation: ActFn) {
        self.activation = activation;
    }

    /// See [`Topology::recommended_hidden_neurons`].
    pub fn recommended_hidden_neurons(&self) -> Option<usize> {
        self.topology().recommended_hidden_neurons()
    }

    /// See [`Topology::recommended_hidden_layers`].
    pub fn recommended_hidden_layers(&self, samples: usize, alpha: usize) -> Option<usize> {
        self.topology().recommended_hidden_layers(samples, alpha)
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}
