use crate::{DiwaErr, Result};

/// The three regions of a network's buffer, borrowed at once.
pub struct Regions<'a> {
    pub weights: &'a mut [f64],
    pub outputs: &'a mut [f64],
    pub deltas: &'a mut [f64],
}

/// A single allocation holding, in order, `weight_count` weights, `neuron_count` outputs
/// and `neuron_count` deltas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetBuffer {
    data: Vec<f64>,
    weight_count: usize,
    neuron_count: usize,
}

impl NetBuffer {
    /// Allocates a zeroed buffer for the given counts.
    ///
    /// # Returns
    /// The buffer, or `AllocationFailed` if the allocator can't provide it.
    pub fn allocate(weight_count: usize, neuron_count: usize) -> Result<Self> {
        let len = neuron_count
            .checked_mul(2)
            .and_then(|n| n.checked_add(weight_count))
            .ok_or(DiwaErr::AllocationFailed {
                elements: usize::MAX,
            })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| DiwaErr::AllocationFailed { elements: len })?;
        data.resize(len, 0.);

        Ok(Self {
            data,
            weight_count,
            neuron_count,
        })
    }

    /// The total amount of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn weights(&self) -> &[f64] {
        &self.data[..self.weight_count]
    }

    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.data[..self.weight_count]
    }

    pub fn outputs(&self) -> &[f64] {
        &self.data[self.weight_count..self.weight_count + self.neuron_count]
    }

    pub fn deltas(&self) -> &[f64] {
        &self.data[self.weight_count + self.neuron_count..]
    }

    /// Splits the buffer into its three regions.
    pub fn regions_mut(&mut self) -> Regions<'_> {
        let (weights, rest) = self.data.split_at_mut(self.weight_count);
        let (outputs, deltas) = rest.split_at_mut(self.neuron_count);

        Regions {
            weights,
            outputs,
            deltas,
        }
    }
}
