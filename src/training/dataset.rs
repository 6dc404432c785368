use rand::{Rng, seq::SliceRandom};

use crate::{DiwaErr, Result};

/// A single supervised sample, borrowed from a `Dataset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<'a> {
    pub input: &'a [f64],
    pub target: &'a [f64],
}

/// An in-memory set of samples stored as two flat buffers.
///
/// Sample `i` owns `inputs[i * input_size..][..input_size]` and
/// `targets[i * target_size..][..target_size]`. The visiting order can be shuffled without
/// moving the samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    inputs: Vec<f64>,
    targets: Vec<f64>,
    input_size: usize,
    target_size: usize,
    order: Vec<usize>,
}

impl Dataset {
    /// Creates a new `Dataset` from owned buffers.
    ///
    /// # Returns
    /// The dataset, or `InvalidParameters` if there are no targets per sample or the buffers
    /// don't hold the same amount of whole samples.
    pub fn new(
        inputs: Vec<f64>,
        targets: Vec<f64>,
        input_size: usize,
        target_size: usize,
    ) -> Result<Self> {
        if target_size == 0 {
            return Err(DiwaErr::InvalidParameters(
                "samples need at least one target value",
            ));
        }

        if targets.len() % target_size != 0 {
            return Err(DiwaErr::InvalidParameters(
                "targets don't split into whole samples",
            ));
        }

        let len = targets.len() / target_size;
        if inputs.len() != len * input_size {
            return Err(DiwaErr::InvalidParameters(
                "inputs and targets hold different amounts of samples",
            ));
        }

        Ok(Self {
            inputs,
            targets,
            input_size,
            target_size,
            order: (0..len).collect(),
        })
    }

    /// Creates a new `Dataset` from `(input, target)` pairs, every pair must share the
    /// first one's widths.
    pub fn from_samples<I, X, Y>(samples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (X, Y)>,
        X: AsRef<[f64]>,
        Y: AsRef<[f64]>,
    {
        let mut inputs = Vec::new();
        let mut targets = Vec::new();
        let mut sizes = None;

        for (input, target) in samples {
            let (input, target) = (input.as_ref(), target.as_ref());
            let (input_size, target_size) = *sizes.get_or_insert((input.len(), target.len()));

            if input.len() != input_size || target.len() != target_size {
                return Err(DiwaErr::InvalidParameters(
                    "every sample must have the same widths",
                ));
            }

            inputs.extend_from_slice(input);
            targets.extend_from_slice(target);
        }

        let (input_size, target_size) = sizes.ok_or(DiwaErr::InvalidParameters(
            "a dataset needs at least one sample",
        ))?;

        Self::new(inputs, targets, input_size, target_size)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    #[inline]
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// Returns the sample at `idx` in storage order (panics if out of bounds).
    #[inline]
    pub fn sample(&self, idx: usize) -> Sample<'_> {
        Sample {
            input: &self.inputs[idx * self.input_size..][..self.input_size],
            target: &self.targets[idx * self.target_size..][..self.target_size],
        }
    }

    /// Shuffles the visiting order of `iter`.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.order.shuffle(rng);
    }

    /// Iterates the samples in the current visiting order.
    pub fn iter(&self) -> impl Iterator<Item = Sample<'_>> {
        self.order.iter().map(|&idx| self.sample(idx))
    }
}
