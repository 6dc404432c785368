use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::{ParamGen, WEIGHT_HIGH, WEIGHT_LOW};
use crate::{DiwaErr, Result};

/// A parameter generator that follows a certain probabilistic distribution, drawing from a
/// borrowed random number generator.
pub struct RandParamGen<'r, R: Rng, D: Distribution<f64>> {
    rng: &'r mut R,
    distribution: D,
}

impl<'r, R: Rng, D: Distribution<f64>> RandParamGen<'r, R, D> {
    /// Creates a new `RandParamGen` parameter generator.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `distribution` - The distribution to sample the random numbers from.
    pub fn new(rng: &'r mut R, distribution: D) -> Self {
        Self { rng, distribution }
    }
}

impl<'r, R: Rng> RandParamGen<'r, R, Uniform<f64>> {
    /// Creates a new `RandParamGen` parameter generator with a uniform distribution.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `low` - The inclusive lower limit.
    /// * `high` - The exclusive upper limit.
    ///
    /// # Returns
    /// An error if the range is invalid (low >= high or not finite).
    pub fn uniform(rng: &'r mut R, low: f64, high: f64) -> Result<Self> {
        let distribution = Uniform::new(low, high)
            .map_err(|_| DiwaErr::InvalidParameters("invalid weight distribution range"))?;

        Ok(Self::new(rng, distribution))
    }

    /// Creates the generator used when a network randomizes its weights, uniform in
    /// `[WEIGHT_LOW, WEIGHT_HIGH)`.
    pub fn weights(rng: &'r mut R) -> Result<Self> {
        Self::uniform(rng, WEIGHT_LOW, WEIGHT_HIGH)
    }
}

impl<R: Rng, D: Distribution<f64>> ParamGen for RandParamGen<'_, R, D> {
    fn fill(&mut self, params: &mut [f64]) {
        for param in params {
            *param = self.distribution.sample(&mut *self.rng);
        }
    }
}
