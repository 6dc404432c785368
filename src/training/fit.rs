use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::Dataset;
use crate::{DiwaErr, Result, network::Network};

/// The knobs of an epoch loop.
#[derive(Debug, Clone, PartialEq)]
pub struct FitConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    /// Whether to visit the samples in a new random order every epoch.
    pub shuffle: bool,
    /// Seeds the shuffling, the OS seeds it when unset.
    pub seed: Option<u64>,
    /// Logs the accuracy every `log_every` epochs, `0` disables it.
    pub log_every: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            epochs: 1000,
            shuffle: false,
            seed: None,
            log_every: 0,
        }
    }
}

/// Runs on-line training epochs over a dataset.
pub struct Trainer<R: Rng> {
    learning_rate: f64,
    epochs: usize,
    shuffle: bool,
    log_every: usize,
    rng: R,
}

impl<R: Rng> Trainer<R> {
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `config` - The learning rate, epochs and logging of the loop, its seed is ignored.
    /// * `rng` - The random number generator used to shuffle the samples.
    pub fn new(config: &FitConfig, rng: R) -> Self {
        Self {
            learning_rate: config.learning_rate,
            epochs: config.epochs,
            shuffle: config.shuffle,
            log_every: config.log_every,
            rng,
        }
    }

    /// Performs `epochs` passes over `dataset`, training the network once per sample.
    ///
    /// # Returns
    /// The accuracy over the dataset after the last epoch, or `InvalidParameters` if the
    /// network is empty or the samples don't fit its input and output layers.
    pub fn train(&mut self, network: &mut Network, dataset: &mut Dataset) -> Result<f64> {
        let topology = network.topology();

        if topology.is_empty() {
            return Err(DiwaErr::InvalidParameters("can't train an empty network"));
        }

        if dataset.input_size() != topology.inputs()
            || dataset.target_size() != topology.outputs()
        {
            return Err(DiwaErr::InvalidParameters(
                "the samples don't fit the network's input and output layers",
            ));
        }

        debug!(
            samples = dataset.len(),
            epochs = self.epochs,
            learning_rate = self.learning_rate;
            "training started"
        );

        for epoch in 1..=self.epochs {
            if self.shuffle {
                dataset.shuffle(&mut self.rng);
            }

            for sample in dataset.iter() {
                network.train(self.learning_rate, sample.input, sample.target);
            }

            if self.log_every > 0 && epoch % self.log_every == 0 {
                let accuracy = network.accuracy(dataset);
                info!(epoch = epoch, accuracy = accuracy; "epoch finished");
            }
        }

        let accuracy = network.accuracy(dataset);
        info!(epochs = self.epochs, accuracy = accuracy; "training finished");

        Ok(accuracy)
    }
}

/// Trains `network` over `dataset` as described by `config`.
///
/// # Returns
/// The final accuracy, see [`Trainer::train`].
pub fn fit(network: &mut Network, dataset: &mut Dataset, config: &FitConfig) -> Result<f64> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Trainer::new(config, rng).train(network, dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::Topology;

    fn and() -> Dataset {
        Dataset::from_samples([
            ([0., 0.], [0.]),
            ([0., 1.], [0.]),
            ([1., 0.], [0.]),
            ([1., 1.], [1.]),
        ])
        .unwrap()
    }

    #[test]
    fn learns_and() {
        let mut network = Network::with_seed(1);
        network
            .initialize(Topology::new(2, 0, 0, 1).unwrap(), true)
            .unwrap();

        let config = FitConfig {
            learning_rate: 2.,
            epochs: 2000,
            shuffle: true,
            seed: Some(4),
            log_every: 500,
        };

        let accuracy = fit(&mut network, &mut and(), &config).unwrap();
        assert_eq!(accuracy, 1.);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let config = FitConfig {
            learning_rate: 0.5,
            epochs: 20,
            shuffle: true,
            seed: Some(12),
            log_every: 0,
        };

        let run = || {
            let mut network = Network::with_seed(2);
            network
                .initialize(Topology::new(2, 1, 3, 1).unwrap(), true)
                .unwrap();
            fit(&mut network, &mut and(), &config).unwrap();
            network.weights().to_vec()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn rejects_mismatched_samples() {
        let mut network = Network::with_seed(0);
        network
            .initialize(Topology::new(3, 0, 0, 1).unwrap(), true)
            .unwrap();

        let result = fit(&mut network, &mut and(), &FitConfig::default());
        assert!(matches!(result, Err(DiwaErr::InvalidParameters(_))));
    }

    #[test]
    fn rejects_empty_network() {
        let mut network = Network::with_seed(0);
        let result = fit(&mut network, &mut and(), &FitConfig::default());
        assert!(matches!(result, Err(DiwaErr::InvalidParameters(_))));
    }
}
