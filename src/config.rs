//! The JSON description of a training run.

use std::{path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    DiwaErr, Result,
    arch::{Topology, activations::ActFn},
    training::{Dataset, FitConfig},
};

/// The specification for the `Topology` struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologySpec {
    pub inputs: usize,
    pub hidden_layers: usize,
    pub hidden_neurons: usize,
    pub outputs: usize,
}

impl TopologySpec {
    pub fn build(&self) -> Result<Topology> {
        Topology::new(
            self.inputs,
            self.hidden_layers,
            self.hidden_neurons,
            self.outputs,
        )
    }
}

/// The specification for the `ActFn` enum, custom functions can't be described.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnSpec {
    #[default]
    Sigmoid,
    Gaussian,
}

impl From<ActFnSpec> for ActFn {
    fn from(spec: ActFnSpec) -> Self {
        match spec {
            ActFnSpec::Sigmoid => ActFn::sigmoid(),
            ActFnSpec::Gaussian => ActFn::gaussian(),
        }
    }
}

impl FromStr for ActFnSpec {
    type Err = DiwaErr;

    /// Parses the same names the JSON config uses.
    fn from_str(name: &str) -> Result<Self> {
        match name {
            "sigmoid" => Ok(Self::Sigmoid),
            "gaussian" => Ok(Self::Gaussian),
            _ => Err(DiwaErr::InvalidParameters(
                "unknown activation function, expected sigmoid or gaussian",
            )),
        }
    }
}

/// A single training sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSpec {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

/// The specification for a whole training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSpec {
    pub topology: TopologySpec,
    #[serde(default)]
    pub activation: ActFnSpec,
    pub learning_rate: f64,
    pub epochs: usize,
    pub seed: Option<u64>,
    #[serde(default)]
    pub shuffle: bool,
    #[serde(default)]
    pub log_every: usize,
    pub samples: Vec<SampleSpec>,
    /// Where to save the trained model.
    pub output: PathBuf,
}

impl TrainingSpec {
    /// Parses a `TrainingSpec` from a JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn dataset(&self) -> Result<Dataset> {
        Dataset::from_samples(self.samples.iter().map(|s| (&s.input, &s.target)))
    }

    pub fn fit_config(&self) -> FitConfig {
        FitConfig {
            learning_rate: self.learning_rate,
            epochs: self.epochs,
            shuffle: self.shuffle,
            seed: self.seed,
            log_every: self.log_every,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XOR: &str = r#"{
        "topology": { "inputs": 2, "hidden_layers": 1, "hidden_neurons": 3, "outputs": 1 },
        "activation": "sigmoid",
        "learning_rate": 6.0,
        "epochs": 5000,
        "seed": 42,
        "shuffle": false,
        "samples": [
            { "input": [0, 0], "target": [1] },
            { "input": [0, 1], "target": [0] },
            { "input": [1, 0], "target": [0] },
            { "input": [1, 1], "target": [1] }
        ],
        "output": "xor.ann"
    }"#;

    #[test]
    fn parses_a_full_spec() {
        let spec = TrainingSpec::from_json(XOR).unwrap();

        assert_eq!(spec.topology.build().unwrap(), Topology::new(2, 1, 3, 1).unwrap());
        assert_eq!(spec.activation, ActFnSpec::Sigmoid);
        assert_eq!(spec.output, PathBuf::from("xor.ann"));

        let dataset = spec.dataset().unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.sample(3).input, [1., 1.]);

        let config = spec.fit_config();
        assert_eq!(config.learning_rate, 6.);
        assert_eq!(config.epochs, 5000);
        assert_eq!(config.seed, Some(42));
        assert!(!config.shuffle);
        assert_eq!(config.log_every, 0);
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{
            "topology": { "inputs": 1, "hidden_layers": 0, "hidden_neurons": 0, "outputs": 1 },
            "learning_rate": 0.5,
            "epochs": 10,
            "samples": [ { "input": [1], "target": [0] } ],
            "output": "out.ann"
        }"#;
        let spec = TrainingSpec::from_json(json).unwrap();

        assert_eq!(spec.activation, ActFnSpec::Sigmoid);
        assert_eq!(spec.seed, None);
        assert!(!spec.shuffle);
    }

    #[test]
    fn gaussian_activation() {
        let json = XOR.replace(r#""sigmoid""#, r#""gaussian""#);
        let spec = TrainingSpec::from_json(&json).unwrap();
        assert_eq!(ActFn::from(spec.activation).name(), "gaussian");
    }

    #[test]
    fn rejects_unknown_activation() {
        let json = XOR.replace(r#""sigmoid""#, r#""relu""#);
        assert!(TrainingSpec::from_json(&json).is_err());
    }

    #[test]
    fn activation_names() {
        assert_eq!("sigmoid".parse::<ActFnSpec>().unwrap(), ActFnSpec::Sigmoid);
        assert_eq!("gaussian".parse::<ActFnSpec>().unwrap(), ActFnSpec::Gaussian);
        assert!(matches!(
            "relu".parse::<ActFnSpec>(),
            Err(DiwaErr::InvalidParameters(_))
        ));
    }

    #[test]
    fn invalid_topology() {
        let json = XOR.replace(r#""outputs": 1"#, r#""outputs": 0"#);
        let spec = TrainingSpec::from_json(&json).unwrap();
        assert!(matches!(
            spec.topology.build(),
            Err(DiwaErr::InvalidParameters(_))
        ));
    }
}
