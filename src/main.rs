use std::{env, fs, process};

use anyhow::{Context, Result, bail};
use log::info;

use diwa::{
    ActFn, Network,
    config::{ActFnSpec, TrainingSpec},
    fit,
};

const USAGE: &str = "usage: diwa train <config.json> | \
                     diwa infer [--activation sigmoid|gaussian] <model> <inputs...>";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((mode, rest)) = args.split_first() else {
        eprintln!("{USAGE}");
        process::exit(1);
    };

    match (mode.as_str(), rest) {
        ("train", [config]) => train(config),
        ("infer", [_, ..]) => {
            let (activation, model, inputs) = infer_args(rest)?;
            infer(activation, model, inputs)
        }
        _ => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
    }
}

fn train(path: &str) -> Result<()> {
    let json = fs::read_to_string(path).with_context(|| format!("cannot read '{path}'"))?;
    let spec =
        TrainingSpec::from_json(&json).with_context(|| format!("invalid config '{path}'"))?;

    let topology = spec.topology.build()?;
    let mut dataset = spec.dataset()?;

    let mut network = match spec.seed {
        Some(seed) => Network::with_seed(seed),
        None => Network::new(),
    };
    network.set_activation(ActFn::from(spec.activation));
    network.initialize(topology, true)?;

    info!(
        "training {topology:?} on {} samples for {} epochs",
        dataset.len(),
        spec.epochs
    );

    let accuracy = fit(&mut network, &mut dataset, &spec.fit_config())?;

    network
        .save_to_file(&spec.output)
        .with_context(|| format!("cannot save model to '{}'", spec.output.display()))?;

    println!(
        "accuracy {:.2}%, model saved to {}",
        accuracy * 100.,
        spec.output.display()
    );
    if spec.activation != ActFnSpec::Sigmoid {
        println!(
            "the model doesn't store its activation, infer with --activation {}",
            network.activation().name()
        );
    }
    Ok(())
}

/// Splits `[--activation <name>] <model> <inputs...>`, the activation defaults to sigmoid.
fn infer_args(args: &[String]) -> Result<(ActFnSpec, &str, &[String])> {
    match args {
        [flag, name, model, inputs @ ..] if flag == "--activation" => {
            let activation = name
                .parse::<ActFnSpec>()
                .with_context(|| format!("invalid activation '{name}'"))?;
            Ok((activation, model.as_str(), inputs))
        }
        [flag, ..] if flag == "--activation" => bail!("{USAGE}"),
        [model, inputs @ ..] => Ok((ActFnSpec::default(), model.as_str(), inputs)),
        [] => bail!("{USAGE}"),
    }
}

fn infer(activation: ActFnSpec, path: &str, inputs: &[String]) -> Result<()> {
    let mut network = Network::new();
    network
        .load_from_file(path)
        .with_context(|| format!("cannot load model '{path}'"))?;
    network.set_activation(ActFn::from(activation));

    let inputs = inputs
        .iter()
        .map(|x| x.parse::<f64>().with_context(|| format!("'{x}' is not a number")))
        .collect::<Result<Vec<_>>>()?;

    let expected = network.topology().inputs();
    if inputs.len() != expected {
        bail!("the model takes {expected} inputs, got {}", inputs.len());
    }

    let outputs = network.inference(&inputs);
    println!(
        "{}",
        outputs
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn infer_defaults_to_sigmoid() {
        let args = args(&["xor.ann", "0", "1"]);
        let (activation, model, inputs) = infer_args(&args).unwrap();

        assert_eq!(activation, ActFnSpec::Sigmoid);
        assert_eq!(model, "xor.ann");
        assert_eq!(inputs, ["0", "1"]);
    }

    #[test]
    fn infer_with_gaussian() {
        let args = args(&["--activation", "gaussian", "xor.ann", "1", "1"]);
        let (activation, model, inputs) = infer_args(&args).unwrap();

        assert_eq!(activation, ActFnSpec::Gaussian);
        assert_eq!(model, "xor.ann");
        assert_eq!(inputs, ["1", "1"]);
    }

    #[test]
    fn infer_rejects_bad_activations() {
        assert!(infer_args(&args(&["--activation", "relu", "xor.ann"])).is_err());
        assert!(infer_args(&args(&["--activation", "gaussian"])).is_err());
        assert!(infer_args(&args(&[])).is_err());
    }

    #[test]
    fn gaussian_model_reloads_with_its_activation() {
        let path = env::temp_dir().join(format!("diwa-{}-gaussian.ann", process::id()));

        let mut trained = Network::with_seed(0);
        trained.set_activation(ActFn::gaussian());
        trained
            .initialize(diwa::Topology::new(2, 1, 3, 1).unwrap(), true)
            .unwrap();
        for _ in 0..200 {
            trained.train(0.5, &[1., 0.], &[0.9]);
        }
        trained.save_to_file(&path).unwrap();
        let expected = trained.inference(&[1., 0.]).to_vec();

        let args = args(&["--activation", "gaussian", "model", "1", "0"]);
        let (activation, _, _) = infer_args(&args).unwrap();

        let mut reloaded = Network::new();
        let loaded = reloaded.load_from_file(&path);
        let _ = fs::remove_file(&path);
        loaded.unwrap();
        reloaded.set_activation(ActFn::from(activation));

        assert_eq!(reloaded.inference(&[1., 0.]), expected);
    }
}
