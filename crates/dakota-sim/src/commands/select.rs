use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use clap::Args;
use dakota_exp::{mapping_from_yaml_reader, Experiment};
use dakota_methods::METHOD_KEY;
use serde_yaml::{Mapping, Value};

/// How the experiment is chosen: a configuration file or a method name,
/// plus field overrides.
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// YAML configuration file to start from.
    #[arg(long, conflicts_with = "method")]
    pub config: Option<PathBuf>,
    /// Registered method to use; defaults to vector_parameter_study.
    #[arg(long)]
    pub method: Option<String>,
    /// Field override such as `n_steps=5` or `final_point=[1, 1]`.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, Value)>,
}

impl SelectArgs {
    pub fn experiment(&self) -> Result<Experiment, Box<dyn Error>> {
        let mut mapping = match (&self.config, &self.method) {
            (Some(path), _) => mapping_from_yaml_reader(File::open(path)?)?,
            (None, Some(method)) => {
                let mut mapping = Mapping::new();
                mapping.insert(METHOD_KEY.into(), method.as_str().into());
                mapping
            }
            (None, None) => Mapping::new(),
        };
        for (key, value) in &self.set {
            mapping.insert(key.as_str().into(), value.clone());
        }
        Ok(Experiment::from_mapping(mapping)?)
    }
}

fn parse_assignment(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field name in `{raw}`"));
    }
    let value: Value =
        serde_yaml::from_str(value).map_err(|err| format!("invalid value for {key}: {err}"))?;
    Ok((key.to_string(), value))
}
