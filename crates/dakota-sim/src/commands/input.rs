use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use dakota_exp::{to_canonical_json_bytes, Experiment};
use serde::Serialize;

use super::select::SelectArgs;

#[derive(Args, Debug)]
pub struct InputArgs {
    #[command(flatten)]
    pub select: SelectArgs,
    /// Destination of the Dakota input file.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct InputSummary {
    pub method: String,
    pub input_file: String,
    pub sha256: String,
    pub bytes: usize,
}

impl InputSummary {
    pub fn of(experiment: &Experiment) -> Self {
        Self {
            method: experiment.method().name().to_string(),
            input_file: experiment.input_file.display().to_string(),
            sha256: experiment.input_digest(),
            bytes: experiment.input_text().len(),
        }
    }
}

pub fn run(args: &InputArgs) -> Result<(), Box<dyn Error>> {
    let mut experiment = args.select.experiment()?;
    experiment.write_input_file(args.out.as_deref())?;
    let json = to_canonical_json_bytes(&InputSummary::of(&experiment))?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
