use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use super::select::SelectArgs;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub select: SelectArgs,
    /// Destination of the configuration file; defaults to the stored
    /// `configuration_file` field.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &ConfigArgs) -> Result<(), Box<dyn Error>> {
    let mut experiment = args.select.experiment()?;
    let path = experiment.write_configuration_file(args.out.as_deref())?;
    println!("{}", path.display());
    Ok(())
}
